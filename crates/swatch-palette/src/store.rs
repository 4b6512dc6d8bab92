//! JSON-file palette store.
//!
//! The whole collection lives in one pretty-printed JSON array. It is read
//! once on [`PaletteStore::open`] and rewritten after every mutation, via a
//! sibling temp file and a rename so a crash never leaves half a file.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use swatch_color::Color;

use crate::error::{Result, StoreError};
use crate::palette::Palette;

#[derive(Debug)]
pub struct PaletteStore {
    path: PathBuf,
    palettes: Vec<Palette>,
}

impl PaletteStore {
    /// Open the store at `path`. A missing or empty file is an empty store.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the file exists but cannot be read, and
    /// [`StoreError::Corrupt`] if it does not hold a palette array.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let palettes = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            Vec::new()
        };
        debug!("opened palette store {} ({} palettes)", path.display(), palettes.len());
        Ok(Self { path, palettes })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All palettes in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Palette] {
        &self.palettes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// First palette whose name matches, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Palette> {
        let name = name.trim();
        self.palettes.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Build and store a new palette, bumping its id past any collision.
    ///
    /// # Errors
    ///
    /// Propagates write failures from persisting the store.
    pub fn create(&mut self, name: impl Into<String>, colors: Vec<Color>) -> Result<&Palette> {
        let mut palette = Palette::new(name, colors);
        while self.get(palette.id).is_some() {
            palette.id += 1;
        }
        let index = self.palettes.len();
        self.palettes.push(palette);
        self.persist()?;
        Ok(&self.palettes[index])
    }

    /// Insert `palette`, or replace the stored one with the same id.
    ///
    /// # Errors
    ///
    /// Propagates write failures from persisting the store.
    pub fn save(&mut self, palette: Palette) -> Result<()> {
        match self.palettes.iter_mut().find(|p| p.id == palette.id) {
            Some(existing) => {
                trace!("replacing palette {}", palette.id);
                *existing = palette;
            }
            None => {
                trace!("inserting palette {}", palette.id);
                self.palettes.push(palette);
            }
        }
        self.persist()
    }

    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown id, otherwise write failures.
    pub fn rename(&mut self, id: i64, name: impl Into<String>) -> Result<()> {
        let palette = self
            .palettes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        palette.name = name.into();
        self.persist()
    }

    /// Remove and return the palette with `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown id, otherwise write failures.
    pub fn delete(&mut self, id: i64) -> Result<Palette> {
        let index = self
            .palettes
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.palettes.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Remove every palette.
    ///
    /// # Errors
    ///
    /// Propagates write failures from persisting the store.
    pub fn clear(&mut self) -> Result<()> {
        self.palettes.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.palettes)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!("saved {} palettes to {}", self.palettes.len(), self.path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn colors() -> Vec<Color> {
        vec![Color::rgb8(0x1e, 0x90, 0xff), Color::WHITE]
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = PaletteStore::open(dir.path().join("palettes.json")).unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn create_persists_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palettes.json");
        let mut store = PaletteStore::open(&path).unwrap();
        let id = store.create("Sky", colors()).unwrap().id;

        let reopened = PaletteStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        let p = reopened.get(id).unwrap();
        assert_eq!(p.name, "Sky");
        assert_eq!(p.colors, colors());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn create_never_reuses_an_id() {
        let dir = tempdir().unwrap();
        let mut store = PaletteStore::open(dir.path().join("p.json")).unwrap();
        let a = store.create("a", colors()).unwrap().id;
        let b = store.create("b", colors()).unwrap().id;
        let c = store.create("c", colors()).unwrap().id;
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn save_inserts_then_replaces() {
        let dir = tempdir().unwrap();
        let mut store = PaletteStore::open(dir.path().join("p.json")).unwrap();
        let mut p = Palette::new("First", colors());
        store.save(p.clone()).unwrap();
        p.colors.push(Color::BLACK);
        store.save(p.clone()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(p.id).unwrap().colors.len(), 3);
    }

    #[test]
    fn rename_and_find_by_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        let mut store = PaletteStore::open(&path).unwrap();
        let id = store.create("Draft", colors()).unwrap().id;
        store.rename(id, "Brand").unwrap();

        let reopened = PaletteStore::open(&path).unwrap();
        assert_eq!(reopened.find_by_name("brand").map(|p| p.id), Some(id));
        assert!(reopened.find_by_name("Draft").is_none());
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let dir = tempdir().unwrap();
        let mut store = PaletteStore::open(dir.path().join("p.json")).unwrap();
        assert!(matches!(store.rename(1, "x"), Err(StoreError::NotFound(1))));
        assert!(matches!(store.delete(2), Err(StoreError::NotFound(2))));
    }

    #[test]
    fn delete_and_clear() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        let mut store = PaletteStore::open(&path).unwrap();
        let a = store.create("a", colors()).unwrap().id;
        store.create("b", colors()).unwrap();

        let removed = store.delete(a).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(PaletteStore::open(&path).unwrap().len(), 1);

        store.clear().unwrap();
        assert!(PaletteStore::open(&path).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(PaletteStore::open(&path), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn empty_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        fs::write(&path, "\n").unwrap();
        assert!(PaletteStore::open(&path).unwrap().is_empty());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/p.json");
        let mut store = PaletteStore::open(&path).unwrap();
        store.create("x", colors()).unwrap();
        assert!(path.exists());
    }
}
