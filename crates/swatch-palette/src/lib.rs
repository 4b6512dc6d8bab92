//! # swatch-palette — saved palettes and their interchange formats
//!
//! ```text
//! text / JSON ──▶ import.rs ──▶ Palette ──▶ store.rs (one JSON file)
//!                                  │
//!                                  ▼
//!                              export.rs ──▶ CSS / SCSS / Less / Tailwind / JSON / text
//! ```

pub mod error;
pub mod export;
pub mod import;
pub mod palette;
pub mod store;

pub use error::{Result, StoreError};
pub use export::{ExportFormat, export, slug};
pub use import::{import_json, parse_colors};
pub use palette::Palette;
pub use store::PaletteStore;
