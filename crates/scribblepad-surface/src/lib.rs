//! Scribblepad Surface Library
//!
//! The raster drawing surface: a pixel buffer, immediate-mode stroke
//! painting, a bounded snapshot undo history, content-preserving
//! resize, and the hold-to-confirm clear gesture. Also carries PNG
//! export/import and simple drawing storage backends.

pub mod export;
mod painter;
pub mod pixmap;
pub mod storage;
pub mod surface;

pub use export::{ExportError, SavedDrawing, decode_png, encode_png};
pub use pixmap::{Pixmap, Snapshot};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use surface::{DrawingSurface, SurfaceConfig};
