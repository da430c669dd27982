//! Text normalization applied between extraction and the language pipeline.

mod cleanup;

pub use cleanup::{collapse_whitespace, CleanupOptions, CleanupPipeline, CleanupPreset};
