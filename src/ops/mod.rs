//! High-level mood operations.
//!
//! This module provides the user-facing operations that orchestrate the core:
//! the mood toggle, note editing, month views, CSV import/export and the
//! weekly summary. Every operation takes the store explicitly, and anything
//! that depends on the current time takes it as a parameter.

pub mod export;
pub mod history;
pub mod import;
pub mod lock;
pub mod select;
pub mod summarize;

// Re-export commonly used functions
pub use export::{export_csv, export_file_name, export_to_dir};
pub use history::{month_view, render_month};
pub use import::{import_csv, import_file, merge, ImportReport, MergeCounts};
pub use lock::WriteLock;
pub use select::{delete_mood, select_mood, update_notes, update_tags, SelectionOutcome};
pub use summarize::weekly_summary;
