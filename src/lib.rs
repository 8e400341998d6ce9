/*!
# MicroMood

MicroMood records one mood value per calendar day, optionally with free-text
notes, and lets you review your history by month, as a weekly summary, or as a
CSV export that can be imported again later.

## Core Features

- Toggle a day's mood: selecting a new score records or updates it, selecting
  the same score again clears it
- Attach notes to a recorded day
- Month-at-a-time history views
- CSV export, and lenient CSV import that never overwrites existing days
- Current streak and this week's mood frequency

## Architecture

- `mood`: The data model (`DateKey`, `MoodScore`, `MoodRecord`)
- `store`: The `MoodStore` seam and an in-memory implementation
- `db`: SQLite implementation of the store
- `csv_codec`: CSV encoding and best-effort decoding
- `summary`: Streak and weekly frequency calculations
- `ops`: User-facing operations over a store
- `cli`, `config`, `errors`: Command line, configuration and error handling

## Usage Example

```rust
use micromood::mood::DateKey;
use micromood::ops::{self, SelectionOutcome};
use micromood::store::MemoryStore;

fn main() -> micromood::AppResult<()> {
    let store = MemoryStore::new();
    let day = DateKey::from_ymd(2025, 1, 15).unwrap();

    assert_eq!(ops::select_mood(&store, day, 2)?, SelectionOutcome::Created);
    assert_eq!(ops::select_mood(&store, day, 2)?, SelectionOutcome::Cleared);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// CSV export and import
pub mod csv_codec;
/// SQLite persistence
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Mood data model
pub mod mood;
/// High-level operations
pub mod ops;
/// The mood store seam
pub mod store;
/// Streak and weekly aggregation
pub mod summary;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use mood::{DateKey, MoodRecord, MoodScore};
pub use store::MoodStore;
