//! Core lineup engine: dataset loading, aggregate indexing, and chain generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: positions, difficulty table, request/response structs |
//! | `error`     | `DatasetError`, `ChainError`, `SessionError` |
//! | `dataset`   | CSV table loading with required-column checks |
//! | `teammates` | (year, team) rosters and teammate links, built once |
//! | `index`     | Per-player aggregates: all-star counts, positions, names, stat lines |
//! | `report`    | Stat card and hint text for each chain entry |
//! | `generator` | Single entry point `generate_chain()`, a seeded position-constrained walk |
//! | `cache`     | Per-day memoization of generated chains |
//! | `session`   | Guess / reveal / hint bookkeeping for one player's game |

pub mod cache;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod index;
pub mod models;
pub mod report;
pub mod session;
pub mod teammates;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export the public API surface so callers can use
// `lineup_engine::generate_chain` without reaching into sub-modules.
pub use cache::DailyChainCache;
pub use dataset::{DataSource, Dataset};
pub use error::{ChainError, DatasetError, SessionError};
pub use generator::{daily_seed, generate_chain, EASY_STARTERS, HARD_STARTERS};
pub use index::AggregateIndex;
pub use models::{
    ChainEntry, ChainRequest, Connection, DailyChain, DifficultySetting, FallbackPolicy, Hints,
    Position, StatLine, DIFFICULTY_TABLE, LINEUP_SIZE,
};
pub use session::{GameSession, GuessOutcome, HintKind, SlotResult};
