//! # full_count
//!
//! A deterministic daily baseball trivia chain built from historical
//! statistics tables.
//!
//! Each day the library picks nine players, one per fielding position, where
//! every player was a teammate of the one before. The player sees a stat card
//! for each slot and guesses who it is.
//!
//! ## How it works
//!
//! 1. Load the CSV tables with [`Dataset::load`] and derive the read-only
//!    lookups once with [`AggregateIndex::build`].
//! 2. Call [`generate_chain`] with a [`ChainRequest`]. The engine maps the
//!    weekday to an all-star threshold, seeds its RNG from the date
//!    (`YYYYMMDD`), picks an opening pitcher, and walks the teammate graph one
//!    position at a time.
//! 3. The returned [`DailyChain`] holds nine [`ChainEntry`] values with stat
//!    reports, the season that links each entry to the previous one, and hints.
//!
//! ## Key features
//!
//! - **Deterministic**: the same date and dataset always produce the same
//!   chain. [`DailyChainCache`] memoizes it per (date, dataset version).
//! - **Difficulty by weekday**: Monday needs 5+ all-star selections, down to
//!   1+ on Friday and the weekend. When no teammate at the required position
//!   meets the threshold it is relaxed for that slot, never the position.
//! - **Dead ends**: by default the walk backtracks when a branch has no
//!   teammate at the next position; [`FallbackPolicy::Fail`] reports the
//!   first dead end instead.
//!
//! ## Quick start
//!
//! ```no_run
//! use full_count::{generate_chain, AggregateIndex, ChainRequest, DataSource, Dataset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = Dataset::load(&DataSource::new("data/lahman"))?;
//! let index = AggregateIndex::build(&data);
//!
//! let chain = generate_chain(&index, &ChainRequest::today())?;
//! println!("{}", chain.difficulty.label);
//! for entry in &chain.entries {
//!     match &entry.connection {
//!         Some(link) => println!("{} (via {link})\n{}", entry.position, entry.report),
//!         None       => println!("{}\n{}", entry.position, entry.report),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod lineup_engine;

// Convenience re-exports so callers can use `full_count::generate_chain`
// directly without reaching into `lineup_engine::`.
pub use lineup_engine::{
    daily_seed, generate_chain, AggregateIndex, ChainEntry, ChainError, ChainRequest, Connection,
    DailyChain, DailyChainCache, DataSource, Dataset, DatasetError, DifficultySetting,
    FallbackPolicy, GameSession, GuessOutcome, HintKind, Hints, Position, SessionError,
    SlotResult, StatLine, LINEUP_SIZE,
};

#[cfg(test)]
mod tests;
