//! Error types for loading the dataset and generating chains.

use std::path::PathBuf;

use thiserror::Error;

use crate::lineup_engine::models::Position;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("required table {table} not found at {}", .path.display())]
    MissingTable { table: &'static str, path: PathBuf },

    #[error("table {table} is missing required column {column}")]
    MissingColumn { table: &'static str, column: &'static str },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in table {table}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("no starter in the pool is a known pitcher")]
    NoStarter,

    #[error("no {position} teammate for {player_id} at slot {slot}")]
    DeadEnd {
        slot: usize,
        position: Position,
        player_id: String,
    },

    #[error("no complete chain found after {attempts} picks")]
    Exhausted { attempts: u32 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,

    #[error("the current player was revealed; advance to the next inning")]
    AwaitingAdvance,

    #[error("nothing to advance past; the current player is still in play")]
    NotRevealed,
}
