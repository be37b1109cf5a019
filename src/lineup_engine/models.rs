use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Lineup positions
// ---------------------------------------------------------------------------

/// Number of slots in a daily lineup chain.
pub const LINEUP_SIZE: usize = 9;

/// The nine fielding positions, in canonical lineup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
}

impl Position {
    /// Slot order: slot `i` of every chain is `Position::ALL[i]`.
    pub const ALL: [Position; LINEUP_SIZE] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    /// Games-played column for this position in the appearances table.
    pub fn column(self) -> &'static str {
        match self {
            Position::Pitcher     => "G_p",
            Position::Catcher     => "G_c",
            Position::FirstBase   => "G_1b",
            Position::SecondBase  => "G_2b",
            Position::ThirdBase   => "G_3b",
            Position::Shortstop   => "G_ss",
            Position::LeftField   => "G_lf",
            Position::CenterField => "G_cf",
            Position::RightField  => "G_rf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Pitcher     => "Pitcher",
            Position::Catcher     => "Catcher",
            Position::FirstBase   => "1st Base",
            Position::SecondBase  => "2nd Base",
            Position::ThirdBase   => "3rd Base",
            Position::Shortstop   => "Shortstop",
            Position::LeftField   => "Left Field",
            Position::CenterField => "Center Field",
            Position::RightField  => "Right Field",
        }
    }

    /// Index of this position within [`Position::ALL`].
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// The day's difficulty: minimum all-star selections a candidate should have,
/// plus the label and accent color the presentation layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultySetting {
    pub threshold: u32,
    pub label: &'static str,
    pub color: &'static str,
}

/// Monday through Friday. Weekend days reuse the Friday entry.
pub const DIFFICULTY_TABLE: [DifficultySetting; 5] = [
    DifficultySetting { threshold: 5, label: "MON: HALL OF FAME (5+ ASG)", color: "#00FF41" },
    DifficultySetting { threshold: 4, label: "TUE: LEGENDS (4+ ASG)",      color: "#00D4FF" },
    DifficultySetting { threshold: 3, label: "WED: ALL-STARS (3+ ASG)",    color: "#FFD700" },
    DifficultySetting { threshold: 2, label: "THU: VETERANS (2+ ASG)",     color: "#FF8C00" },
    DifficultySetting { threshold: 1, label: "FRI: DEEP CUTS (1+ ASG)",    color: "#FF4B4B" },
];

impl DifficultySetting {
    pub fn for_date(date: NaiveDate) -> Self {
        let day = date.weekday().num_days_from_monday() as usize;
        DIFFICULTY_TABLE
            .get(day)
            .copied()
            .unwrap_or(DIFFICULTY_TABLE[4])
    }

    /// Hard days draw the opening pitcher from the smaller, more famous pool.
    pub fn is_hard(&self) -> bool {
        self.threshold >= 4
    }
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// What to do when a walk step finds no teammate at the required position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// Re-roll earlier picks depth-first; give up after `max_attempts` picks.
    Backtrack { max_attempts: u32 },
    /// Single pass: the first empty pool is a generation error.
    Fail,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::Backtrack { max_attempts: 10_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRequest {
    pub date: NaiveDate,
    /// Overrides the built-in starter pools when set.
    pub starters: Option<Vec<String>>,
    pub fallback: FallbackPolicy,
}

impl ChainRequest {
    /// Request for `date` with the built-in starter pools and backtracking.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            starters: None,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Request for the local calendar date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_starters<I, S>(mut self, starters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starters = Some(starters.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}

// ---------------------------------------------------------------------------
// Chain output
// ---------------------------------------------------------------------------

/// Career totals shown on a player's card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatLine {
    Pitcher { wins: u32, strikeouts: u32 },
    Position { hits: u32, home_runs: u32, stolen_bases: u32 },
}

/// The shared season that links an entry to the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub year: u16,
    pub team: String,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.team)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints {
    /// Height and handedness, e.g. `74" | R/R`.
    pub bio: String,
    /// Birth city and state.
    pub origin: String,
    /// Display names of every franchise the player appeared for, sorted.
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainEntry {
    pub slot: usize,
    pub position: Position,
    pub player_id: String,
    pub name: String,
    pub all_star_count: u32,
    pub stats: StatLine,
    pub report: String,
    /// `None` for slot 0.
    pub connection: Option<Connection>,
    /// True when no teammate met the day's all-star threshold.
    pub relaxed: bool,
    pub difficulty: DifficultySetting,
    pub hints: Hints,
}

/// One day's puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyChain {
    pub date: NaiveDate,
    pub seed: u64,
    pub dataset_version: String,
    pub difficulty: DifficultySetting,
    pub entries: Vec<ChainEntry>,
}

impl DailyChain {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
