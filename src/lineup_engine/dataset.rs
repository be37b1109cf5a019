//! Loads the raw historical tables from a directory of CSV files.
//!
//! Four tables are required (`People`, `Appearances`, `AllstarFull`, `Teams`);
//! a missing file or a missing required column is a [`DatasetError`].
//! `Batting` and `Pitching` are optional: when the file is absent the table is
//! `None` and career totals derived from it read as zero.
//!
//! Numeric cells that are blank or unparsable read as zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::lineup_engine::{error::DatasetError, models::Position};

// ---------------------------------------------------------------------------
// Table descriptors
// ---------------------------------------------------------------------------

/// File name and required header columns of one source table.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub file: &'static str,
    pub columns: &'static [&'static str],
}

pub const PEOPLE: TableSpec = TableSpec {
    name: "People",
    file: "People.csv",
    columns: &[
        "playerID", "nameFirst", "nameLast", "birthCity", "birthState",
        "height", "bats", "throws", "debut",
    ],
};

pub const APPEARANCES: TableSpec = TableSpec {
    name: "Appearances",
    file: "Appearances.csv",
    columns: &[
        "playerID", "yearID", "teamID",
        "G_p", "G_c", "G_1b", "G_2b", "G_3b", "G_ss", "G_lf", "G_cf", "G_rf",
    ],
};

pub const ALLSTARS: TableSpec = TableSpec {
    name: "AllstarFull",
    file: "AllstarFull.csv",
    columns: &["playerID"],
};

pub const TEAMS: TableSpec = TableSpec {
    name: "Teams",
    file: "Teams.csv",
    columns: &["teamID", "yearID", "name"],
};

pub const BATTING: TableSpec = TableSpec {
    name: "Batting",
    file: "Batting.csv",
    columns: &["playerID", "H", "HR", "SB"],
};

pub const PITCHING: TableSpec = TableSpec {
    name: "Pitching",
    file: "Pitching.csv",
    columns: &["playerID", "W", "SO"],
};

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonRow {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "nameFirst", default)]
    pub name_first: String,
    #[serde(rename = "nameLast", default)]
    pub name_last: String,
    #[serde(rename = "birthCity", default)]
    pub birth_city: String,
    #[serde(rename = "birthState", default)]
    pub birth_state: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub bats: String,
    #[serde(default)]
    pub throws: String,
    #[serde(default)]
    pub debut: String,
}

impl PersonRow {
    /// First and last name joined by a single space; blank parts stay empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name_first, self.name_last)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppearanceRow {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "yearID")]
    pub year: u16,
    #[serde(rename = "teamID")]
    pub team_id: String,
    #[serde(rename = "G_p", default, deserialize_with = "csv::invalid_option")]
    pub g_p: Option<u32>,
    #[serde(rename = "G_c", default, deserialize_with = "csv::invalid_option")]
    pub g_c: Option<u32>,
    #[serde(rename = "G_1b", default, deserialize_with = "csv::invalid_option")]
    pub g_1b: Option<u32>,
    #[serde(rename = "G_2b", default, deserialize_with = "csv::invalid_option")]
    pub g_2b: Option<u32>,
    #[serde(rename = "G_3b", default, deserialize_with = "csv::invalid_option")]
    pub g_3b: Option<u32>,
    #[serde(rename = "G_ss", default, deserialize_with = "csv::invalid_option")]
    pub g_ss: Option<u32>,
    #[serde(rename = "G_lf", default, deserialize_with = "csv::invalid_option")]
    pub g_lf: Option<u32>,
    #[serde(rename = "G_cf", default, deserialize_with = "csv::invalid_option")]
    pub g_cf: Option<u32>,
    #[serde(rename = "G_rf", default, deserialize_with = "csv::invalid_option")]
    pub g_rf: Option<u32>,
}

impl AppearanceRow {
    /// Games played at `position` this season; blank reads as zero.
    pub fn games_at(&self, position: Position) -> u32 {
        let games = match position {
            Position::Pitcher     => self.g_p,
            Position::Catcher     => self.g_c,
            Position::FirstBase   => self.g_1b,
            Position::SecondBase  => self.g_2b,
            Position::ThirdBase   => self.g_3b,
            Position::Shortstop   => self.g_ss,
            Position::LeftField   => self.g_lf,
            Position::CenterField => self.g_cf,
            Position::RightField  => self.g_rf,
        };
        games.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AllStarRow {
    #[serde(rename = "playerID")]
    pub player_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TeamRow {
    #[serde(rename = "teamID")]
    pub team_id: String,
    #[serde(rename = "yearID")]
    pub year: u16,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BattingRow {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "H", default, deserialize_with = "csv::invalid_option")]
    pub hits: Option<u32>,
    #[serde(rename = "HR", default, deserialize_with = "csv::invalid_option")]
    pub home_runs: Option<u32>,
    #[serde(rename = "SB", default, deserialize_with = "csv::invalid_option")]
    pub stolen_bases: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PitchingRow {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "W", default, deserialize_with = "csv::invalid_option")]
    pub wins: Option<u32>,
    #[serde(rename = "SO", default, deserialize_with = "csv::invalid_option")]
    pub strikeouts: Option<u32>,
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Where the CSV tables live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub dir: PathBuf,
}

impl DataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, table: &TableSpec) -> PathBuf {
        self.dir.join(table.file)
    }
}

/// Every raw table, read once and treated as immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub people: Vec<PersonRow>,
    pub appearances: Vec<AppearanceRow>,
    pub allstars: Vec<AllStarRow>,
    pub teams: Vec<TeamRow>,
    pub batting: Option<Vec<BattingRow>>,
    pub pitching: Option<Vec<PitchingRow>>,
    /// Hex SHA-256 over every loaded table, in table order.
    pub version: String,
}

impl Dataset {
    pub fn load(source: &DataSource) -> Result<Self, DatasetError> {
        let mut hasher = Sha256::new();

        let people = load_required(source, &PEOPLE, &mut hasher)?;
        let appearances = load_required(source, &APPEARANCES, &mut hasher)?;
        let allstars = load_required(source, &ALLSTARS, &mut hasher)?;
        let teams = load_required(source, &TEAMS, &mut hasher)?;
        let batting = load_optional(source, &BATTING, &mut hasher)?;
        let pitching = load_optional(source, &PITCHING, &mut hasher)?;

        let version = format!("{:x}", hasher.finalize());
        info!(
            dir = %source.dir.display(),
            people = people.len(),
            appearances = appearances.len(),
            allstars = allstars.len(),
            teams = teams.len(),
            batting = batting.as_ref().map_or(0, Vec::len),
            pitching = pitching.as_ref().map_or(0, Vec::len),
            %version,
            "dataset loaded"
        );

        Ok(Self { people, appearances, allstars, teams, batting, pitching, version })
    }
}

fn load_required<T: DeserializeOwned>(
    source: &DataSource,
    table: &TableSpec,
    hasher: &mut Sha256,
) -> Result<Vec<T>, DatasetError> {
    let path = source.path_of(table);
    match read_file(&path)? {
        Some(bytes) => {
            hash_table(hasher, table, &bytes);
            parse_table(table, &bytes)
        }
        None => Err(DatasetError::MissingTable { table: table.name, path }),
    }
}

fn load_optional<T: DeserializeOwned>(
    source: &DataSource,
    table: &TableSpec,
    hasher: &mut Sha256,
) -> Result<Option<Vec<T>>, DatasetError> {
    let path = source.path_of(table);
    match read_file(&path)? {
        Some(bytes) => {
            hash_table(hasher, table, &bytes);
            parse_table(table, &bytes).map(Some)
        }
        None => {
            warn!(table = table.name, path = %path.display(), "optional table absent, totals read as zero");
            Ok(None)
        }
    }
}

/// `Ok(None)` when the file does not exist.
fn read_file(path: &Path) -> Result<Option<Vec<u8>>, DatasetError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(DatasetError::Io { path: path.to_path_buf(), source }),
    }
}

fn hash_table(hasher: &mut Sha256, table: &TableSpec, bytes: &[u8]) {
    hasher.update(table.name.as_bytes());
    hasher.update(bytes);
}

/// Parse one CSV table after checking its header for the required columns.
pub fn parse_table<T: DeserializeOwned>(
    table: &TableSpec,
    bytes: &[u8],
) -> Result<Vec<T>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Csv { table: table.name, source })?
        .clone();
    if let Some(column) = table
        .columns
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(DatasetError::MissingColumn { table: table.name, column });
    }

    reader
        .deserialize()
        .map(|row| row.map_err(|source| DatasetError::Csv { table: table.name, source }))
        .collect()
}
