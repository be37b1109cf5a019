//! Card text for a chain entry: the stat report and the three hints.
//!
//! Kept separate from the walk so the generator only decides *who* fills a
//! slot; everything shown to the player is assembled here.

use crate::lineup_engine::{
    dataset::PersonRow,
    index::AggregateIndex,
    models::{ChainEntry, Connection, DifficultySetting, Hints, Position, StatLine},
};

/// One resolved pick of the walk, before any text is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub player_id: String,
    /// `(year, team_id)` shared with the previous pick.
    pub link: Option<(u16, String)>,
    pub relaxed: bool,
}

/// The first four characters of the debut date (`"1986"`), or `"?"` when it
/// is blank. Shorter values are shown as they are.
pub fn debut_year(person: &PersonRow) -> &str {
    let debut = person.debut.as_str();
    let end = debut.char_indices().nth(4).map_or(debut.len(), |(i, _)| i);
    match &debut[..end] {
        "" => "?",
        year => year,
    }
}

/// `"Active"` for players in the dataset's final season, else the last year.
pub fn career_end(index: &AggregateIndex, player_id: &str) -> String {
    if index.is_active(player_id) {
        "Active".to_string()
    } else {
        index
            .last_season(player_id)
            .map_or_else(|| "?".to_string(), |year| year.to_string())
    }
}

/// Two-line stat card, e.g.
/// `"1986-2008  |  8x All-Star\nWins: 355  |  K: 3371"`.
pub fn stat_report(debut: &str, end: &str, all_stars: u32, stats: StatLine) -> String {
    let line = match stats {
        StatLine::Pitcher { wins, strikeouts } =>
            format!("Wins: {wins}  |  K: {strikeouts}"),
        StatLine::Position { hits, home_runs, stolen_bases } =>
            format!("Hits: {hits}  |  HR: {home_runs}  |  SB: {stolen_bases}"),
    };
    format!("{debut}-{end}  |  {all_stars}x All-Star\n{line}")
}

pub fn bio_hint(person: &PersonRow) -> String {
    format!("{}\" | {}/{}", person.height, person.bats, person.throws)
}

pub fn origin_hint(person: &PersonRow) -> String {
    format!("{}, {}", person.birth_city, person.birth_state)
}

/// Display name for the connecting team, falling back to the raw id.
pub fn connection(index: &AggregateIndex, year: u16, team_id: &str) -> Connection {
    Connection {
        year,
        team: index
            .current_team_name(team_id)
            .unwrap_or(team_id)
            .to_string(),
    }
}

/// Assemble the entry for `slot`.
///
/// The generator only picks players that have a People row, so a missing
/// row renders blank hints rather than failing.
pub fn entry(
    index: &AggregateIndex,
    slot: usize,
    pick: &Pick,
    difficulty: DifficultySetting,
) -> ChainEntry {
    let id = pick.player_id.as_str();
    let person = index.person(id).cloned().unwrap_or_default();
    let position = Position::ALL[slot];
    let all_star_count = index.all_star_count(id);
    let stats = index.stat_line(id).unwrap_or(match position {
        Position::Pitcher => StatLine::Pitcher { wins: 0, strikeouts: 0 },
        _ => StatLine::Position { hits: 0, home_runs: 0, stolen_bases: 0 },
    });

    ChainEntry {
        slot,
        position,
        player_id: id.to_string(),
        name: index.name_for_player_id(id).unwrap_or(id).to_string(),
        all_star_count,
        stats,
        report: stat_report(debut_year(&person), &career_end(index, id), all_star_count, stats),
        connection: pick
            .link
            .as_ref()
            .map(|(year, team_id)| connection(index, *year, team_id)),
        relaxed: pick.relaxed,
        difficulty,
        hints: Hints {
            bio: bio_hint(&person),
            origin: origin_hint(&person),
            teams: index.career_teams(id),
        },
    }
}
