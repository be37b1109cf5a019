//! Per-player aggregates derived once from a loaded [`Dataset`].
//!
//! | Lookup              | Source table  | Rule |
//! |---------------------|---------------|------|
//! | all-star count      | AllstarFull   | rows per player, missing = 0 |
//! | current team name   | Teams         | name on the latest year row per team id |
//! | last season         | Appearances   | max year per player; the table max marks "Active" |
//! | primary position    | Appearances   | position with the most career games |
//! | name <-> id         | People        | `first + " " + last`, later rows win |
//! | stat line           | Batting / Pitching | career sums, zero when the table is absent |
//!
//! Every lookup is read-only after [`AggregateIndex::build`].

use std::collections::{BTreeSet, HashMap};

use tracing::info;

use crate::lineup_engine::{
    dataset::{Dataset, PersonRow},
    models::{Position, StatLine, LINEUP_SIZE},
    teammates::TeammateIndex,
};

#[derive(Debug, Clone, Default)]
pub struct AggregateIndex {
    version: String,
    people: HashMap<String, PersonRow>,
    all_star_counts: HashMap<String, u32>,
    current_team_names: HashMap<String, String>,
    last_seasons: HashMap<String, u16>,
    max_year: Option<u16>,
    primary_positions: HashMap<String, Position>,
    name_to_id: HashMap<String, String>,
    id_to_name: HashMap<String, String>,
    stat_lines: HashMap<String, StatLine>,
    teammates: TeammateIndex,
}

impl AggregateIndex {
    pub fn build(data: &Dataset) -> Self {
        let mut all_star_counts: HashMap<String, u32> = HashMap::new();
        for row in &data.allstars {
            *all_star_counts.entry(row.player_id.clone()).or_insert(0) += 1;
        }

        let current_team_names = current_team_names(data);

        let mut last_seasons: HashMap<String, u16> = HashMap::new();
        let mut games: HashMap<&str, [u32; LINEUP_SIZE]> = HashMap::new();
        for row in &data.appearances {
            let last = last_seasons.entry(row.player_id.clone()).or_insert(row.year);
            *last = (*last).max(row.year);
            let totals = games.entry(row.player_id.as_str()).or_insert([0; LINEUP_SIZE]);
            for pos in Position::ALL {
                totals[pos.slot()] += row.games_at(pos);
            }
        }
        let max_year = data.appearances.iter().map(|row| row.year).max();

        let primary_positions: HashMap<String, Position> = games
            .into_iter()
            .filter_map(|(id, totals)| primary_position(&totals).map(|pos| (id.to_string(), pos)))
            .collect();

        let mut name_to_id = HashMap::new();
        let mut id_to_name = HashMap::new();
        let mut people = HashMap::new();
        for person in &data.people {
            let name = person.full_name();
            name_to_id.insert(name.clone(), person.player_id.clone());
            id_to_name.insert(person.player_id.clone(), name);
            people.insert(person.player_id.clone(), person.clone());
        }

        let pitching_totals = pitching_totals(data);
        let batting_totals = batting_totals(data);
        let stat_lines: HashMap<String, StatLine> = people
            .keys()
            .map(|id| {
                let line = if primary_positions.get(id) == Some(&Position::Pitcher) {
                    let (wins, strikeouts) = pitching_totals.get(id.as_str()).copied().unwrap_or_default();
                    StatLine::Pitcher { wins, strikeouts }
                } else {
                    let (hits, home_runs, stolen_bases) =
                        batting_totals.get(id.as_str()).copied().unwrap_or_default();
                    StatLine::Position { hits, home_runs, stolen_bases }
                };
                (id.clone(), line)
            })
            .collect();

        let teammates = TeammateIndex::build(&data.appearances);

        info!(
            players = people.len(),
            positioned = primary_positions.len(),
            all_stars = all_star_counts.len(),
            max_year = ?max_year,
            "aggregate index built"
        );

        Self {
            version: data.version.clone(),
            people,
            all_star_counts,
            current_team_names,
            last_seasons,
            max_year,
            primary_positions,
            name_to_id,
            id_to_name,
            stat_lines,
            teammates,
        }
    }

    /// Identifies the dataset this index was built from.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn person(&self, player_id: &str) -> Option<&PersonRow> {
        self.people.get(player_id)
    }

    pub fn all_star_count(&self, player_id: &str) -> u32 {
        self.all_star_counts.get(player_id).copied().unwrap_or(0)
    }

    pub fn current_team_name(&self, team_id: &str) -> Option<&str> {
        self.current_team_names.get(team_id).map(String::as_str)
    }

    pub fn last_season(&self, player_id: &str) -> Option<u16> {
        self.last_seasons.get(player_id).copied()
    }

    /// Latest season anywhere in the appearances table.
    pub fn max_year(&self) -> Option<u16> {
        self.max_year
    }

    /// A player is active when their last season is the dataset's latest one.
    pub fn is_active(&self, player_id: &str) -> bool {
        self.max_year.is_some() && self.last_season(player_id) == self.max_year
    }

    pub fn primary_position(&self, player_id: &str) -> Option<Position> {
        self.primary_positions.get(player_id).copied()
    }

    pub fn player_id_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }

    pub fn name_for_player_id(&self, player_id: &str) -> Option<&str> {
        self.id_to_name.get(player_id).map(String::as_str)
    }

    pub fn stat_line(&self, player_id: &str) -> Option<StatLine> {
        self.stat_lines.get(player_id).copied()
    }

    pub fn teammates(&self) -> &TeammateIndex {
        &self.teammates
    }

    /// Current display names of every team the player appeared for, sorted.
    pub fn career_teams(&self, player_id: &str) -> Vec<String> {
        self.teammates
            .seasons_of(player_id)
            .iter()
            .filter_map(|(_, team_id)| self.current_team_name(team_id))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every guessable full name, sorted.
    pub fn guess_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.name_to_id.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Position with the most games; ties go to the earlier slot. `None` when the
/// player never fielded.
fn primary_position(totals: &[u32; LINEUP_SIZE]) -> Option<Position> {
    let mut best: Option<(Position, u32)> = None;
    for pos in Position::ALL {
        let games = totals[pos.slot()];
        if games > best.map_or(0, |(_, g)| g) {
            best = Some((pos, games));
        }
    }
    best.map(|(pos, _)| pos)
}

fn current_team_names(data: &Dataset) -> HashMap<String, String> {
    let mut latest: HashMap<&str, (u16, &str)> = HashMap::new();
    for row in &data.teams {
        match latest.get(row.team_id.as_str()) {
            Some(&(year, _)) if year >= row.year => {}
            _ => {
                latest.insert(row.team_id.as_str(), (row.year, row.name.as_str()));
            }
        }
    }
    latest
        .into_iter()
        .map(|(id, (_, name))| (id.to_string(), name.to_string()))
        .collect()
}

fn pitching_totals(data: &Dataset) -> HashMap<&str, (u32, u32)> {
    let mut totals: HashMap<&str, (u32, u32)> = HashMap::new();
    for row in data.pitching.iter().flatten() {
        let t = totals.entry(row.player_id.as_str()).or_default();
        t.0 += row.wins.unwrap_or(0);
        t.1 += row.strikeouts.unwrap_or(0);
    }
    totals
}

fn batting_totals(data: &Dataset) -> HashMap<&str, (u32, u32, u32)> {
    let mut totals: HashMap<&str, (u32, u32, u32)> = HashMap::new();
    for row in data.batting.iter().flatten() {
        let t = totals.entry(row.player_id.as_str()).or_default();
        t.0 += row.hits.unwrap_or(0);
        t.1 += row.home_runs.unwrap_or(0);
        t.2 += row.stolen_bases.unwrap_or(0);
    }
    totals
}
