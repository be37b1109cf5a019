use std::collections::{BTreeSet, HashMap};

use crate::lineup_engine::dataset::AppearanceRow;

/// One shared season between the queried player and a teammate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeammateLink {
    pub player_id: String,
    pub year: u16,
    pub team_id: String,
}

/// Season rosters built once from the appearances table.
///
/// Two players are teammates when they share a `(year, team)` pair. Rosters
/// and season lists are sorted and de-duplicated, so every query returns the
/// same order regardless of hash seeds.
#[derive(Debug, Clone, Default)]
pub struct TeammateIndex {
    rosters: HashMap<u16, HashMap<String, Vec<String>>>,
    seasons: HashMap<String, Vec<(u16, String)>>,
}

impl TeammateIndex {
    pub fn build(appearances: &[AppearanceRow]) -> Self {
        let mut rosters: HashMap<u16, HashMap<String, BTreeSet<String>>> = HashMap::new();
        let mut seasons: HashMap<String, BTreeSet<(u16, String)>> = HashMap::new();

        for row in appearances {
            rosters
                .entry(row.year)
                .or_default()
                .entry(row.team_id.clone())
                .or_default()
                .insert(row.player_id.clone());
            seasons
                .entry(row.player_id.clone())
                .or_default()
                .insert((row.year, row.team_id.clone()));
        }

        Self {
            rosters: rosters
                .into_iter()
                .map(|(year, teams)| {
                    let teams = teams
                        .into_iter()
                        .map(|(team, players)| (team, players.into_iter().collect()))
                        .collect();
                    (year, teams)
                })
                .collect(),
            seasons: seasons
                .into_iter()
                .map(|(player, s)| (player, s.into_iter().collect()))
                .collect(),
        }
    }

    /// Every `(year, team)` the player appeared for, ascending.
    pub fn seasons_of(&self, player_id: &str) -> &[(u16, String)] {
        self.seasons
            .get(player_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Players on `team_id` in `year`, ascending by id.
    pub fn roster(&self, year: u16, team_id: &str) -> &[String] {
        self.rosters
            .get(&year)
            .and_then(|teams| teams.get(team_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every shared season with every other player, ordered by
    /// (teammate, year, team).
    pub fn links(&self, player_id: &str) -> Vec<TeammateLink> {
        let mut links: Vec<TeammateLink> = self
            .seasons_of(player_id)
            .iter()
            .flat_map(move |(year, team_id)| {
                self.roster(*year, team_id)
                    .iter()
                    .filter(move |mate| mate.as_str() != player_id)
                    .map(move |mate| TeammateLink {
                        player_id: mate.clone(),
                        year: *year,
                        team_id: team_id.clone(),
                    })
            })
            .collect();
        links.sort();
        links
    }

    pub fn are_teammates(&self, a: &str, b: &str) -> bool {
        a != b
            && self
                .seasons_of(a)
                .iter()
                .any(|(year, team)| self.roster(*year, team).iter().any(|p| p == b))
    }

    /// Seasons both players spent on the same team, ascending.
    pub fn shared_seasons(&self, a: &str, b: &str) -> Vec<(u16, String)> {
        self.seasons_of(a)
            .iter()
            .filter(|(year, team)| self.roster(*year, team).iter().any(|p| p == b))
            .cloned()
            .collect()
    }
}
