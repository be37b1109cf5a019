//! In-memory leagues for tests.

use crate::lineup_engine::{
    dataset::{AllStarRow, AppearanceRow, BattingRow, Dataset, PersonRow, PitchingRow, TeamRow},
    models::Position,
};

#[derive(Debug, Clone)]
pub struct LeagueBuilder {
    data: Dataset,
}

impl LeagueBuilder {
    pub fn new() -> Self {
        Self {
            data: Dataset {
                batting: Some(Vec::new()),
                pitching: Some(Vec::new()),
                version: "fixture".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn version(&mut self, version: &str) -> &mut Self {
        self.data.version = version.to_string();
        self
    }

    pub fn team(&mut self, team_id: &str, year: u16, name: &str) -> &mut Self {
        self.data.teams.push(TeamRow {
            team_id: team_id.to_string(),
            year,
            name: name.to_string(),
        });
        self
    }

    pub fn player(&mut self, player_id: &str, first: &str, last: &str) -> &mut Self {
        self.data.people.push(PersonRow {
            player_id: player_id.to_string(),
            name_first: first.to_string(),
            name_last: last.to_string(),
            birth_city: "Springfield".to_string(),
            birth_state: "IL".to_string(),
            height: "74".to_string(),
            bats: "R".to_string(),
            throws: "R".to_string(),
            debut: "2015-04-06".to_string(),
        });
        self
    }

    /// One appearance row with games at a single position.
    pub fn season(
        &mut self,
        player_id: &str,
        year: u16,
        team_id: &str,
        position: Position,
        games: u32,
    ) -> &mut Self {
        let mut row = AppearanceRow {
            player_id: player_id.to_string(),
            year,
            team_id: team_id.to_string(),
            ..Default::default()
        };
        let slot = match position {
            Position::Pitcher     => &mut row.g_p,
            Position::Catcher     => &mut row.g_c,
            Position::FirstBase   => &mut row.g_1b,
            Position::SecondBase  => &mut row.g_2b,
            Position::ThirdBase   => &mut row.g_3b,
            Position::Shortstop   => &mut row.g_ss,
            Position::LeftField   => &mut row.g_lf,
            Position::CenterField => &mut row.g_cf,
            Position::RightField  => &mut row.g_rf,
        };
        *slot = Some(games);
        self.data.appearances.push(row);
        self
    }

    pub fn all_stars(&mut self, player_id: &str, selections: u32) -> &mut Self {
        for _ in 0..selections {
            self.data.allstars.push(AllStarRow { player_id: player_id.to_string() });
        }
        self
    }

    pub fn batting(&mut self, player_id: &str, hits: u32, home_runs: u32, stolen_bases: u32) -> &mut Self {
        self.data.batting.get_or_insert_with(Vec::new).push(BattingRow {
            player_id: player_id.to_string(),
            hits: Some(hits),
            home_runs: Some(home_runs),
            stolen_bases: Some(stolen_bases),
        });
        self
    }

    pub fn pitching(&mut self, player_id: &str, wins: u32, strikeouts: u32) -> &mut Self {
        self.data.pitching.get_or_insert_with(Vec::new).push(PitchingRow {
            player_id: player_id.to_string(),
            wins: Some(wins),
            strikeouts: Some(strikeouts),
        });
        self
    }

    pub fn build(&self) -> Dataset {
        self.data.clone()
    }
}

/// Franchises in the standard league: (id, name through 2022, name in 2023).
pub const FRANCHISES: [(&str, &str, &str); 4] = [
    ("ATL", "Boston Braves",      "Atlanta Braves"),
    ("NYA", "New York Highlanders", "New York Yankees"),
    ("LAN", "Brooklyn Dodgers",   "Los Angeles Dodgers"),
    ("HOU", "Houston Colt .45s",  "Houston Astros"),
];

pub const SEASONS: std::ops::RangeInclusive<u16> = 2020..=2023;

/// Opening pitchers, one franchise each (easy-pool arms share the first three).
pub const ACES: [(&str, &str, &str, &str); 7] = [
    ("maddugr01", "Greg",    "Maddux",   "ATL"),
    ("ryanno01",  "Nolan",   "Ryan",     "NYA"),
    ("johnsra01", "Randy",   "Johnson",  "LAN"),
    ("kershcl01", "Clayton", "Kershaw",  "HOU"),
    ("salech01",  "Chris",   "Sale",     "ATL"),
    ("degroja01", "Jacob",   "deGrom",   "NYA"),
    ("scherma01", "Max",     "Scherzer", "LAN"),
];

pub fn star_id(team: &str, position: Position) -> String {
    format!("star_{}_{}", team.to_lowercase(), position.column().to_lowercase())
}

pub fn role_id(team: &str, position: Position) -> String {
    format!("role_{}_{}", team.to_lowercase(), position.column().to_lowercase())
}

/// Four franchises over four seasons. Every franchise carries a six-time
/// all-star and a never-selected role player at each field position, except
/// Houston, which has no all-star shortstop. `retired01` caught for Atlanta
/// in 2020 only.
pub fn standard_league() -> LeagueBuilder {
    let mut b = LeagueBuilder::new();
    for (team, old_name, new_name) in FRANCHISES {
        for year in SEASONS {
            let name = if year == *SEASONS.end() { new_name } else { old_name };
            b.team(team, year, name);
        }
        for pos in &Position::ALL[1..] {
            let star = star_id(team, *pos);
            let role = role_id(team, *pos);
            if !(team == "HOU" && *pos == Position::Shortstop) {
                b.player(&star, "Star", &format!("{team} {pos}"))
                    .all_stars(&star, 6)
                    .batting(&star, 150, 30, 10)
                    .batting(&star, 140, 20, 5);
            }
            b.player(&role, "Role", &format!("{team} {pos}"))
                .batting(&role, 60, 2, 1);
            for year in SEASONS {
                if !(team == "HOU" && *pos == Position::Shortstop) {
                    b.season(&star, year, team, *pos, 140);
                }
                b.season(&role, year, team, *pos, 40);
            }
        }
    }
    for (id, first, last, team) in ACES {
        b.player(id, first, last)
            .all_stars(id, 8)
            .pitching(id, 15, 200)
            .pitching(id, 18, 220);
        for year in SEASONS {
            b.season(id, year, team, Position::Pitcher, 33);
        }
    }
    b.player("retired01", "Old", "Timer")
        .season("retired01", 2020, "ATL", Position::Catcher, 20);
    b
}

/// `ace01` pitched for EXP in 2020 alongside two catchers. Only `bridge01`
/// also played for GRD (2021), which has a full lineup; EXP has nobody else.
pub fn bridge_league(with_bridge: bool) -> LeagueBuilder {
    let mut b = LeagueBuilder::new();
    b.team("EXP", 2020, "Expos").team("GRD", 2021, "Guardians");
    b.player("ace01", "Ace", "Arm")
        .season("ace01", 2020, "EXP", Position::Pitcher, 30);
    b.player("dead01", "Dead", "End")
        .season("dead01", 2020, "EXP", Position::Catcher, 100);
    if with_bridge {
        b.player("bridge01", "Bridge", "Catcher")
            .season("bridge01", 2020, "EXP", Position::Catcher, 60)
            .season("bridge01", 2021, "GRD", Position::Catcher, 90);
    }
    for pos in &Position::ALL[2..] {
        let id = star_id("GRD", *pos);
        b.player(&id, "Guardian", pos.label())
            .season(&id, 2021, "GRD", *pos, 120);
    }
    b
}
