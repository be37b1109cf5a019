//! Unit tests for the `full_count` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same date → identical chain (and JSON); dates vary the chain |
//! | Structural | Nine entries; slot positions; connection present after slot 0 |
//! | Teammates | Every consecutive pair shares a (year, team) matching the shown connection |
//! | Difficulty | Threshold met when achievable (Mon/Fri); weekend uses the easy pool |
//! | Reports | "Active" career end; career stat totals on the card |
//! | End to end | 2024-01-01 with the four elite starters, regenerated for determinism |

use chrono::NaiveDate;

use crate::lineup_engine::{
    fixtures::{standard_league, FRANCHISES},
    generate_chain, AggregateIndex, ChainRequest, DailyChain, Position, StatLine, EASY_STARTERS,
    HARD_STARTERS, LINEUP_SIZE,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn index() -> AggregateIndex {
    AggregateIndex::build(&standard_league().build())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn chain_for(idx: &AggregateIndex, day: NaiveDate) -> DailyChain {
    generate_chain(idx, &ChainRequest::new(day)).unwrap()
}

/// Two full weeks starting on Monday 2024-01-01.
fn fortnight() -> impl Iterator<Item = NaiveDate> {
    (0..14).map(|d| date(2024, 1, 1) + chrono::Days::new(d))
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_date_produces_identical_chain() {
    let idx = index();
    for day in fortnight() {
        let a = chain_for(&idx, day);
        let b = chain_for(&idx, day);
        assert_eq!(a, b, "chain mismatch for {day}");
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap(), "JSON mismatch for {day}");
    }
}

#[test]
fn separately_built_indexes_agree() {
    // Hash-map iteration order differs between the two builds.
    let a = chain_for(&index(), date(2024, 5, 17));
    let b = chain_for(&index(), date(2024, 5, 17));
    assert_eq!(a, b);
}

#[test]
fn different_dates_vary_the_chain() {
    let idx = index();
    let chains: Vec<Vec<String>> = fortnight()
        .map(|day| {
            chain_for(&idx, day)
                .entries
                .iter()
                .map(|e| format!("{}@{:?}", e.player_id, e.connection))
                .collect()
        })
        .collect();
    let distinct: std::collections::HashSet<_> = chains.iter().collect();
    assert!(
        distinct.len() > 1,
        "fourteen days produced a single chain"
    );
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_chain_has_nine_entries_in_slot_order() {
    let idx = index();
    for day in fortnight() {
        let chain = chain_for(&idx, day);
        assert_eq!(chain.entries.len(), LINEUP_SIZE);
        for (i, entry) in chain.entries.iter().enumerate() {
            assert_eq!(entry.slot, i);
            assert_eq!(entry.position, Position::ALL[i]);
            assert_eq!(
                idx.primary_position(&entry.player_id),
                Some(Position::ALL[i]),
                "{} at slot {i} on {day} is not a {}",
                entry.player_id,
                Position::ALL[i]
            );
            assert_eq!(entry.difficulty, chain.difficulty);
        }
    }
}

#[test]
fn only_the_first_entry_lacks_a_connection() {
    let idx = index();
    for day in fortnight() {
        let chain = chain_for(&idx, day);
        assert!(chain.entries[0].connection.is_none());
        assert!(chain.entries[1..].iter().all(|e| e.connection.is_some()));
    }
}

// ── teammates ─────────────────────────────────────────────────────────────────

#[test]
fn consecutive_entries_are_teammates_through_the_shown_season() {
    let idx = index();
    for day in fortnight() {
        let chain = chain_for(&idx, day);
        for pair in chain.entries.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let link = next.connection.as_ref().unwrap();
            let shared = idx.teammates().shared_seasons(&prev.player_id, &next.player_id);
            assert!(
                shared.iter().any(|(year, team_id)| {
                    *year == link.year && idx.current_team_name(team_id) == Some(link.team.as_str())
                }),
                "{} and {} did not share {link} on {day}",
                prev.player_id,
                next.player_id
            );
        }
    }
}

#[test]
fn connections_use_the_current_franchise_name() {
    let idx = index();
    let current_names: Vec<&str> = FRANCHISES.iter().map(|(_, _, now)| *now).collect();
    for day in fortnight() {
        for entry in &chain_for(&idx, day).entries[1..] {
            let team = &entry.connection.as_ref().unwrap().team;
            assert!(current_names.contains(&team.as_str()), "unexpected team name {team}");
        }
    }
}

// ── difficulty ────────────────────────────────────────────────────────────────

#[test]
fn monday_meets_threshold_wherever_achievable() {
    let idx = index();
    for starter in HARD_STARTERS {
        let req = ChainRequest::new(date(2024, 1, 1)).with_starters([starter]);
        let chain = generate_chain(&idx, &req).unwrap();
        assert_eq!(chain.difficulty.threshold, 5);
        for entry in &chain.entries[1..] {
            if entry.relaxed {
                // Only Houston lacks an all-star at a position.
                assert_eq!(starter, "kershcl01");
                assert_eq!(entry.position, Position::Shortstop);
                assert!(entry.all_star_count < 5);
            } else {
                assert!(entry.all_star_count >= 5, "{} below threshold", entry.player_id);
            }
        }
    }
}

#[test]
fn friday_threshold_admits_every_all_star() {
    let idx = index();
    let chain = chain_for(&idx, date(2024, 1, 5));
    assert_eq!(chain.difficulty.threshold, 1);
    assert_eq!(chain.difficulty.label, "FRI: DEEP CUTS (1+ ASG)");
    for entry in &chain.entries[1..] {
        assert!(!entry.relaxed);
        assert!(entry.all_star_count >= 1);
    }
}

#[test]
fn weekend_starts_from_the_easy_pool() {
    let idx = index();
    for day in [date(2024, 1, 6), date(2024, 1, 7)] {
        let chain = chain_for(&idx, day);
        assert_eq!(chain.difficulty.threshold, 1);
        assert!(EASY_STARTERS.contains(&chain.entries[0].player_id.as_str()));
    }
}

// ── reports ───────────────────────────────────────────────────────────────────

#[test]
fn final_season_players_report_active() {
    let idx = index();
    let chain = chain_for(&idx, date(2024, 1, 2));
    for entry in &chain.entries {
        assert!(entry.report.starts_with("2015-Active  |  "), "{}", entry.report);
    }
}

#[test]
fn cards_show_career_totals() {
    let idx = index();
    let chain = chain_for(&idx, date(2024, 1, 1));
    assert_eq!(chain.entries[0].stats, StatLine::Pitcher { wins: 33, strikeouts: 420 });
    assert!(chain.entries[0].report.ends_with("Wins: 33  |  K: 420"));
    for entry in &chain.entries[1..] {
        if !entry.relaxed {
            assert_eq!(
                entry.stats,
                StatLine::Position { hits: 290, home_runs: 50, stolen_bases: 15 }
            );
        }
    }
}

// ── end to end ────────────────────────────────────────────────────────────────

#[test]
fn new_year_monday_starts_with_an_elite_pitcher() {
    let idx = index();
    let req = ChainRequest::new(date(2024, 1, 1)).with_starters(HARD_STARTERS);
    let first = generate_chain(&idx, &req).unwrap();
    assert_eq!(first.seed, 20_240_101);
    assert_eq!(first.difficulty.threshold, 5);
    assert!(HARD_STARTERS.contains(&first.entries[0].player_id.as_str()));

    let again = generate_chain(&idx, &req).unwrap();
    assert_eq!(first, again);
}
