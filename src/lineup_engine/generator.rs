use chrono::{Datelike, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::lineup_engine::{
    error::ChainError,
    index::AggregateIndex,
    models::{ChainRequest, DailyChain, DifficultySetting, FallbackPolicy, Position, LINEUP_SIZE},
    report::{self, Pick},
    teammates::TeammateLink,
};

/// Opening pitchers on hard days (threshold 4 and up).
pub const HARD_STARTERS: [&str; 4] = ["maddugr01", "ryanno01", "johnsra01", "kershcl01"];

/// Opening pitchers on every other day.
pub const EASY_STARTERS: [&str; 3] = ["salech01", "degroja01", "scherma01"];

/// The date as a `YYYYMMDD` integer.
///
/// Years 1000 through 9999 give eight digits. Earlier years give fewer and
/// stay distinct. Years outside 0..=9999 are clamped into that range.
pub fn daily_seed(date: NaiveDate) -> u64 {
    let year = date.year().clamp(0, 9999) as u64;
    year * 10_000 + date.month() as u64 * 100 + date.day() as u64
}

/// Build the day's nine-player chain.
///
/// Every random draw comes from one generator seeded with [`daily_seed`], so
/// the same date and dataset always give the same chain.
pub fn generate_chain(index: &AggregateIndex, request: &ChainRequest) -> Result<DailyChain, ChainError> {
    let difficulty = DifficultySetting::for_date(request.date);
    let seed = daily_seed(request.date);

    let pool = starter_pool(index, request, &difficulty);
    if pool.is_empty() {
        return Err(ChainError::NoStarter);
    }

    let mut walker = Walker {
        index,
        threshold: difficulty.threshold,
        fallback: request.fallback,
        rng: StdRng::seed_from_u64(seed),
        attempts: 0,
    };
    let picks = walker.run(pool)?;

    let entries = picks
        .iter()
        .enumerate()
        .map(|(slot, pick)| report::entry(index, slot, pick, difficulty))
        .collect();

    info!(
        date = %request.date,
        seed,
        threshold = difficulty.threshold,
        starter = %picks[0].player_id,
        attempts = walker.attempts,
        "daily chain generated"
    );

    Ok(DailyChain {
        date: request.date,
        seed,
        dataset_version: index.version().to_string(),
        difficulty,
        entries,
    })
}

/// Starter ids that resolve to known pitchers, in pool order.
fn starter_pool<'a>(
    index: &AggregateIndex,
    request: &'a ChainRequest,
    difficulty: &DifficultySetting,
) -> Vec<&'a str> {
    let pool: Vec<&'a str> = match &request.starters {
        Some(ids) => ids.iter().map(String::as_str).collect(),
        None if difficulty.is_hard() => HARD_STARTERS.to_vec(),
        None => EASY_STARTERS.to_vec(),
    };
    pool.into_iter()
        .filter(|id| {
            index.person(id).is_some() && index.primary_position(id) == Some(Position::Pitcher)
        })
        .collect()
}

struct Walker<'a> {
    index: &'a AggregateIndex,
    threshold: u32,
    fallback: FallbackPolicy,
    rng: StdRng,
    attempts: u32,
}

impl<'a> Walker<'a> {
    fn run(&mut self, mut pool: Vec<&str>) -> Result<Vec<Pick>, ChainError> {
        while !pool.is_empty() {
            self.spend()?;
            let starter = pool.remove(self.rng.gen_range(0..pool.len()));
            let mut path = vec![Pick {
                player_id: starter.to_string(),
                link: None,
                relaxed: false,
            }];
            if self.extend(&mut path)? {
                return Ok(path);
            }
            debug!(starter, "no complete chain from starter");
        }
        Err(ChainError::Exhausted { attempts: self.attempts })
    }

    /// Fill the slots after `path`. `Ok(false)` means every branch dead-ended
    /// and the caller should re-roll its own pick.
    fn extend(&mut self, path: &mut Vec<Pick>) -> Result<bool, ChainError> {
        let slot = path.len();
        if slot == LINEUP_SIZE {
            return Ok(true);
        }
        let position = Position::ALL[slot];
        let current = path[slot - 1].player_id.clone();
        let tiers = self.candidates(&current, position);

        if tiers.iter().all(|(links, _)| links.is_empty()) {
            debug!(slot, %position, player = %current, "no teammate at position");
            return match self.fallback {
                FallbackPolicy::Fail => Err(ChainError::DeadEnd {
                    slot,
                    position,
                    player_id: current,
                }),
                FallbackPolicy::Backtrack { .. } => Ok(false),
            };
        }

        for (mut links, relaxed) in tiers {
            if relaxed && !links.is_empty() {
                debug!(slot, %position, threshold = self.threshold, "threshold relaxed");
            }
            while !links.is_empty() {
                self.spend()?;
                let link = links.swap_remove(self.rng.gen_range(0..links.len()));
                path.push(Pick {
                    player_id: link.player_id.clone(),
                    link: Some((link.year, link.team_id.clone())),
                    relaxed,
                });
                if self.extend(path)? {
                    return Ok(true);
                }
                path.pop();
                debug!(slot, player = %link.player_id, "backtracking");
                links.retain(|l| l.player_id != link.player_id);
            }
        }
        Ok(false)
    }

    /// Teammate links at `position`, split into tiers tried in order: those
    /// meeting the day's all-star threshold, then (flagged relaxed) the rest.
    /// When nobody meets the threshold only the relaxed tier exists. A single
    /// pass never reaches the relaxed tier while the strict one is non-empty.
    fn candidates(&self, player_id: &str, position: Position) -> Vec<(Vec<TeammateLink>, bool)> {
        let (qualified, rest): (Vec<TeammateLink>, Vec<TeammateLink>) = self
            .index
            .teammates()
            .links(player_id)
            .into_iter()
            .filter(|l| {
                self.index.primary_position(&l.player_id) == Some(position)
                    && self.index.person(&l.player_id).is_some()
            })
            .partition(|l| self.index.all_star_count(&l.player_id) >= self.threshold);

        if qualified.is_empty() {
            return vec![(rest, true)];
        }
        match self.fallback {
            FallbackPolicy::Fail => vec![(qualified, false)],
            FallbackPolicy::Backtrack { .. } => vec![(qualified, false), (rest, true)],
        }
    }

    fn spend(&mut self) -> Result<(), ChainError> {
        self.attempts += 1;
        match self.fallback {
            FallbackPolicy::Backtrack { max_attempts } if self.attempts > max_attempts => {
                Err(ChainError::Exhausted { attempts: max_attempts })
            }
            _ => Ok(()),
        }
    }
}
