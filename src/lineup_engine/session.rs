//! One player's run through a daily chain.
//!
//! Each chain entry is an inning. A correct guess scores a hit and moves on;
//! a wrong guess costs an out; revealing the answer costs an out and waits for
//! [`GameSession::advance`]. Three outs strike the rest of the lineup out.
//!
//! The session owns its copy of the chain; nothing here is shared with the
//! generator or the cache.

use serde::Serialize;

use crate::lineup_engine::{
    error::SessionError,
    models::{ChainEntry, DailyChain, LINEUP_SIZE},
};

pub const MAX_OUTS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotResult {
    Hit,
    Revealed,
    Struck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HintKind {
    Teams,
    Bio,
    Origin,
}

impl HintKind {
    fn flag(self) -> usize {
        match self {
            HintKind::Teams  => 0,
            HintKind::Bio    => 1,
            HintKind::Origin => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GuessOutcome {
    Correct,
    Incorrect { outs: u8 },
    /// Third out; carries the name that was missed.
    StruckOut { answer: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    chain: DailyChain,
    slot: usize,
    outs: u8,
    hints_used: u32,
    hints_shown: [bool; 3],
    results: Vec<SlotResult>,
    revealed: bool,
    over: bool,
}

impl GameSession {
    pub fn new(chain: DailyChain) -> Self {
        Self {
            chain,
            slot: 0,
            outs: 0,
            hints_used: 0,
            hints_shown: [false; 3],
            results: Vec::with_capacity(LINEUP_SIZE),
            revealed: false,
            over: false,
        }
    }

    pub fn chain(&self) -> &DailyChain {
        &self.chain
    }

    /// The entry in play, or `None` once the game is over.
    pub fn current(&self) -> Option<&ChainEntry> {
        if self.over {
            None
        } else {
            self.chain.entries.get(self.slot)
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn outs(&self) -> u8 {
        self.outs
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn results(&self) -> &[SlotResult] {
        &self.results
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn guess(&mut self, name: &str) -> Result<GuessOutcome, SessionError> {
        let answer = self.in_play()?.name.clone();
        if self.revealed {
            return Err(SessionError::AwaitingAdvance);
        }
        if name == answer {
            self.results.push(SlotResult::Hit);
            self.next_inning();
            return Ok(GuessOutcome::Correct);
        }
        self.outs += 1;
        if self.outs >= MAX_OUTS {
            self.strike_out();
            Ok(GuessOutcome::StruckOut { answer })
        } else {
            Ok(GuessOutcome::Incorrect { outs: self.outs })
        }
    }

    /// Show the answer for one out. Returns the revealed name.
    pub fn reveal(&mut self) -> Result<String, SessionError> {
        let answer = self.in_play()?.name.clone();
        if self.revealed {
            return Err(SessionError::AwaitingAdvance);
        }
        self.outs += 1;
        self.results.push(SlotResult::Revealed);
        self.revealed = true;
        if self.outs >= MAX_OUTS {
            self.strike_out();
        }
        Ok(answer)
    }

    /// Move past a revealed player.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.in_play()?;
        if !self.revealed {
            return Err(SessionError::NotRevealed);
        }
        self.revealed = false;
        self.next_inning();
        Ok(())
    }

    /// Hint text for the player in play. Each kind counts once per inning.
    pub fn hint(&mut self, kind: HintKind) -> Result<String, SessionError> {
        let entry = self.in_play()?;
        let text = match kind {
            HintKind::Teams  => entry.hints.teams.join(", "),
            HintKind::Bio    => entry.hints.bio.clone(),
            HintKind::Origin => entry.hints.origin.clone(),
        };
        if !self.hints_shown[kind.flag()] {
            self.hints_shown[kind.flag()] = true;
            self.hints_used += 1;
        }
        Ok(text)
    }

    fn in_play(&self) -> Result<&ChainEntry, SessionError> {
        self.current().ok_or(SessionError::GameOver)
    }

    fn next_inning(&mut self) {
        self.slot += 1;
        self.hints_shown = [false; 3];
        if self.slot >= self.chain.entries.len() {
            self.over = true;
        }
    }

    fn strike_out(&mut self) {
        self.results.resize(self.chain.entries.len(), SlotResult::Struck);
        self.revealed = false;
        self.over = true;
    }
}
