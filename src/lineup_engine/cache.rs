use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::lineup_engine::{
    error::ChainError,
    generator::generate_chain,
    index::AggregateIndex,
    models::{ChainRequest, DailyChain, FallbackPolicy},
};

/// Chains memoized per (calendar date, dataset version).
///
/// Generation settings are fixed when the cache is created so that a key
/// always maps to exactly one chain.
#[derive(Debug, Clone, Default)]
pub struct DailyChainCache {
    starters: Option<Vec<String>>,
    fallback: FallbackPolicy,
    chains: HashMap<(NaiveDate, String), DailyChain>,
}

impl DailyChainCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_starters<I, S>(mut self, starters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starters = Some(starters.into_iter().map(Into::into).collect());
        self.chains.clear();
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self.chains.clear();
        self
    }

    pub fn get(&self, date: NaiveDate, dataset_version: &str) -> Option<&DailyChain> {
        self.chains.get(&(date, dataset_version.to_string()))
    }

    /// The chain for `date`, generating it on first request. Generating a
    /// chain evicts every chain for an earlier date.
    pub fn get_or_generate(
        &mut self,
        index: &AggregateIndex,
        date: NaiveDate,
    ) -> Result<&DailyChain, ChainError> {
        let key = (date, index.version().to_string());
        let chain = match self.chains.remove(&key) {
            Some(chain) => {
                debug!(%date, "daily chain served from cache");
                chain
            }
            None => {
                let request = ChainRequest {
                    date,
                    starters: self.starters.clone(),
                    fallback: self.fallback,
                };
                let chain = generate_chain(index, &request)?;
                let before = self.chains.len();
                self.chains.retain(|(d, _), _| *d >= date);
                if self.chains.len() < before {
                    debug!(%date, evicted = before - self.chains.len(), "stale chains evicted");
                }
                chain
            }
        };
        Ok(self.chains.entry(key).or_insert(chain))
    }

    /// The chain for the local calendar date.
    pub fn today(&mut self, index: &AggregateIndex) -> Result<&DailyChain, ChainError> {
        self.get_or_generate(index, Local::now().date_naive())
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
