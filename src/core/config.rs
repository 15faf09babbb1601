use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::types::TraitName;

/// Relative worth of each page signal. `load_time` is negative, so slow
/// pages cost points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword_match: f64,
    pub link_count: f64,
    pub content_length: f64,
    pub https: f64,
    pub load_time: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_match: 1.0,
            link_count: 0.5,
            content_length: 0.01,
            https: 5.0,
            load_time: -0.1,
        }
    }
}

/// Which lowercase substrings feed which trait. Fixed for the run; the
/// default table is the stock character build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTable {
    by_trait: [Vec<String>; TraitName::COUNT],
}

impl KeywordTable {
    /// Build a table from (trait, keywords) pairs. Keywords are stored
    /// lowercase; empty keywords are discarded; traits not named stay empty.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TraitName, &'a [&'a str])>,
    {
        let mut by_trait: [Vec<String>; TraitName::COUNT] = Default::default();
        for (name, words) in entries {
            by_trait[name.index()].extend(
                words
                    .iter()
                    .filter(|w| !w.is_empty())
                    .map(|w| w.to_lowercase()),
            );
        }
        Self { by_trait }
    }

    pub fn keywords(&self, name: TraitName) -> &[String] {
        &self.by_trait[name.index()]
    }

    /// (trait, keyword) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitName, &str)> + '_ {
        TraitName::ALL.iter().flat_map(move |&name| {
            self.keywords(name).iter().map(move |kw| (name, kw.as_str()))
        })
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::from_entries([
            (
                TraitName::Strength,
                &["strong", "powerful", "muscle", "force", "might"][..],
            ),
            (
                TraitName::Intelligence,
                &["smart", "intelligent", "knowledge", "learn", "study"][..],
            ),
            (
                TraitName::Dexterity,
                &["agile", "quick", "nimble", "flexible", "swift"][..],
            ),
            (
                TraitName::Charisma,
                &["charming", "persuasive", "leadership", "confident", "attractive"][..],
            ),
            (
                TraitName::Wisdom,
                &["wise", "insightful", "experienced", "understanding", "perception"][..],
            ),
        ])
    }
}

/// Immutable knobs for one run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Hard cap on pages that count toward the run.
    pub max_pages: usize,
    /// Per-request deadline for every fetch.
    pub fetch_timeout: Duration,
    pub weights: ScoringWeights,
    pub keywords: KeywordTable,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: 20,
            fetch_timeout: Duration::from_secs(5),
            weights: ScoringWeights::default(),
            keywords: KeywordTable::default(),
        }
    }
}
