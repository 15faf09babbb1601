use std::fmt;

use serde::{Deserialize, Serialize};

/// The five attributes a crawl levels up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitName {
    Strength,
    Intelligence,
    Dexterity,
    Charisma,
    Wisdom,
}

impl TraitName {
    pub const COUNT: usize = 5;

    /// Every trait, in character-sheet order.
    pub const ALL: [TraitName; TraitName::COUNT] = [
        TraitName::Strength,
        TraitName::Intelligence,
        TraitName::Dexterity,
        TraitName::Charisma,
        TraitName::Wisdom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraitName::Strength => "Strength",
            TraitName::Intelligence => "Intelligence",
            TraitName::Dexterity => "Dexterity",
            TraitName::Charisma => "Charisma",
            TraitName::Wisdom => "Wisdom",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TraitName::Strength => 0,
            TraitName::Intelligence => 1,
            TraitName::Dexterity => 2,
            TraitName::Charisma => 3,
            TraitName::Wisdom => 4,
        }
    }
}

impl fmt::Display for TraitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-trait tally. All five traits are always present; the only mutators
/// add, so values never decrease over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSet {
    levels: [u32; TraitName::COUNT],
}

impl TraitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: TraitName) -> u32 {
        self.levels[name.index()]
    }

    pub fn raise(&mut self, name: TraitName, amount: u32) {
        self.levels[name.index()] += amount;
    }

    /// Add another tally into this one, trait by trait.
    pub fn absorb(&mut self, other: &TraitSet) {
        for name in TraitName::ALL {
            self.levels[name.index()] += other.levels[name.index()];
        }
    }

    /// (trait, level) pairs in character-sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitName, u32)> + '_ {
        TraitName::ALL.iter().map(move |&name| (name, self.get(name)))
    }
}

/// What the scorer saw in one page: the score delta plus the keyword hits
/// to fold into the character's traits.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAssessment {
    pub score: f64,
    pub keyword_hits: TraitSet,
}

/// Final state of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSummary {
    pub start_url: String,
    pub pages_crawled: usize,
    pub traits: TraitSet,
    pub total_score: f64,
    pub total_duration_ms: u64,
    pub finished_at: String,
}
