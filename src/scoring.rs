//! Page scoring: turns one page's observable signals into a score delta
//! plus per-trait keyword hits. Pure, with no I/O and no shared state.

use aho_corasick::AhoCorasick;

use crate::core::config::{KeywordTable, ScoringWeights};
use crate::core::types::{PageAssessment, TraitName, TraitSet};

pub struct ContentScorer {
    weights: ScoringWeights,
    matcher: AhoCorasick,
    /// Trait credited by each automaton pattern, index-aligned.
    pattern_traits: Vec<TraitName>,
}

impl ContentScorer {
    pub fn new(weights: ScoringWeights, keywords: &KeywordTable) -> Self {
        let mut patterns = Vec::new();
        let mut pattern_traits = Vec::new();
        for (name, keyword) in keywords.iter() {
            patterns.push(keyword.to_string());
            pattern_traits.push(name);
        }
        // Keywords are simple substrings; Aho-Corasick gives linear-time scan.
        let matcher = AhoCorasick::new(&patterns).expect("valid keyword patterns");
        Self {
            weights,
            matcher,
            pattern_traits,
        }
    }

    /// Score one page. `text` must already be lowercase; keywords are stored
    /// lowercase, so matching is effectively case-insensitive.
    ///
    /// A keyword counts once no matter how often it occurs in the text. A
    /// trait with several matching keywords is credited once per keyword.
    pub fn score(
        &self,
        text: &str,
        link_count: usize,
        is_secure: bool,
        load_time_secs: f64,
    ) -> PageAssessment {
        let mut matched = vec![false; self.pattern_traits.len()];
        // Overlapping scan, so a keyword nested inside another ("art" in
        // "smart") is still observed.
        for hit in self.matcher.find_overlapping_iter(text) {
            matched[hit.pattern().as_usize()] = true;
        }

        let mut score = 0.0;
        let mut keyword_hits = TraitSet::new();
        for (idx, hit) in matched.iter().enumerate() {
            if *hit {
                keyword_hits.raise(self.pattern_traits[idx], 1);
                score += self.weights.keyword_match;
            }
        }

        score += link_count as f64 * self.weights.link_count;
        score += text.chars().count() as f64 * self.weights.content_length;
        if is_secure {
            score += self.weights.https;
        }
        score += load_time_secs * self.weights.load_time;

        PageAssessment {
            score,
            keyword_hits,
        }
    }
}
