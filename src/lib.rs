pub mod core;
pub mod engine;
pub mod random;
pub mod report;
pub mod scoring;
pub mod scraping;

// --- Primary exports ---
pub use crate::core::config::{CrawlConfig, KeywordTable, ScoringWeights};
pub use crate::core::types::{CrawlSummary, PageAssessment, TraitName, TraitSet};
pub use crate::engine::CrawlEngine;

// --- Collaborator seams ---
pub use crate::random::{RandomSource, ThreadRandom};
pub use crate::report::{ConsoleReporter, Reporter};
pub use crate::scoring::ContentScorer;
pub use crate::scraping::extract;
pub use crate::scraping::fetcher::{FetchError, FetchedPage, Fetcher, HttpFetcher};
