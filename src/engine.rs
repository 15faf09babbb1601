//! The crawl loop: a FIFO frontier, an exact-match visited set, a page
//! budget, and the character state the pages feed.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use url::Url;

use crate::core::config::CrawlConfig;
use crate::core::types::{CrawlSummary, TraitName, TraitSet};
use crate::random::RandomSource;
use crate::report::Reporter;
use crate::scoring::ContentScorer;
use crate::scraping::extract;
use crate::scraping::fetcher::Fetcher;

/// Chance that a successfully fetched page levels one trait.
const LEVEL_UP_CHANCE: f64 = 0.1;
/// Level-up boost bounds, inclusive.
const LEVEL_UP_MIN: u32 = 1;
const LEVEL_UP_MAX: u32 = 3;

pub struct CrawlEngine {
    config: CrawlConfig,
    scorer: ContentScorer,
    fetcher: Arc<dyn Fetcher>,
    random: Box<dyn RandomSource>,
    reporter: Arc<dyn Reporter>,
    start_url: String,
    frontier: VecDeque<String>,
    visited: HashSet<String>,
    traits: TraitSet,
    total_score: f64,
    pages_crawled: usize,
}

impl CrawlEngine {
    pub fn new(
        start_url: impl Into<String>,
        config: CrawlConfig,
        fetcher: Arc<dyn Fetcher>,
        random: Box<dyn RandomSource>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let start_url = start_url.into();
        let scorer = ContentScorer::new(config.weights, &config.keywords);
        Self {
            scorer,
            fetcher,
            random,
            reporter,
            frontier: VecDeque::from([start_url.clone()]),
            start_url,
            visited: HashSet::new(),
            traits: TraitSet::new(),
            total_score: 0.0,
            pages_crawled: 0,
            config,
        }
    }

    /// Drive the crawl until the frontier runs dry or the page budget is
    /// spent. Consumes the engine: a finished run is final.
    pub async fn run(mut self) -> CrawlSummary {
        let run_started = Instant::now();
        info!(
            "Starting crawl of {} (max_pages: {})",
            self.start_url, self.config.max_pages
        );

        while self.pages_crawled < self.config.max_pages {
            let Some(url) = self.frontier.pop_front() else {
                break;
            };
            if self.visited.contains(&url) {
                debug!("Skipping already-visited URL: {}", url);
                continue;
            }
            self.visit(url).await;
        }

        info!(
            "Crawl completed: {} pages crawled, total score {:.2}, {}ms total",
            self.pages_crawled,
            self.total_score,
            run_started.elapsed().as_millis()
        );
        self.reporter.crawl_complete(&self.traits, self.total_score);

        CrawlSummary {
            start_url: self.start_url,
            pages_crawled: self.pages_crawled,
            traits: self.traits,
            total_score: self.total_score,
            total_duration_ms: run_started.elapsed().as_millis() as u64,
            finished_at: Utc::now().to_rfc3339(),
        }
    }

    async fn visit(&mut self, url: String) {
        let started = Instant::now();
        let outcome = self.fetcher.fetch(&url, self.config.fetch_timeout).await;
        let load_time_secs = started.elapsed().as_secs_f64();

        // One attempt per URL, whatever the outcome.
        self.visited.insert(url.clone());

        let page = match outcome {
            Ok(page) => page,
            Err(error) => {
                warn!("Failed to crawl {}: {}", url, error);
                self.reporter.fetch_failed(&url, &error);
                return;
            }
        };

        let secure = is_secure(&url);
        let (assessment, links) = if page.status == 200 {
            let text = extract::page_text(&page.body).to_lowercase();
            let links = extract::page_links(&page.body, &url);
            let assessment = self.scorer.score(&text, links.len(), secure, load_time_secs);
            (assessment, links)
        } else {
            // Unreachable content earns only the transport terms; the body
            // is still good for more links.
            debug!("Non-success status {} for {}", page.status, url);
            let assessment = self.scorer.score("", 0, secure, load_time_secs);
            (assessment, extract::page_links(&page.body, &url))
        };

        self.traits.absorb(&assessment.keyword_hits);
        self.total_score += assessment.score;
        self.pages_crawled += 1;

        if page.status == 200 && self.random.chance(LEVEL_UP_CHANCE) {
            let name = TraitName::ALL[self.random.pick_index(TraitName::ALL.len())];
            let amount = self.random.amount_between(LEVEL_UP_MIN, LEVEL_UP_MAX);
            self.traits.raise(name, amount);
            debug!("Level up: {} +{}", name, amount);
            self.reporter.level_up(name, amount);
        }

        self.reporter.page_report(
            self.pages_crawled,
            &url,
            assessment.score,
            &self.traits,
            self.total_score,
        );

        let mut discovered = 0usize;
        for link in links {
            if has_scheme_and_host(&link) {
                self.frontier.push_back(link);
                discovered += 1;
            }
        }
        debug!("Queued {} links from {}", discovered, url);
    }
}

/// A frontier-worthy link has both a scheme and a host. A parsed `Url`
/// always carries a scheme, so only the host needs checking.
fn has_scheme_and_host(url: &str) -> bool {
    Url::parse(url)
        .map(|u| u.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

fn is_secure(url: &str) -> bool {
    Url::parse(url).map(|u| u.scheme() == "https").unwrap_or(false)
}
