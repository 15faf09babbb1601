//! Crawl progress notifications. The engine calls these in event order
//! from its single control path.

use crate::core::types::{TraitName, TraitSet};
use crate::scraping::fetcher::FetchError;

pub trait Reporter: Send + Sync {
    fn fetch_failed(&self, url: &str, error: &FetchError);
    fn level_up(&self, name: TraitName, amount: u32);
    fn page_report(
        &self,
        pages_crawled: usize,
        url: &str,
        page_score: f64,
        traits: &TraitSet,
        total_score: f64,
    );
    fn crawl_complete(&self, traits: &TraitSet, total_score: f64);
}

/// Prints the character sheet to stdout as the crawl advances.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn fetch_failed(&self, url: &str, error: &FetchError) {
        println!("Error crawling {url}: {error}");
    }

    fn level_up(&self, name: TraitName, _amount: u32) {
        println!("Level up! {name} increased!");
    }

    fn page_report(
        &self,
        pages_crawled: usize,
        url: &str,
        page_score: f64,
        traits: &TraitSet,
        total_score: f64,
    ) {
        println!("Crawled {pages_crawled} pages. Current URL: {url}");
        println!("Page score: {page_score:.2}");
        print_traits(traits);
        print_score(total_score);
    }

    fn crawl_complete(&self, traits: &TraitSet, total_score: f64) {
        println!("Crawling complete!");
        print_traits(traits);
        print_score(total_score);
    }
}

fn print_traits(traits: &TraitSet) {
    println!("\nCurrent Traits:");
    for (name, level) in traits.iter() {
        println!("{name}: {level}");
    }
    println!();
}

fn print_score(total_score: f64) {
    println!("Total Score: {total_score:.2}");
    println!();
}
