use std::{collections::HashSet, time::Duration};

use reqwest::blocking::Client;
use scraper::Selector;
use tracing::{debug, info, warn};

use super::{engine::SearchEngine, extract::extract_links};
use crate::{
    config::ScrapeConfig,
    error::Result,
    result_set::{Query, ResultSet, Url},
};

pub struct Scraper {
    client: Client,
    max_results: usize,
}

impl Scraper {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            max_results: config.max_results,
        })
    }

    pub fn scrape(&self, engine: &SearchEngine, query: &str) -> Result<Vec<Url>> {
        let selector = engine.parsed_selector()?;
        self.scrape_with(engine, &selector, query)
    }

    /// Scrapes every query with one engine.
    ///
    /// A query whose request fails is logged and left out of the result set, so a
    /// later comparison reports it as missing. Repeated queries are fetched once.
    pub fn scrape_queries(&self, engine: &SearchEngine, queries: &[Query]) -> Result<ResultSet> {
        let selector = engine.parsed_selector()?;

        Ok(collect_results(queries, |query| {
            info!("Scraping {} for query: {query}", engine.name);
            self.scrape_with(engine, &selector, query)
                .inspect_err(|e| warn!("Failed to scrape {} for query {query}: {e}", engine.name))
        }))
    }

    fn scrape_with(
        &self,
        engine: &SearchEngine,
        selector: &Selector,
        query: &str,
    ) -> Result<Vec<Url>> {
        let body = self
            .client
            .get(engine.search_url(query))
            .send()?
            .error_for_status()?
            .text()?;

        Ok(extract_links(&body, selector, self.max_results))
    }
}

fn collect_results<F>(queries: &[Query], mut fetch: F) -> ResultSet
where
    F: FnMut(&str) -> Result<Vec<Url>>,
{
    let mut results = ResultSet::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for query in queries {
        if !seen.insert(query.as_str()) {
            debug!("Skipping repeated query: {query}");
            continue;
        }

        if let Ok(urls) = fetch(query) {
            results.insert(query.clone(), urls);
        }
    }

    results
}
