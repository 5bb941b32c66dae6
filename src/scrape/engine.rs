use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A search engine results page and the selector of its result links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    pub name: String,
    pub base_url: String,
    pub selector: String,
}

impl SearchEngine {
    pub fn new(name: &str, base_url: &str, selector: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            selector: selector.to_string(),
        }
    }

    /// Appends the query to `base_url`, words joined with `+`.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}",
            self.base_url,
            query.split_whitespace().collect::<Vec<_>>().join("+")
        )
    }

    pub fn parsed_selector(&self) -> Result<Selector> {
        Selector::parse(&self.selector)
            .map_err(|e| Error::Selector(format!("{} ({}): {e}", self.selector, self.name)))
    }
}

pub fn builtin_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine::new("Bing", "https://www.bing.com/search?q=", "li.b_algo h2 a"),
        SearchEngine::new(
            "Yahoo!",
            "https://search.yahoo.com/search?p=",
            "a.ac-algo.fz-l.ac-21th.lh-24",
        ),
        SearchEngine::new(
            "Ask",
            "https://www.ask.com/web?q=",
            "div.PartialSearchResults-item-title a",
        ),
        SearchEngine::new("DuckDuckGo", "https://duckduckgo.com/html/?q=", "a.result__a"),
    ]
}
