use std::collections::HashSet;

use scraper::{Html, Selector};

/// Collects the `href` of every element matching `selector`, in document order,
/// skipping repeats and stopping after `max_results` links.
pub fn extract_links(html: &str, selector: &Selector, max_results: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen: HashSet<&str> = HashSet::new();

    let links: Vec<String> = document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| seen.insert(*href))
        .take(max_results)
        .map(ToString::to_string)
        .collect();

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const BING_PAGE: &str = r#"
        <html><body><ol id="b_results">
            <li class="b_algo"><h2><a href="https://www.rust-lang.org/">Rust</a></h2></li>
            <li class="b_ad"><h2><a href="https://ads.example.com/">Ad</a></h2></li>
            <li class="b_algo"><h2><a href="https://doc.rust-lang.org/book/">Book</a></h2></li>
            <li class="b_algo"><h2><a href="https://www.rust-lang.org/">Rust again</a></h2></li>
            <li class="b_algo"><h2><a>No link</a></h2></li>
            <li class="b_algo"><h2><a href="https://crates.io/">crates.io</a></h2></li>
        </ol></body></html>
    "#;

    fn bing_selector() -> Selector {
        Selector::parse("li.b_algo h2 a").unwrap()
    }

    #[test]
    fn extracts_unique_links_in_order() {
        assert_eq!(
            extract_links(BING_PAGE, &bing_selector(), 10),
            vec![
                "https://www.rust-lang.org/",
                "https://doc.rust-lang.org/book/",
                "https://crates.io/",
            ]
        );
    }

    #[test]
    fn stops_at_max_results() {
        assert_eq!(
            extract_links(BING_PAGE, &bing_selector(), 2),
            vec!["https://www.rust-lang.org/", "https://doc.rust-lang.org/book/"]
        );
    }

    #[test]
    fn no_matches() {
        let selector = Selector::parse("a.result__a").unwrap();
        assert!(extract_links(BING_PAGE, &selector, 10).is_empty());
    }
}
