//! Resilient element location
//!
//! The target site's markup is not controlled by this crate and varies between
//! pages, so no single query is trusted. Every UI or data target carries an
//! ordered chain of [`Strategy`] values of decreasing specificity (semantic
//! attribute match, class-name heuristic, icon/structural match, visible text,
//! broad tag scan). The first strategy that yields a non-empty match set wins
//! and the rest are never evaluated. A strategy that errors counts as a miss,
//! so one broken query cannot take the whole chain down.

use crate::error::{Result, ScraperError};
use headless_chrome::{Element, Tab};
use std::time::{Duration, Instant};

/// A single element query against the live page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// CSS selector, evaluated with querySelectorAll semantics
    Css(&'static str),

    /// XPath expression
    XPath(&'static str),
}

/// One named rule in a fallback chain
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    /// Human-readable label, used only for logging
    pub description: &'static str,

    /// The query this strategy runs
    pub query: Query,
}

impl Strategy {
    /// A strategy backed by a CSS selector
    pub const fn css(description: &'static str, selector: &'static str) -> Self {
        Self { description, query: Query::Css(selector) }
    }

    /// A strategy backed by an XPath expression
    pub const fn xpath(description: &'static str, expression: &'static str) -> Self {
        Self { description, query: Query::XPath(expression) }
    }
}

/// Run `eval` over `strategies` in order and return the first non-empty match set
///
/// Returns empty when every strategy misses. An `Err` from a strategy is
/// logged and treated as a miss; the next strategy still runs. This function
/// never fails outward.
pub fn locate_with<T, F>(strategies: &[Strategy], mut eval: F) -> Vec<T>
where
    F: FnMut(&Strategy) -> Result<Vec<T>>,
{
    for strategy in strategies {
        match eval(strategy) {
            Ok(matches) if !matches.is_empty() => {
                log::debug!("Strategy '{}' matched {} element(s)", strategy.description, matches.len());
                return matches;
            }
            Ok(_) => log::debug!("Strategy '{}' matched nothing", strategy.description),
            Err(e) => log::debug!("Strategy '{}' failed: {}", strategy.description, e),
        }
    }

    Vec::new()
}

/// Evaluate a single query against a tab
pub fn run_query<'a>(tab: &'a Tab, query: &Query) -> Result<Vec<Element<'a>>> {
    match *query {
        Query::Css(selector) => tab
            .find_elements(selector)
            .map_err(|e| ScraperError::QueryFailed(format!("css '{}': {}", selector, e))),
        Query::XPath(expression) => tab
            .find_elements_by_xpath(expression)
            .map_err(|e| ScraperError::QueryFailed(format!("xpath '{}': {}", expression, e))),
    }
}

/// Locate elements on a live tab using a fallback chain
pub fn locate<'a>(tab: &'a Tab, strategies: &[Strategy]) -> Vec<Element<'a>> {
    locate_with(strategies, |strategy| run_query(tab, &strategy.query))
}

const POLL_PERIOD: Duration = Duration::from_millis(250);

/// Poll a fallback chain until it matches or `budget` expires
///
/// Returns whatever the final evaluation yielded, so a timeout comes back as
/// an empty match set rather than an error.
pub fn wait_for_match<'a>(tab: &'a Tab, strategies: &[Strategy], budget: Duration) -> Vec<Element<'a>> {
    let deadline = Instant::now() + budget;

    loop {
        let matches = locate(tab, strategies);
        if !matches.is_empty() || Instant::now() >= deadline {
            return matches;
        }
        std::thread::sleep(POLL_PERIOD);
    }
}

/// Read an attribute off an element
///
/// CDP reports attributes as a flat name/value list, unlike WebDriver's
/// per-attribute lookup.
pub fn attribute(element: &Element<'_>, name: &str) -> Result<Option<String>> {
    let attributes = element
        .get_attributes()
        .map_err(|e| ScraperError::QueryFailed(format!("attributes: {}", e)))?;

    Ok(attributes.and_then(|pairs| {
        pairs
            .chunks(2)
            .find(|pair| pair.len() == 2 && pair[0] == name)
            .map(|pair| pair[1].clone())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &[Strategy] = &[
        Strategy::css("first", "#a"),
        Strategy::css("second", "#b"),
        Strategy::css("third", "#c"),
    ];

    #[test]
    fn test_first_hit_short_circuits() {
        let mut evaluated = 0;
        let result = locate_with(CHAIN, |_| {
            evaluated += 1;
            Ok(vec!["hit"])
        });

        assert_eq!(result, vec!["hit"]);
        assert_eq!(evaluated, 1);
    }

    #[test]
    fn test_miss_falls_through_to_next_strategy() {
        let mut evaluated = 0;
        let result = locate_with(CHAIN, |strategy| {
            evaluated += 1;
            if strategy.description == "second" {
                Ok(vec![42])
            } else {
                Ok(vec![])
            }
        });

        assert_eq!(result, vec![42]);
        assert_eq!(evaluated, 2);
    }

    #[test]
    fn test_error_counts_as_miss() {
        let mut evaluated = 0;
        let result = locate_with(CHAIN, |strategy| {
            evaluated += 1;
            if strategy.description == "first" {
                Err(ScraperError::QueryFailed("boom".to_string()))
            } else {
                Ok(vec!["recovered"])
            }
        });

        assert_eq!(result, vec!["recovered"]);
        assert_eq!(evaluated, 2);
    }

    #[test]
    fn test_all_miss_yields_empty() {
        let mut evaluated = 0;
        let result: Vec<&str> = locate_with(CHAIN, |_| {
            evaluated += 1;
            Ok(vec![])
        });

        assert!(result.is_empty());
        assert_eq!(evaluated, CHAIN.len());
    }

    #[test]
    fn test_empty_chain_yields_empty() {
        let result: Vec<&str> = locate_with(&[], |_| Ok(vec!["never"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_strategy_constructors() {
        let css = Strategy::css("anchors", "a");
        let xpath = Strategy::xpath("headings", "//h1");

        assert_eq!(css.query, Query::Css("a"));
        assert_eq!(xpath.query, Query::XPath("//h1"));
    }
}
