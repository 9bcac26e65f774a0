//! Query operations over the quote dataset.
//!
//! The catalog owns the immutable dataset and exposes the five read
//! operations of the service. Every query is a pure function of the
//! dataset, so a catalog can be shared freely across threads or tasks.

use rand::Rng;
use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::error::QuoteError;
use crate::quote::{Quote, QuoteResponse};

/// Read-only query service over an injected [`Dataset`].
#[derive(Debug, Clone)]
pub struct QuoteCatalog {
    dataset: Dataset,
}

impl QuoteCatalog {
    /// Creates a catalog over the given dataset.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Returns the number of quotes in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Returns true if the dataset has no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Selects one quote uniformly at random, paired with the total count.
    ///
    /// Selection is independent across calls. Fails with
    /// [`QuoteError::EmptyDataset`] if there is nothing to select from;
    /// startup validation normally rules that out.
    pub fn random(&self) -> Result<QuoteResponse, QuoteError> {
        let quotes = self.dataset.quotes();
        if quotes.is_empty() {
            return Err(QuoteError::EmptyDataset);
        }
        let mut rng = rand::rng();
        let index = rng.random_range(0..quotes.len());
        Ok(QuoteResponse {
            quote: quotes[index].clone(),
            total_quotes: quotes.len(),
        })
    }

    /// Returns every quote, in the loader's original order.
    #[must_use]
    pub fn all(&self) -> &[Quote] {
        self.dataset.quotes()
    }

    /// Returns all quotes whose author matches `author`, compared
    /// case-insensitively as exact equality (not substring).
    ///
    /// An empty result surfaces as [`QuoteError::AuthorNotFound`] carrying
    /// the requested author verbatim.
    pub fn by_author(&self, author: &str) -> Result<Vec<Quote>, QuoteError> {
        let needle = author.to_lowercase();
        let matches: Vec<Quote> = self
            .dataset
            .quotes()
            .iter()
            .filter(|q| q.author.to_lowercase() == needle)
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(QuoteError::AuthorNotFound(author.to_string()));
        }
        Ok(matches)
    }

    /// Returns all quotes containing `keyword` as a case-insensitive
    /// substring of the message, the author, or the author profile.
    ///
    /// An empty keyword is a substring of everything and returns the full
    /// dataset. An empty result surfaces as
    /// [`QuoteError::KeywordNotFound`] carrying the lowercased keyword,
    /// which is also the form used in the served message.
    pub fn search(&self, keyword: &str) -> Result<Vec<Quote>, QuoteError> {
        let needle = keyword.to_lowercase();
        let matches: Vec<Quote> = self
            .dataset
            .quotes()
            .iter()
            .filter(|q| {
                q.message.to_lowercase().contains(&needle)
                    || q.author.to_lowercase().contains(&needle)
                    || q.author_profile.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(QuoteError::KeywordNotFound(needle));
        }
        Ok(matches)
    }

    /// Returns the distinct author names, sorted ascending.
    ///
    /// Dedup is exact-case ("Plato" and "PLATO" stay distinct) even though
    /// `by_author` folds case; the asymmetry is part of the public
    /// contract and is kept deliberately.
    #[must_use]
    pub fn authors(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .dataset
            .quotes()
            .iter()
            .map(|q| q.author.as_str())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QuoteSeed;

    const SEEDS: &[QuoteSeed] = &[
        QuoteSeed {
            author: "Plato",
            author_profile: Some("Greek philosopher"),
            message: "The beginning is the most important part of the work.",
        },
        QuoteSeed {
            author: "PLATO",
            author_profile: Some("founder of the Academy"),
            message: "Courage is knowing what not to fear.",
        },
        QuoteSeed {
            author: "Seneca",
            author_profile: Some("Stoic philosopher"),
            message: "Luck is what happens when preparation meets opportunity.",
        },
    ];

    fn catalog() -> QuoteCatalog {
        QuoteCatalog::new(Dataset::from_seeds(SEEDS).unwrap())
    }

    #[test]
    fn test_all_preserves_order_and_length() {
        let catalog = catalog();
        let all = catalog.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].author, "Plato");
        assert_eq!(all[1].author, "PLATO");
        assert_eq!(all[2].author, "Seneca");
    }

    #[test]
    fn test_random_reports_total_count() {
        let catalog = catalog();
        let response = catalog.random().unwrap();
        assert_eq!(response.total_quotes, catalog.len());
        assert!(catalog.all().contains(&response.quote));
    }

    #[test]
    fn test_random_covers_every_quote() {
        // Statistical uniformity check: over many draws on a 3-element
        // dataset, every element shows up.
        let catalog = catalog();
        let mut seen = [false; 3];
        for _ in 0..500 {
            let response = catalog.random().unwrap();
            let index = catalog
                .all()
                .iter()
                .position(|q| *q == response.quote)
                .unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_random_on_empty_dataset_fails() {
        let catalog = QuoteCatalog::new(Dataset::from_seeds(&[]).unwrap());
        assert_eq!(catalog.random().unwrap_err(), QuoteError::EmptyDataset);
    }

    #[test]
    fn test_by_author_is_case_insensitive() {
        let catalog = catalog();
        let lower = catalog.by_author("plato").unwrap();
        let upper = catalog.by_author("PLATO").unwrap();
        assert_eq!(lower, upper);
        // Exact equality folds case, so both spellings in the dataset match.
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn test_by_author_is_exact_match_not_substring() {
        let catalog = catalog();
        let err = catalog.by_author("Plat").unwrap_err();
        assert_eq!(err, QuoteError::AuthorNotFound("Plat".to_string()));
    }

    #[test]
    fn test_by_author_unknown_carries_requested_name() {
        let catalog = catalog();
        let err = catalog.by_author("Kant").unwrap_err();
        assert_eq!(err, QuoteError::AuthorNotFound("Kant".to_string()));
    }

    #[test]
    fn test_search_matches_any_of_three_fields() {
        let catalog = catalog();

        // message field
        let by_message = catalog.search("courage").unwrap();
        assert_eq!(by_message.len(), 1);
        assert_eq!(by_message[0].author, "PLATO");

        // author field
        let by_author = catalog.search("seneca").unwrap();
        assert_eq!(by_author.len(), 1);

        // author profile field
        let by_profile = catalog.search("academy").unwrap();
        assert_eq!(by_profile.len(), 1);
        assert_eq!(by_profile[0].author, "PLATO");
    }

    #[test]
    fn test_search_excludes_non_matching_quotes() {
        let catalog = catalog();
        let needle = "stoic";
        let matches = catalog.search(needle).unwrap();
        for quote in catalog.all() {
            let hit = quote.message.to_lowercase().contains(needle)
                || quote.author.to_lowercase().contains(needle)
                || quote.author_profile.to_lowercase().contains(needle);
            assert_eq!(hit, matches.contains(quote));
        }
    }

    #[test]
    fn test_search_empty_keyword_returns_full_dataset() {
        let catalog = catalog();
        let matches = catalog.search("").unwrap();
        assert_eq!(matches.len(), catalog.all().len());
        assert_eq!(matches, catalog.all().to_vec());
    }

    #[test]
    fn test_search_miss_carries_lowercased_keyword() {
        let catalog = catalog();
        let err = catalog.search("Nonexistent").unwrap_err();
        assert_eq!(err, QuoteError::KeywordNotFound("nonexistent".to_string()));
    }

    #[test]
    fn test_authors_sorted_and_exact_case_deduped() {
        let catalog = catalog();
        let authors = catalog.authors();
        // Case-differing spellings stay distinct; sorted ascending.
        assert_eq!(authors, vec!["PLATO", "Plato", "Seneca"]);
        for pair in authors.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_authors_on_builtin_dataset_dedups_repeats() {
        let catalog = QuoteCatalog::new(Dataset::load().unwrap());
        let authors = catalog.authors();
        assert!(authors.len() < catalog.len());
        assert!(authors.contains(&"소크라테스".to_string()));
        for pair in authors.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
