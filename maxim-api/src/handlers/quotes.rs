//! Quote query handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use maxim_core::{Quote, QuoteResponse};

use crate::error::ApiResult;
use crate::state::AppState;

/// One random quote with the total count.
///
/// GET /
pub async fn random_quote(State(state): State<Arc<AppState>>) -> ApiResult<Json<QuoteResponse>> {
    let response = state.catalog.random()?;
    Ok(Json(response))
}

/// Every quote, in load order.
///
/// GET /quotes
pub async fn list_quotes(State(state): State<Arc<AppState>>) -> Json<Vec<Quote>> {
    Json(state.catalog.all().to_vec())
}

/// All quotes by one author (case-insensitive exact match).
///
/// GET /quotes/author/{author}
pub async fn quotes_by_author(
    State(state): State<Arc<AppState>>,
    Path(author): Path<String>,
) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.catalog.by_author(&author)?;
    Ok(Json(quotes))
}

/// Query parameters for keyword search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Keyword to match against message, author, and author profile.
    /// Required; an explicitly empty keyword matches every quote.
    pub keyword: String,
}

/// Keyword search across message, author, and author profile.
///
/// GET /quotes/search?keyword=
pub async fn search_quotes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.catalog.search(&params.keyword)?;
    Ok(Json(quotes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ApiError;
    use maxim_core::{Dataset, QuoteCatalog};

    fn state() -> Arc<AppState> {
        let catalog = QuoteCatalog::new(Dataset::load().unwrap());
        Arc::new(AppState::new(ApiConfig::default(), catalog))
    }

    #[tokio::test]
    async fn test_random_quote_reports_total() {
        let state = state();
        let total = state.catalog.len();
        let Json(response) = random_quote(State(state)).await.unwrap();
        assert_eq!(response.total_quotes, total);
    }

    #[tokio::test]
    async fn test_list_quotes_returns_full_dataset() {
        let state = state();
        let total = state.catalog.len();
        let Json(quotes) = list_quotes(State(state)).await;
        assert_eq!(quotes.len(), total);
    }

    #[tokio::test]
    async fn test_quotes_by_author_found() {
        let state = state();
        let Json(quotes) = quotes_by_author(State(state), Path("니체".to_string()))
            .await
            .unwrap();
        assert!(!quotes.is_empty());
        assert!(quotes.iter().all(|q| q.author == "니체"));
    }

    #[tokio::test]
    async fn test_quotes_by_author_unknown_is_404() {
        let state = state();
        let err = quotes_by_author(State(state), Path("없는사람".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "저자 '없는사람'의 명언을 찾을 수 없습니다");
    }

    #[tokio::test]
    async fn test_search_empty_keyword_returns_everything() {
        let state = state();
        let total = state.catalog.len();
        let params = SearchParams {
            keyword: String::new(),
        };
        let Json(quotes) = search_quotes(State(state), Query(params)).await.unwrap();
        assert_eq!(quotes.len(), total);
    }

    #[tokio::test]
    async fn test_search_miss_is_404() {
        let state = state();
        let params = SearchParams {
            keyword: "zzzzzz".to_string(),
        };
        let err = search_quotes(State(state), Query(params)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
