//! Property-based tests using proptest
//!
//! These tests check query rendering, page aggregation, and the wire
//! decoding of list envelopes using randomized inputs.

use ecloud::connection::{ApiResponse, PaginationMeta};
use ecloud::resource::{fetch_all, Page};
use ecloud::{ApiRequestParameters, Filter, FilterOperator};
use proptest::prelude::*;
use reqwest::StatusCode;
use serde_json::json;

fn arb_operator() -> impl Strategy<Value = FilterOperator> {
    prop_oneof![
        Just(FilterOperator::Eq),
        Just(FilterOperator::Lk),
        Just(FilterOperator::Gt),
        Just(FilterOperator::Lt),
        Just(FilterOperator::In),
        Just(FilterOperator::Neq),
        Just(FilterOperator::Nin),
        Just(FilterOperator::Nlk),
    ]
}

/// Generate a filter on a snake_case property
fn arb_filter() -> impl Strategy<Value = Filter> {
    (
        "[a-z][a-z_]{0,20}",
        arb_operator(),
        prop::collection::vec("[a-zA-Z0-9*.-]{1,12}", 1..5),
    )
        .prop_map(|(property, operator, values)| Filter::new(&property, operator, values))
}

/// Generate a list of pages; every page holds distinct increasing ids
fn arb_pages() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(0usize..10, 1..8).prop_map(|sizes| {
        let mut next = 0u32;
        sizes
            .into_iter()
            .map(|size| {
                (0..size)
                    .map(|_| {
                        next += 1;
                        next
                    })
                    .collect()
            })
            .collect()
    })
}

proptest! {
    /// The page pair always comes first; per_page follows only when set
    #[test]
    fn query_starts_with_pagination(page in 0u32..10_000, per_page in 0u32..500) {
        let query = ApiRequestParameters::new()
            .with_pagination(page, per_page)
            .to_query();

        prop_assert_eq!(&query[0].0, "page");
        prop_assert_eq!(query[0].1.clone(), page.max(1).to_string());

        if per_page == 0 {
            prop_assert!(query.iter().all(|(k, _)| k != "per_page"));
        } else {
            prop_assert_eq!(query[1].clone(), ("per_page".to_string(), per_page.to_string()));
        }
    }

    /// Every filter renders as `property:operator=v1,v2`, in insertion order
    #[test]
    fn filters_render_in_order(filters in prop::collection::vec(arb_filter(), 0..6)) {
        let params = filters
            .iter()
            .cloned()
            .fold(ApiRequestParameters::new(), ApiRequestParameters::with_filter);
        let query = params.to_query();

        prop_assert_eq!(query.len(), 1 + filters.len());
        for (filter, (key, value)) in filters.iter().zip(query.iter().skip(1)) {
            let expected = format!("{}:{}", filter.property, filter.operator.as_str());
            prop_assert_eq!(key.clone(), expected);
            prop_assert_eq!(value.clone(), filter.values.join(","));
        }
    }

    /// Operator names parse regardless of case
    #[test]
    fn operator_parse_ignores_case(operator in arb_operator(), upper in any::<bool>()) {
        let name = if upper {
            operator.as_str().to_uppercase()
        } else {
            operator.as_str().to_string()
        };
        prop_assert_eq!(name.parse::<FilterOperator>().unwrap(), operator);
    }

    /// next_page only ever moves the page number
    #[test]
    fn next_page_keeps_everything_else(
        filter in arb_filter(),
        page in 1u32..1000,
        descending in any::<bool>(),
    ) {
        let params = ApiRequestParameters::new()
            .with_pagination(page, 25)
            .with_filter(filter)
            .with_sorting("name", descending);
        let next = params.next_page();

        prop_assert_eq!(next.page(), page + 1);
        prop_assert_eq!(next.per_page(), Some(25));
        prop_assert_eq!(next.filters(), params.filters());

        let next_query = next.to_query();
        let query = params.to_query();
        prop_assert_eq!(&next_query[1..], &query[1..]);
    }

    /// Aggregation concatenates pages in order and requests each page once
    #[test]
    fn fetch_all_concatenates_pages(pages in arb_pages()) {
        let total_pages = pages.len() as u32;
        let mut requested = Vec::new();

        let items = tokio_test::block_on(fetch_all(ApiRequestParameters::default(), |params| {
            requested.push(params.page());
            let items = pages[(params.page() - 1) as usize].clone();
            async move {
                Ok(Page::new(items, PaginationMeta { total_pages, ..PaginationMeta::default() }))
            }
        }))
        .unwrap();

        let expected: Vec<u32> = pages.iter().flatten().copied().collect();
        prop_assert_eq!(items, expected);
        prop_assert_eq!(requested, (1..=total_pages).collect::<Vec<_>>());
    }

    /// Envelopes decode whatever subset of pagination fields is present
    #[test]
    fn envelope_pagination_defaults(
        total_pages in proptest::option::of(0u32..100),
        current in proptest::option::of(1u32..100),
    ) {
        let mut pagination = serde_json::Map::new();
        if let Some(total_pages) = total_pages {
            pagination.insert("total_pages".to_string(), json!(total_pages));
        }
        if let Some(current) = current {
            pagination.insert("current_page".to_string(), json!(current));
        }
        let body = json!({"data": [], "meta": {"pagination": pagination}}).to_string();

        let envelope: ecloud::connection::Envelope<Vec<serde_json::Value>> =
            ApiResponse::new(StatusCode::OK, body).json().unwrap();

        prop_assert_eq!(envelope.meta.pagination.total_pages, total_pages.unwrap_or(0));
        prop_assert_eq!(envelope.meta.pagination.current_page, current.unwrap_or(0));
    }
}
