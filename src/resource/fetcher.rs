//! Resource Fetcher
//!
//! Page-at-a-time fetching and the aggregator that walks every page of a
//! list endpoint. Pages are requested strictly in order; page N+1 is only
//! requested once page N has been received.

use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::connection::{ApiRequestParameters, Connection, Envelope, PaginationMeta};
use crate::error::{EcloudError, Result};

/// One page of a list response
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PaginationMeta) -> Self {
        Self { items, meta }
    }
}

/// Where a list is fetched from. Sub-resource lists remember their parent so
/// a 404 maps to the parent's NotFound.
#[derive(Debug, Clone)]
pub struct PageScope {
    path: String,
    parent: Option<(&'static str, String)>,
}

impl PageScope {
    pub fn collection(path: String) -> Self {
        Self { path, parent: None }
    }

    pub fn nested(path: String, parent_key: &'static str, parent_id: String) -> Self {
        Self {
            path,
            parent: Some((parent_key, parent_id)),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Fetch one page of resources
pub async fn fetch_page<C, T>(
    connection: &C,
    scope: &PageScope,
    parameters: &ApiRequestParameters,
) -> Result<Page<T>>
where
    C: Connection,
    T: DeserializeOwned,
{
    let response = connection
        .get(&scope.path, parameters)
        .await?
        .handle(|status| match &scope.parent {
            Some((key, id)) if status == StatusCode::NOT_FOUND => {
                Some(EcloudError::not_found(*key, id))
            }
            _ => None,
        })?;

    let envelope: Envelope<Vec<T>> = response.json()?;
    Ok(Page::new(envelope.data, envelope.meta.pagination))
}

/// Fetch all pages (auto-paginate)
///
/// Calls `fetch` with `parameters`, then with each following page number
/// until the page reported as `total_pages` has been read. The first error
/// aborts the walk; items from earlier pages are dropped with it.
pub async fn fetch_all<T, F, Fut>(
    mut parameters: ApiRequestParameters,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(ApiRequestParameters) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut all_items = Vec::new();

    loop {
        let page = fetch(parameters.clone()).await?;
        let total_pages = page.meta.total_pages;
        all_items.extend(page.items);

        tracing::trace!("fetched page {}/{}", parameters.page(), total_pages);

        if parameters.page() >= total_pages {
            break;
        }
        parameters = parameters.next_page();
    }

    Ok(all_items)
}

/// A page of results that can fetch the page after it
pub struct Paginated<'c, C, T> {
    connection: &'c C,
    scope: PageScope,
    parameters: ApiRequestParameters,
    page: Page<T>,
}

impl<'c, C, T> std::fmt::Debug for Paginated<'c, C, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginated")
            .field("path", &self.scope.path)
            .field("parameters", &self.parameters)
            .field("page", &self.page)
            .finish()
    }
}

impl<'c, C, T> Paginated<'c, C, T>
where
    C: Connection,
    T: DeserializeOwned,
{
    /// Fetch the page described by `parameters`
    pub async fn fetch(
        connection: &'c C,
        scope: PageScope,
        parameters: ApiRequestParameters,
    ) -> Result<Self> {
        let page = fetch_page(connection, &scope, &parameters).await?;
        Ok(Self {
            connection,
            scope,
            parameters,
            page,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.page.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.page.items
    }

    pub fn pagination(&self) -> PaginationMeta {
        self.page.meta
    }

    /// Page number this page was requested with
    pub fn current_page(&self) -> u32 {
        self.parameters.page()
    }

    pub fn total_pages(&self) -> u32 {
        self.page.meta.total_pages
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page() >= self.total_pages()
    }

    /// Fetch the following page, or `None` if this is the last one
    pub async fn next_page(&self) -> Result<Option<Self>> {
        if self.is_last_page() {
            return Ok(None);
        }

        Self::fetch(self.connection, self.scope.clone(), self.parameters.next_page())
            .await
            .map(Some)
    }

    /// Fetch this page's successors and return every item, in page order
    pub async fn collect_all(self) -> Result<Vec<T>> {
        let connection = self.connection;
        let scope = &self.scope;
        let total_pages = self.total_pages();
        let mut all_items = self.page.items;

        if self.parameters.page() >= total_pages {
            return Ok(all_items);
        }

        let rest = fetch_all(self.parameters.next_page(), |params| async move {
            fetch_page::<C, T>(connection, scope, &params).await
        })
        .await?;

        all_items.extend(rest);
        Ok(all_items)
    }

    /// Stream every item from this page onwards. The next page is only
    /// requested once the current page's items have been consumed.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + 'c
    where
        C: 'c,
        T: 'c,
    {
        enum State<'c, C, T> {
            Ready(Paginated<'c, C, T>),
            Drained(Paginated<'c, C, T>),
        }

        async fn advance<'c, C, T>(
            state: State<'c, C, T>,
        ) -> Result<Option<(Vec<T>, State<'c, C, T>)>>
        where
            C: Connection,
            T: DeserializeOwned,
        {
            let mut page = match state {
                State::Ready(page) => page,
                State::Drained(page) => match page.next_page().await? {
                    Some(next) => next,
                    None => return Ok(None),
                },
            };

            let items = std::mem::take(&mut page.page.items);
            Ok(Some((items, State::Drained(page))))
        }

        stream::try_unfold(State::Ready(self), advance)
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, EcloudError>)))
            .try_flatten()
    }
}
