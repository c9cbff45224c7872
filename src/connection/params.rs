//! Request parameters
//!
//! Pagination, filtering and sorting options shared by every list call,
//! rendered into the query string the API expects:
//!
//! - `page=2&per_page=50`
//! - `name:lk=*web*` / `status:in=running,stopped`
//! - `sort=name:desc`

use std::fmt;
use std::str::FromStr;

use crate::error::EcloudError;

/// Comparison applied by a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterOperator {
    #[default]
    Eq,
    Lk,
    Gt,
    Lt,
    In,
    Neq,
    Nin,
    Nlk,
}

impl FilterOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Lk => "lk",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::In => "in",
            Self::Neq => "neq",
            Self::Nin => "nin",
            Self::Nlk => "nlk",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = EcloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(Self::Eq),
            "lk" => Ok(Self::Lk),
            "gt" => Ok(Self::Gt),
            "lt" => Ok(Self::Lt),
            "in" => Ok(Self::In),
            "neq" => Ok(Self::Neq),
            "nin" => Ok(Self::Nin),
            "nlk" => Ok(Self::Nlk),
            _ => Err(EcloudError::Validation("unknown filter operator")),
        }
    }
}

/// Filter on a resource property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub property: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(property: &str, operator: FilterOperator, values: Vec<String>) -> Self {
        Self {
            property: property.to_string(),
            operator,
            values,
        }
    }

    /// Shorthand for a single-value `eq` filter
    pub fn eq(property: &str, value: &str) -> Self {
        Self::new(property, FilterOperator::Eq, vec![value.to_string()])
    }

    fn query_pair(&self) -> (String, String) {
        (
            format!("{}:{}", self.property, self.operator),
            self.values.join(","),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorting {
    pub property: String,
    pub descending: bool,
}

/// Parameters for a list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequestParameters {
    page: u32,
    per_page: Option<u32>,
    filters: Vec<Filter>,
    sorting: Option<Sorting>,
}

impl Default for ApiRequestParameters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: None,
            filters: Vec::new(),
            sorting: None,
        }
    }
}

impl ApiRequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number and page size. Page 0 is treated as page 1.
    pub fn with_pagination(mut self, page: u32, per_page: u32) -> Self {
        self.page = page.max(1);
        self.per_page = (per_page > 0).then_some(per_page);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sorting(mut self, property: &str, descending: bool) -> Self {
        self.sorting = Some(Sorting {
            property: property.to_string(),
            descending,
        });
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Same parameters, pointing at the following page
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.page = self.page.saturating_add(1);
        next
    }

    /// Render as query pairs, in a stable order
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![("page".to_string(), self.page.to_string())];

        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }

        query.extend(self.filters.iter().map(Filter::query_pair));

        if let Some(sorting) = &self.sorting {
            let direction = if sorting.descending { "desc" } else { "asc" };
            query.push((
                "sort".to_string(),
                format!("{}:{}", sorting.property, direction),
            ));
        }

        query
    }
}
