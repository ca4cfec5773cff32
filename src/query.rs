//! Query options shared by all `/query` endpoints.

use url::Url;

/// Filtering, sorting, nested-fetch, and pagination options for query
/// endpoints. Every field is independently optional; unset fields are
/// omitted from the request entirely, which is distinct from sending an
/// empty value.
#[derive(Clone, Debug, Default)]
pub struct QueryOptions {
    /// Filter expression in the server's query language.
    pub filter: Option<String>,
    /// Comma-separated nested collections to fetch (e.g. `Notes,Attachments`).
    pub include: Option<String>,
    /// Sort order expression.
    pub order: Option<String>,
    /// Results per page. The server applies its own default and maximum.
    pub page_size: Option<i32>,
    /// Page number (0-indexed).
    pub page_number: Option<i32>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter expression.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the nested collections to include.
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Sets the sort order expression.
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Sets the number of results per page.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the page number (0-indexed).
    pub fn with_page_number(mut self, page_number: i32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Appends the present parameters to the given URL, returning the
    /// modified URL. Parameters appear in declaration order; unset fields
    /// never appear, while empty strings and zero values do.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let mut pairs = url.query_pairs_mut();
        if let Some(filter) = &self.filter {
            pairs.append_pair("filter", filter);
        }
        if let Some(include) = &self.include {
            pairs.append_pair("include", include);
        }
        if let Some(order) = &self.order {
            pairs.append_pair("order", order);
        }
        if let Some(page_size) = self.page_size {
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        if let Some(page_number) = self.page_number {
            pairs.append_pair("pageNumber", &page_number.to_string());
        }
        drop(pairs);
        url
    }
}
