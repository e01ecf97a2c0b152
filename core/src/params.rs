//! Optional per-request parameters.
//!
//! Every field is optional; unset (or empty) values are left off the wire
//! entirely rather than sent as empty query keys or headers.

/// Headers accepted by every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Sent as `avalara-version`.
    pub avalara_version: Option<String>,
    /// Sent as `X-Correlation-Id`.
    pub correlation_id: Option<String>,
}

/// OData paging and filtering for collection endpoints. Forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// `$filter`
    pub filter: Option<String>,
    /// `$top`
    pub top: Option<u32>,
    /// `$skip`
    pub skip: Option<u32>,
    /// `$orderBy`
    pub order_by: Option<String>,
    /// `count`
    pub count: Option<bool>,
    /// `countOnly`
    pub count_only: Option<bool>,
    pub request: RequestOptions,
}

impl ListOptions {
    /// A single page: `$top=top&$skip=skip`.
    pub fn page(top: u32, skip: u32) -> Self {
        Self {
            top: Some(top),
            skip: Some(skip),
            ..Self::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn with_count(mut self) -> Self {
        self.count = Some(true);
        self
    }
}

/// Options for single-resource reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// `If-None-Match`; a matching ETag makes the server answer 304.
    pub if_none_match: Option<String>,
    pub request: RequestOptions,
}

/// Options for PATCH, PUT and DELETE.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// `If-Match`; a stale ETag makes the server answer 412.
    pub if_match: Option<String>,
    pub request: RequestOptions,
}

impl WriteOptions {
    pub fn if_match(etag: impl Into<String>) -> Self {
        Self {
            if_match: Some(etag.into()),
            ..Self::default()
        }
    }
}
