use crate::application::dto::Paginated;
use crate::domain::pagination::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    i64::from(DEFAULT_PER_PAGE)
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Items per page, capped at 100.
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

/// List response body: `{data, pagination}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> From<Paginated<T>> for PaginatedResponse<T> {
    fn from(page: Paginated<T>) -> Self {
        let pagination = PaginationMeta {
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_count,
            total_pages: page.total_pages(),
        };
        Self {
            data: page.items,
            pagination,
        }
    }
}
