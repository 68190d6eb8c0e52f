// src/domain/pagination.rs
use crate::domain::errors::{DomainResult, ValidationError, ValidationRule};

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// A validated 1-based page window.
///
/// `page` is at least 1 and `per_page` lies in `1..=MAX_PER_PAGE`, so the
/// derived offset is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Oversized `per_page` values are clamped to [`MAX_PER_PAGE`]; zero or
    /// negative values are rejected.
    pub fn new(page: i64, per_page: i64) -> DomainResult<Self> {
        if page < 1 {
            return Err(ValidationError::new("page", ValidationRule::Positive).into());
        }
        let page = u32::try_from(page).map_err(|_| {
            ValidationError::new(
                "page",
                ValidationRule::OutOfRange {
                    min: 1,
                    max: i64::from(u32::MAX),
                },
            )
        })?;
        if per_page < 1 {
            return Err(ValidationError::new("per_page", ValidationRule::Positive).into());
        }
        let per_page = u32::try_from(per_page.min(i64::from(MAX_PER_PAGE))).unwrap_or(MAX_PER_PAGE);

        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}
