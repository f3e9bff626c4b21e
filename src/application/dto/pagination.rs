use crate::domain::pagination::{OffsetWindow, PageWindow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: u64,
    pub limit: u32,
    pub page: u32,
    pub total_pages: u64,
    pub offset: u64,
    pub has_more: bool,
}

impl From<PageWindow> for PaginationDto {
    fn from(window: PageWindow) -> Self {
        Self {
            total: window.total,
            limit: window.limit,
            page: window.page,
            total_pages: window.total_pages,
            offset: window.offset,
            has_more: window.has_more,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OffsetPaginationDto {
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub has_more: bool,
}

impl From<OffsetWindow> for OffsetPaginationDto {
    fn from(window: OffsetWindow) -> Self {
        Self {
            total: window.total,
            limit: window.limit,
            offset: window.offset,
            has_more: window.has_more,
        }
    }
}

/// Outcome of a listing query. A listing whose backing store failed is a
/// distinct variant so it can never be mistaken for an empty result.
#[derive(Debug, Clone)]
pub enum Listing<T, P> {
    Available { items: Vec<T>, pagination: P },
    SourceUnavailable { pagination: P },
}
