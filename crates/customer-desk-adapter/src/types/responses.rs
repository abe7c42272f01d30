/*
[INPUT]:  Customer API schema definitions and serde requirements
[OUTPUT]: Paginated response envelope
[POS]:    Data layer - response wrappers for list endpoints
[UPDATE]: When the paging envelope changes
*/

use serde::{Deserialize, Serialize};

use super::models::Customer;

/// Spring-style page envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
    /// Zero-based page index.
    pub number: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

pub type CustomerPage = Page<Customer>;

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        !self.last && self.number + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        !self.first && self.number > 0
    }
}
