/*
[INPUT]:  Paging and sorting choices from callers
[OUTPUT]: Query parameter set for the list endpoint
[POS]:    Data layer - request parameter types
[UPDATE]: When list query parameters change
*/

use super::enums::SortDirection;

pub const DEFAULT_SORT_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// `field,direction` as the server expects it.
    pub fn to_param(&self) -> String {
        format!("{},{}", self.field, self.direction.as_str())
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::asc(DEFAULT_SORT_FIELD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based.
    pub page: u32,
    pub size: u32,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: vec![SortOrder::default()],
        }
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = vec![sort];
        self
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        pairs.extend(
            self.sort
                .iter()
                .map(|order| ("sort".to_string(), order.to_param())),
        );
        pairs
    }
}
