/*
[INPUT]:  Customer pages from the API, paging and selection keys
[OUTPUT]: List screen state, page requests, pagination window
[POS]:    Record list - paged browsing of customers
[UPDATE]: When list paging, sorting, or row content changes
*/

use customer_desk_adapter::{ApiError, Customer, CustomerPage, PageRequest};
use tracing::warn;

pub const DEFAULT_PAGE_SIZE: u32 = 30;
pub const MAX_PAGE_BUTTONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Loaded(CustomerPage),
    /// `retryable` is false when repeating the same request cannot help.
    Failed { message: String, retryable: bool },
}

/// One slot of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(u32),
    Ellipsis,
}

/// Pages to show around `current`: at most five numbered pages, plus the first
/// and last page with ellipses when the window does not reach them.
/// Empty when there is at most one page.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let last = total_pages - 1;
    let current = current.min(last);
    let mut start = current.saturating_sub(MAX_PAGE_BUTTONS / 2);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(last);
    if end - start + 1 < MAX_PAGE_BUTTONS {
        start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS);
    }

    let mut items = Vec::new();
    if start > 0 {
        items.push(PageItem::Page(0));
        if start > 1 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < last {
        if end + 1 < last {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(last));
    }
    items
}

#[derive(Debug)]
pub struct CustomerList {
    page: u32,
    size: u32,
    status: ListStatus,
    selected: usize,
    in_flight: bool,
}

impl CustomerList {
    pub fn new(size: u32) -> Self {
        Self {
            page: 0,
            size: size.max(1),
            status: ListStatus::Loading,
            selected: 0,
            in_flight: false,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Request for the current page, or `None` while a load is already running.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.status = ListStatus::Loading;
        Some(PageRequest::new(self.page, self.size))
    }

    pub fn finish_load(&mut self, result: Result<CustomerPage, ApiError>) {
        self.in_flight = false;
        match result {
            Ok(page) => {
                self.page = page.number;
                self.selected = self.selected.min(page.content.len().saturating_sub(1));
                self.status = ListStatus::Loaded(page);
            }
            Err(err) => {
                warn!(page = self.page, error = %err, "customer list load failed");
                self.status = ListStatus::Failed {
                    message: "Failed to load customers".to_string(),
                    retryable: err.is_retryable(),
                };
            }
        }
    }

    pub fn rows(&self) -> &[Customer] {
        match &self.status {
            ListStatus::Loaded(page) => &page.content,
            _ => &[],
        }
    }

    pub fn total_pages(&self) -> u32 {
        match &self.status {
            ListStatus::Loaded(page) => page.total_pages,
            _ => 0,
        }
    }

    pub fn total_elements(&self) -> u64 {
        match &self.status {
            ListStatus::Loaded(page) => page.total_elements,
            _ => 0,
        }
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.page, self.total_pages())
    }

    /// Jump to `page`. Returns true when a reload is needed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let total = self.total_pages();
        if total == 0 || page >= total || page == self.page {
            return false;
        }
        self.page = page;
        self.selected = 0;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to(self.total_pages().saturating_sub(1))
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.rows().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as i64 + delta as i64).clamp(0, len as i64 - 1);
        self.selected = next as usize;
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.rows().get(self.selected)
    }
}

/// Name column: first name falls back to "Unknown".
pub fn row_name(customer: &Customer) -> String {
    let name = &customer.details.name;
    if !name.first_name.trim().is_empty() {
        return customer.display_name();
    }
    ["Unknown", name.last_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn row_country(customer: &Customer) -> &str {
    let country = customer.details.address.country.trim();
    if country.is_empty() { "N/A" } else { country }
}

#[cfg(test)]
mod tests {
    use customer_desk_adapter::{CustomerName, CustomerPayload};
    use rstest::rstest;

    use super::*;
    use PageItem::{Ellipsis, Page};

    fn customer(id: u64, first: &str, last: &str) -> Customer {
        Customer {
            id,
            details: CustomerPayload {
                name: CustomerName {
                    first_name: first.to_string(),
                    middle_name: String::new(),
                    last_name: last.to_string(),
                },
                ..CustomerPayload::default()
            },
        }
    }

    fn page(number: u32, total_pages: u32, rows: usize) -> CustomerPage {
        CustomerPage {
            content: (0..rows as u64).map(|i| customer(i + 1, "A", "B")).collect(),
            total_pages,
            total_elements: total_pages as u64 * 30,
            size: 30,
            number,
            first: number == 0,
            last: number + 1 >= total_pages,
            empty: rows == 0,
        }
    }

    #[rstest]
    #[case(0, 1, vec![])]
    #[case(0, 3, vec![Page(0), Page(1), Page(2)])]
    #[case(0, 10, vec![Page(0), Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)])]
    #[case(5, 10, vec![Page(0), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(9)])]
    #[case(9, 10, vec![Page(0), Ellipsis, Page(5), Page(6), Page(7), Page(8), Page(9)])]
    #[case(3, 6, vec![Page(0), Page(1), Page(2), Page(3), Page(4), Page(5)])]
    fn test_page_window(#[case] current: u32, #[case] total: u32, #[case] expected: Vec<PageItem>) {
        assert_eq!(page_window(current, total), expected);
    }

    #[test]
    fn test_load_is_guarded_while_in_flight() {
        let mut list = CustomerList::new(DEFAULT_PAGE_SIZE);
        let request = list.begin_load().unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 30);
        assert!(list.begin_load().is_none());

        list.finish_load(Ok(page(0, 3, 2)));
        assert!(!list.is_loading());
        assert_eq!(list.rows().len(), 2);
        assert_eq!(list.total_elements(), 90);
        assert!(list.begin_load().is_some());
    }

    #[test]
    fn test_failed_load_shows_error_and_allows_retry() {
        let mut list = CustomerList::new(DEFAULT_PAGE_SIZE);
        list.begin_load();
        list.finish_load(Err(ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }));
        assert!(matches!(
            list.status(),
            ListStatus::Failed {
                retryable: true,
                ..
            }
        ));
        assert!(list.rows().is_empty());
        assert!(list.begin_load().is_some());
    }

    #[test]
    fn test_rejected_request_is_not_retryable() {
        let mut list = CustomerList::new(DEFAULT_PAGE_SIZE);
        list.begin_load();
        list.finish_load(Err(ApiError::Status {
            status: 400,
            message: "bad page".to_string(),
        }));
        assert!(matches!(
            list.status(),
            ListStatus::Failed {
                retryable: false,
                ..
            }
        ));
    }

    #[test]
    fn test_paging_bounds() {
        let mut list = CustomerList::new(DEFAULT_PAGE_SIZE);
        list.begin_load();
        list.finish_load(Ok(page(0, 3, 30)));

        assert!(!list.previous_page());
        assert!(list.next_page());
        assert_eq!(list.page(), 1);
        assert!(list.last_page());
        assert_eq!(list.page(), 2);
        assert!(!list.next_page());
        assert!(!list.go_to(7));
        assert!(list.first_page());
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn test_selection_clamps_to_rows() {
        let mut list = CustomerList::new(DEFAULT_PAGE_SIZE);
        list.begin_load();
        list.finish_load(Ok(page(0, 1, 3)));
        list.move_selection(10);
        assert_eq!(list.selected(), 2);
        list.move_selection(-10);
        assert_eq!(list.selected(), 0);
        assert_eq!(list.selected_customer().map(|c| c.id), Some(1));
    }

    #[test]
    fn test_row_fallbacks() {
        let blank = customer(4, " ", "Doe");
        assert_eq!(row_name(&blank), "Unknown Doe");
        assert_eq!(row_country(&blank), "N/A");
        assert_eq!(row_name(&customer(5, "Ann", "")), "Ann");
    }
}
