mod common;

use common::*;
use customer_desk::list::{CustomerList, ListStatus, PageItem, row_country, row_name};
use customer_desk::CustomerApi;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_paging_requests_follow_list_state() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("page", "0"))
        .and(query_param("size", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![customer_body(1, "Ada", "United Kingdom"), customer_body(2, "", "")],
            0,
            9,
            262,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![customer_body(31, "Grace", "United States")],
            1,
            9,
            262,
        )))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut list = CustomerList::new(30);
    let request = list.begin_load().expect("first load");
    assert!(list.begin_load().is_none());
    list.finish_load(client.list_customers(&request).await);

    assert_eq!(list.total_elements(), 262);
    assert_eq!(list.total_pages(), 9);
    assert_eq!(
        list.window(),
        vec![
            PageItem::Page(0),
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Page(4),
            PageItem::Ellipsis,
            PageItem::Page(8),
        ]
    );
    let rows = list.rows();
    assert_eq!(row_name(&rows[0]), "Ada Hopper");
    assert_eq!(row_country(&rows[1]), "N/A");

    assert!(list.next_page());
    let request = list.begin_load().expect("second load");
    assert_eq!(request.page, 1);
    list.finish_load(client.list_customers(&request).await);
    assert_eq!(list.page(), 1);
    assert_eq!(list.selected_customer().map(|customer| customer.id), Some(31));
}

#[tokio::test]
async fn test_server_error_marks_list_failed() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut list = CustomerList::new(30);
    let request = list.begin_load().expect("load");
    list.finish_load(client.list_customers(&request).await);

    assert!(matches!(
        list.status(),
        ListStatus::Failed {
            retryable: true,
            ..
        }
    ));
    assert!(list.rows().is_empty());
    assert!(!list.is_loading());
}
