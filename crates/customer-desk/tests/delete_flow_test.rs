mod common;

use std::time::Duration;

use common::*;
use customer_desk::delete::{DeleteFlow, DeleteOutcome, DeleteState};
use customer_desk::notify::{MSG_DELETE_FAILED, MSG_DELETED, ToastKind};
use customer_desk::{CustomerApi, Route};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_failed_delete_closes_modal_and_keeps_record() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/5"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_body(5, "Grace", "United States")))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut flow = DeleteFlow::new(Duration::from_millis(1500));
    flow.request(5).expect("modal opens");
    let id = flow.confirm().expect("delete starts");
    assert!(flow.is_deleting());
    assert_eq!(flow.confirm_label(), "Deleting...");
    assert!(flow.cancel().is_err());
    assert!(flow.confirm().is_none());

    let outcome = flow.complete(client.delete_customer(id).await);
    match outcome {
        Some(DeleteOutcome::Failed { toast }) => {
            assert_eq!(toast.kind, ToastKind::Error);
            assert_eq!(toast.message, MSG_DELETE_FAILED);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(flow.state(), DeleteState::Idle);
    assert!(!flow.is_modal_open());

    let customer = assert_ok!(client.get_customer(5).await);
    assert_eq!(customer.id, 5);
}

#[tokio::test]
async fn test_successful_delete_redirects_to_list() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut flow = DeleteFlow::new(Duration::from_millis(1500));
    flow.request(9).expect("modal opens");
    let id = flow.confirm().expect("delete starts");

    match flow.complete(client.delete_customer(id).await) {
        Some(DeleteOutcome::Deleted { toast, redirect }) => {
            assert_eq!(toast.message, MSG_DELETED);
            assert_eq!(redirect.to, Route::CustomerList);
            assert_eq!(redirect.after, Duration::from_millis(1500));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(flow.state(), DeleteState::Deleted { customer_id: 9 });
}
