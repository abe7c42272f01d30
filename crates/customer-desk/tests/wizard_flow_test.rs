mod common;

use common::*;
use customer_desk::Route;
use customer_desk::notify::{MSG_CREATE_FAILED, MSG_CREATED, MSG_UPDATED, ToastKind};
use customer_desk::wizard::{
    FieldKey, Step, SubmitOutcome, WizardController, WizardError, WizardMode, WizardSettings,
    WizardState,
};
use wiremock::matchers::{any, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_posts_once_and_redirects_to_detail() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .and(body_partial_json(serde_json::json!({
            "name": { "firstName": "Ada", "lastName": "Lovelace" },
            "contactDetails": [{ "type": "Email", "value": "ada@example.com" }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(customer_body(7, "Ada", "United Kingdom")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut controller = WizardController::create(&WizardSettings::default());
    fill_to_review(&mut controller);
    assert_eq!(controller.current_step(), Step::Review);

    let request = controller.begin_submit().expect("first submit starts");
    assert!(controller.is_submitting());
    assert!(controller.begin_submit().is_none());

    let outcome = controller.complete_submit(request.send(&client).await);
    match outcome {
        SubmitOutcome::Saved {
            customer_id,
            toast,
            redirect,
        } => {
            assert_eq!(customer_id, 7);
            assert_eq!(toast.kind, ToastKind::Success);
            assert_eq!(toast.message, MSG_CREATED);
            assert_eq!(redirect.to, Route::CustomerDetail { id: 7 });
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(controller.state(), WizardState::Done { customer_id: 7 });
}

#[tokio::test]
async fn test_failed_create_returns_to_review_and_allows_retry() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut controller = WizardController::create(&WizardSettings::default());
    fill_to_review(&mut controller);

    let outcome = controller.submit(&client).await.expect("submit issued");
    assert_eq!(outcome.toast().kind, ToastKind::Error);
    assert_eq!(outcome.toast().message, MSG_CREATE_FAILED);
    assert_eq!(controller.state(), WizardState::Step(Step::Review));
    assert_eq!(controller.draft().personal.name.first_name, "Ada");
    assert!(controller.begin_submit().is_some());
}

#[tokio::test]
async fn test_edit_with_invalid_id_is_not_found_without_requests() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    for raw in ["abc", "0", "-3", ""] {
        let result = WizardController::load_edit(raw, &client, &WizardSettings::default()).await;
        assert!(
            matches!(result, Err(WizardError::NotFound(_))),
            "{raw:?} should be not found"
        );
    }
}

#[tokio::test]
async fn test_edit_missing_record_is_not_found() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/404"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = WizardController::load_edit("404", &client, &WizardSettings::default()).await;
    assert!(matches!(result, Err(WizardError::NotFound(_))));
}

#[tokio::test]
async fn test_edit_hydrates_and_updates_with_put() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_body(42, "Grace", "United States")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/customers/42"))
        .and(body_partial_json(serde_json::json!({
            "name": { "firstName": "Amazing Grace" },
            "contactDetails": [{ "type": "Mobile", "dialCode": "+1" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_body(42, "Amazing Grace", "United States")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut controller = WizardController::load_edit("42", &client, &WizardSettings::default())
        .await
        .expect("record loads");
    assert_eq!(controller.mode(), WizardMode::Edit { customer_id: 42 });
    assert_eq!(controller.current_step(), Step::PersonalInfo);
    assert_eq!(controller.draft().address.city, "Arlington");

    controller.edit_field(FieldKey::FirstName, "Amazing Grace");
    while controller.current_step() != Step::Review {
        controller.advance().expect("hydrated steps are complete");
    }

    let outcome = controller.submit(&client).await.expect("submit issued");
    assert_eq!(outcome.toast().message, MSG_UPDATED);
    assert!(matches!(outcome, SubmitOutcome::Saved { customer_id: 42, .. }));
}
