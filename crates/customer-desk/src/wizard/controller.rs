/*
[INPUT]:  Key-driven edits, navigation requests, submit results from the API
[OUTPUT]: WizardController owning the draft, state machine position, and submit guard
[POS]:    Wizard domain logic - the controller the TUI drives
[UPDATE]: When wizard modes, submit handling, or edit loading change
[UPDATE]: 2026-10-14 Guard submit with an in-flight flag cleared on both outcomes
*/

use std::time::Duration;

use customer_desk_adapter::{ApiError, Customer, CustomerApi, CustomerPayload};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::draft::{Draft, DraftStore};
use super::fields::FieldKey;
use super::machine::{Step, TransitionError, WizardEvent, WizardState, next_state};
use super::steps::{StepForm, StepForms};
use crate::notify::{MSG_CREATE_FAILED, MSG_CREATED, MSG_UPDATE_FAILED, MSG_UPDATED, Toast};
use crate::route::{Redirect, Route, parse_customer_id};

pub const DEFAULT_SUBMIT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_DIAL_CODE: &str = "+1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit { customer_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub default_dial_code: String,
    pub submit_redirect_delay: Duration,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            default_dial_code: DEFAULT_DIAL_CODE.to_string(),
            submit_redirect_delay: DEFAULT_SUBMIT_REDIRECT_DELAY,
        }
    }
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// The edit target id was malformed or could not be fetched.
    #[error("customer {0:?} not found")]
    NotFound(String),
}

/// A submit that has passed the guard and must be sent exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub mode: WizardMode,
    pub payload: CustomerPayload,
}

impl SubmitRequest {
    pub async fn send(&self, api: &dyn CustomerApi) -> Result<Customer, ApiError> {
        match self.mode {
            WizardMode::Create => api.create_customer(&self.payload).await,
            WizardMode::Edit { customer_id } => {
                api.update_customer(customer_id, &self.payload).await
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved {
        customer_id: u64,
        toast: Toast,
        redirect: Redirect,
    },
    Failed {
        toast: Toast,
    },
}

impl SubmitOutcome {
    pub fn toast(&self) -> &Toast {
        match self {
            SubmitOutcome::Saved { toast, .. } | SubmitOutcome::Failed { toast } => toast,
        }
    }
}

pub struct WizardController {
    store: DraftStore,
    state: WizardState,
    mode: WizardMode,
    forms: StepForms,
    submit_in_flight: bool,
    redirect_delay: Duration,
}

impl WizardController {
    pub fn create(settings: &WizardSettings) -> Self {
        Self::with_draft(WizardMode::Create, Draft::default(), settings)
    }

    /// Edit mode, hydrated from the fetched record.
    pub fn edit(customer: Customer, settings: &WizardSettings) -> Self {
        let mode = WizardMode::Edit {
            customer_id: customer.id,
        };
        let draft = Draft::from_customer(customer, &settings.default_dial_code);
        Self::with_draft(mode, draft, settings)
    }

    fn with_draft(mode: WizardMode, draft: Draft, settings: &WizardSettings) -> Self {
        let state = WizardState::Step(draft.current_step);
        Self {
            store: DraftStore::new(draft),
            state,
            mode,
            forms: StepForms::new(&settings.default_dial_code),
            submit_in_flight: false,
            redirect_delay: settings.submit_redirect_delay,
        }
    }

    /// Parse the raw id and fetch the record. Both failures mean not found,
    /// and no write is ever issued on this path.
    pub async fn load_edit(
        raw_id: &str,
        api: &dyn CustomerApi,
        settings: &WizardSettings,
    ) -> Result<Self, WizardError> {
        let customer_id =
            parse_customer_id(raw_id).map_err(|_| WizardError::NotFound(raw_id.to_string()))?;
        let customer = api.get_customer(customer_id).await.map_err(|err| {
            warn!(customer_id, error = %err, "edit load failed");
            WizardError::NotFound(raw_id.to_string())
        })?;
        info!(customer_id, "customer loaded for edit");
        Ok(Self::edit(customer, settings))
    }

    pub fn draft(&self) -> &Draft {
        self.store.draft()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn current_step(&self) -> Step {
        self.store.draft().current_step
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight
    }

    pub fn form(&self) -> &dyn StepForm {
        self.forms.get(self.current_step())
    }

    /// Drives the enabled state of the advance control.
    pub fn can_advance(&self) -> bool {
        self.current_step() != Step::LAST && self.form().validate(self.draft())
    }

    pub fn missing(&self) -> Vec<FieldKey> {
        self.form().missing(self.draft())
    }

    fn is_editable(&self) -> bool {
        matches!(self.state, WizardState::Step(_))
    }

    pub fn edit_field(&mut self, field: FieldKey, value: &str) {
        if !self.is_editable() {
            return;
        }
        let form = self.forms.get(self.store.draft().current_step);
        self.store
            .update(|draft| form.on_field_change(draft, field, value));
    }

    pub fn add_entry(&mut self) {
        if !self.is_editable() {
            return;
        }
        let form = self.forms.get(self.store.draft().current_step);
        self.store.update(|draft| form.add_entry(draft));
    }

    pub fn remove_entry(&mut self, index: usize) {
        if !self.is_editable() {
            return;
        }
        let form = self.forms.get(self.store.draft().current_step);
        self.store.update(|draft| form.remove_entry(draft, index));
    }

    fn apply(&mut self, event: WizardEvent) -> Result<WizardState, TransitionError> {
        let next = next_state(self.state, &event, self.store.draft(), &self.forms)?;
        debug!(from = ?self.state, to = ?next, event = ?event, "wizard transition");
        self.state = next;
        if let WizardState::Step(step) = next {
            self.store.update(|mut draft| {
                draft.current_step = step;
                draft
            });
        }
        Ok(next)
    }

    pub fn advance(&mut self) -> Result<Step, TransitionError> {
        self.apply(WizardEvent::Advance)?;
        Ok(self.current_step())
    }

    pub fn retreat(&mut self) -> Result<Step, TransitionError> {
        self.apply(WizardEvent::Retreat)?;
        Ok(self.current_step())
    }

    /// Start a submit. `None` when one is already in flight or the wizard is
    /// not on the review step, so repeated presses issue a single call.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.submit_in_flight {
            debug!("submit ignored: already in flight");
            return None;
        }
        if let Err(err) = self.apply(WizardEvent::Submit) {
            debug!(error = %err, "submit ignored");
            return None;
        }
        self.submit_in_flight = true;
        Some(SubmitRequest {
            mode: self.mode,
            payload: self.store.draft().to_payload(),
        })
    }

    pub fn complete_submit(&mut self, result: Result<Customer, ApiError>) -> SubmitOutcome {
        self.submit_in_flight = false;
        let is_create = self.mode == WizardMode::Create;

        match result {
            Ok(customer) => {
                let customer_id = customer.id;
                if let Err(err) = self.apply(WizardEvent::SubmitSucceeded { customer_id }) {
                    warn!(error = %err, "unexpected submit success");
                }
                info!(customer_id, create = is_create, "customer saved");
                SubmitOutcome::Saved {
                    customer_id,
                    toast: Toast::success(if is_create { MSG_CREATED } else { MSG_UPDATED }),
                    redirect: Redirect {
                        to: Route::CustomerDetail { id: customer_id },
                        after: self.redirect_delay,
                    },
                }
            }
            Err(err) => {
                warn!(error = %err, create = is_create, "customer save failed");
                if let Err(err) = self.apply(WizardEvent::SubmitFailed) {
                    warn!(error = %err, "unexpected submit failure");
                }
                SubmitOutcome::Failed {
                    toast: Toast::error(if is_create {
                        MSG_CREATE_FAILED
                    } else {
                        MSG_UPDATE_FAILED
                    }),
                }
            }
        }
    }

    /// Guarded submit in one call. `None` when the guard rejected it.
    pub async fn submit(&mut self, api: &dyn CustomerApi) -> Option<SubmitOutcome> {
        let request = self.begin_submit()?;
        let result = request.send(api).await;
        Some(self.complete_submit(result))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use customer_desk_adapter::{CustomerPage, PageRequest};

    use super::*;
    use crate::notify::ToastKind;
    use crate::wizard::draft::tests::complete_draft;

    /// Counts write calls; create/update fail when `fail` is set.
    #[derive(Default)]
    struct CountingApi {
        writes: AtomicUsize,
        fail: bool,
    }

    fn saved(id: u64, payload: &CustomerPayload) -> Customer {
        Customer {
            id,
            details: payload.clone(),
        }
    }

    #[async_trait]
    impl CustomerApi for CountingApi {
        async fn list_customers(
            &self,
            _request: &PageRequest,
        ) -> customer_desk_adapter::Result<CustomerPage> {
            Err(ApiError::InvalidResponse("unused".to_string()))
        }

        async fn get_customer(&self, id: u64) -> customer_desk_adapter::Result<Customer> {
            if id == 42 {
                Ok(saved(42, &complete_draft().to_payload()))
            } else {
                Err(ApiError::NotFound { id })
            }
        }

        async fn create_customer(
            &self,
            payload: &CustomerPayload,
        ) -> customer_desk_adapter::Result<Customer> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApiError::Status {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(saved(11, payload))
        }

        async fn update_customer(
            &self,
            id: u64,
            payload: &CustomerPayload,
        ) -> customer_desk_adapter::Result<Customer> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApiError::Status {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(saved(id, payload))
        }

        async fn delete_customer(&self, _id: u64) -> customer_desk_adapter::Result<()> {
            Ok(())
        }
    }

    fn fill(controller: &mut WizardController, values: &[(FieldKey, &str)]) {
        for (field, value) in values {
            controller.edit_field(*field, value);
        }
    }

    fn on_review(mode: WizardMode) -> WizardController {
        let settings = WizardSettings::default();
        let mut controller = match mode {
            WizardMode::Create => WizardController::create(&settings),
            WizardMode::Edit { customer_id } => WizardController::edit(
                Customer {
                    id: customer_id,
                    details: complete_draft().to_payload(),
                },
                &settings,
            ),
        };
        controller.store.update(|_| complete_draft());
        for _ in 0..4 {
            controller.advance().unwrap();
        }
        assert_eq!(controller.current_step(), Step::Review);
        controller
    }

    #[test]
    fn test_personal_step_scenario() {
        let mut controller = WizardController::create(&WizardSettings::default());
        assert!(!controller.can_advance());

        fill(
            &mut controller,
            &[
                (FieldKey::FirstName, "John"),
                (FieldKey::LastName, "Doe"),
                (FieldKey::DateOfBirth, "1990-01-01"),
                (FieldKey::Gender, "male"),
                (FieldKey::Language, "English"),
            ],
        );
        assert!(controller.can_advance());

        controller.edit_field(FieldKey::LastName, "");
        assert!(!controller.can_advance());
        assert_eq!(controller.missing(), vec![FieldKey::LastName]);
        assert!(controller.advance().is_err());
        assert_eq!(controller.current_step(), Step::PersonalInfo);

        controller.edit_field(FieldKey::LastName, "Doe");
        assert_eq!(controller.advance().unwrap(), Step::Address);
        assert_eq!(controller.draft().current_step, Step::Address);
    }

    #[test]
    fn test_retreat_from_first_step_is_rejected() {
        let mut controller = WizardController::create(&WizardSettings::default());
        assert!(controller.retreat().is_err());
        assert_eq!(controller.state(), WizardState::Step(Step::PersonalInfo));
    }

    #[tokio::test]
    async fn test_double_submit_issues_one_call() {
        let api = Arc::new(CountingApi::default());
        let mut controller = on_review(WizardMode::Create);

        let first = controller.begin_submit();
        let second = controller.begin_submit();
        assert!(first.is_some());
        assert!(second.is_none());
        assert!(controller.is_submitting());

        let result = first.unwrap().send(api.as_ref()).await;
        let outcome = controller.complete_submit(result);
        assert_eq!(api.writes.load(Ordering::SeqCst), 1);
        assert_eq!(
            outcome,
            SubmitOutcome::Saved {
                customer_id: 11,
                toast: Toast::success(MSG_CREATED),
                redirect: Redirect {
                    to: Route::CustomerDetail { id: 11 },
                    after: DEFAULT_SUBMIT_REDIRECT_DELAY,
                },
            }
        );
        assert_eq!(controller.state(), WizardState::Done { customer_id: 11 });
        assert!(controller.begin_submit().is_none());
    }

    #[tokio::test]
    async fn test_failed_submit_returns_to_review_and_reenables() {
        let api = CountingApi {
            fail: true,
            ..CountingApi::default()
        };
        let mut controller = on_review(WizardMode::Edit { customer_id: 5 });

        let outcome = controller.submit(&api).await.unwrap();
        assert_eq!(outcome.toast().kind, ToastKind::Error);
        assert_eq!(outcome.toast().message, MSG_UPDATE_FAILED);
        assert_eq!(controller.state(), WizardState::Step(Step::Review));
        assert!(!controller.is_submitting());

        let retry = controller.submit(&api).await;
        assert!(retry.is_some());
        assert_eq!(api.writes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_edit_submit_uses_update() {
        let api = CountingApi::default();
        let mut controller = on_review(WizardMode::Edit { customer_id: 5 });
        let outcome = controller.submit(&api).await.unwrap();
        match outcome {
            SubmitOutcome::Saved {
                customer_id, toast, ..
            } => {
                assert_eq!(customer_id, 5);
                assert_eq!(toast.message, MSG_UPDATED);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_submit_rejected_before_review() {
        let mut controller = WizardController::create(&WizardSettings::default());
        assert!(controller.begin_submit().is_none());
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_load_edit_with_malformed_id_is_not_found() {
        let api = CountingApi::default();
        let settings = WizardSettings::default();
        for raw in ["abc", "0", "-1"] {
            let err = WizardController::load_edit(raw, &api, &settings)
                .await
                .err()
                .unwrap();
            assert!(matches!(err, WizardError::NotFound(_)));
        }
        assert_eq!(api.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_edit_hydrates_draft() {
        let api = CountingApi::default();
        let settings = WizardSettings::default();
        let controller = WizardController::load_edit("42", &api, &settings)
            .await
            .unwrap();
        assert_eq!(controller.mode(), WizardMode::Edit { customer_id: 42 });
        assert_eq!(controller.current_step(), Step::PersonalInfo);
        assert_eq!(controller.draft().personal.name.first_name, "John");

        let missing = WizardController::load_edit("7", &api, &settings).await;
        assert!(matches!(missing, Err(WizardError::NotFound(_))));
    }

    #[test]
    fn test_collection_edits_go_through_current_form() {
        let mut controller = WizardController::create(&WizardSettings::default());
        controller.add_entry();
        assert_eq!(controller.draft().contact_details.len(), 1);

        controller.store.update(|_| complete_draft());
        controller.advance().unwrap();
        controller.advance().unwrap();
        controller.add_entry();
        assert_eq!(controller.draft().contact_details.len(), 2);
        controller.remove_entry(0);
        controller.remove_entry(0);
        assert_eq!(controller.draft().contact_details.len(), 1);
    }
}
