/*
[INPUT]:  Customer API handle, desk configuration, navigation requests, API results
[OUTPUT]: AppState owning the active screen, toasts, and scheduled redirects
[POS]:    TUI app state - the single mutator of screen and wizard state
[UPDATE]: 2026-10-13 Replace task dashboard state with customer screens
[UPDATE]: 2026-10-14 Drop API results issued for a screen that is no longer shown
[UPDATE]: 2026-10-19 Cover stale-result drops and the save-then-redirect path
*/

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use customer_desk::delete::{DeleteFlow, DeleteOutcome};
use customer_desk::detail::DetailStatus;
use customer_desk::list::CustomerList;
use customer_desk::notify::Notifier;
use customer_desk::route::{Navigator, Route};
use customer_desk::wizard::{
    ChoiceSet, FieldKey, FieldKind, SubmitOutcome, WizardController, WizardError,
    WizardSettings,
};
use customer_desk::{
    ApiError, ContactType, Customer, CustomerApi, CustomerPage, DeskConfig, IdentityProofType,
};

use super::runtime::{LogBufferHandle, UiEvent};

pub(super) const HOME_ITEMS: [&str; 2] = ["Browse customers", "New customer"];

pub(super) enum ApiEvent {
    ListLoaded(Result<CustomerPage, ApiError>),
    DetailLoaded(Result<Customer, ApiError>),
    EditLoaded(Result<WizardController, WizardError>),
    Submitted(Result<Customer, ApiError>),
    Deleted(Result<(), ApiError>),
}

impl ApiEvent {
    fn name(&self) -> &'static str {
        match self {
            ApiEvent::ListLoaded(_) => "list",
            ApiEvent::DetailLoaded(_) => "detail",
            ApiEvent::EditLoaded(_) => "edit-load",
            ApiEvent::Submitted(_) => "submit",
            ApiEvent::Deleted(_) => "delete",
        }
    }
}

/// API result tagged with the screen generation it was issued for.
pub(super) struct ApiMessage {
    pub(super) generation: u64,
    pub(super) event: ApiEvent,
}

pub(super) struct DetailScreen {
    pub(super) id: u64,
    pub(super) status: DetailStatus,
    pub(super) delete: DeleteFlow,
}

impl DetailScreen {
    pub(super) fn customer(&self) -> Option<&Customer> {
        match &self.status {
            DetailStatus::Loaded(customer) => Some(customer),
            _ => None,
        }
    }
}

pub(super) struct WizardScreen {
    pub(super) controller: WizardController,
    pub(super) focus: usize,
    pub(super) scroll: u16,
}

impl WizardScreen {
    pub(super) fn new(controller: WizardController) -> Self {
        Self {
            controller,
            focus: 0,
            scroll: 0,
        }
    }

    pub(super) fn fields(&self) -> Vec<FieldKey> {
        self.controller.form().fields(self.controller.draft())
    }

    pub(super) fn focused_field(&self) -> Option<FieldKey> {
        self.fields().get(self.focus).copied()
    }

    pub(super) fn move_focus(&mut self, delta: i32) {
        let len = self.fields().len();
        if len == 0 {
            // Review has no fields; the same keys scroll the summary.
            self.focus = 0;
            self.scroll = (self.scroll as i32 + delta).max(0) as u16;
            return;
        }
        self.focus = (self.focus as i64 + delta as i64).rem_euclid(len as i64) as usize;
    }

    /// Step changes start at the top of the new form.
    pub(super) fn reset_view(&mut self) {
        self.focus = 0;
        self.scroll = 0;
    }

    /// Collection index of the focused entry, if the field belongs to one.
    pub(super) fn focused_entry(&self) -> Option<usize> {
        match self.focused_field()? {
            FieldKey::ContactType(i)
            | FieldKey::ContactValue(i)
            | FieldKey::ContactDialCode(i)
            | FieldKey::ProofType(i)
            | FieldKey::ProofNumber(i)
            | FieldKey::ProofIssuedDate(i)
            | FieldKey::ProofExpiryDate(i) => Some(i),
            _ => None,
        }
    }

    pub(super) fn can_remove(&self) -> bool {
        let draft = self.controller.draft();
        match self.focused_field() {
            Some(FieldKey::ContactType(_) | FieldKey::ContactValue(_) | FieldKey::ContactDialCode(_)) => {
                draft.contact_details.len() > 1
            }
            Some(_) if self.focused_entry().is_some() => draft.identity_proofs.len() > 1,
            _ => false,
        }
    }

    pub(super) fn clamp_focus(&mut self) {
        let len = self.fields().len();
        self.focus = self.focus.min(len.saturating_sub(1));
    }
}

pub(super) enum Screen {
    Home { selected: usize },
    List(CustomerList),
    Detail(DetailScreen),
    Wizard(WizardScreen),
    LoadingEdit { id: u64 },
    NotFound { path: String },
}

pub(super) struct AppState {
    pub(super) api: Arc<dyn CustomerApi>,
    pub(super) config: DeskConfig,
    pub(super) settings: WizardSettings,
    pub(super) navigator: Navigator,
    pub(super) screen: Screen,
    pub(super) notifier: Notifier,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) show_logs: bool,
    events: mpsc::UnboundedSender<UiEvent>,
}

impl AppState {
    pub(super) fn new(
        api: Arc<dyn CustomerApi>,
        config: DeskConfig,
        log_buffer: LogBufferHandle,
        events: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            api,
            settings: config.wizard_settings(),
            notifier: Notifier::new(config.toast_duration()),
            config,
            navigator: Navigator::new(Route::Home),
            screen: Screen::Home { selected: 0 },
            log_buffer,
            show_logs: false,
            events,
        }
    }

    pub(super) fn navigate(&mut self, route: Route) {
        let generation = self.navigator.navigate(route.clone());
        self.screen = self.enter(route, generation);
    }

    fn enter(&self, route: Route, generation: u64) -> Screen {
        match route {
            Route::Home => Screen::Home { selected: 0 },
            Route::CustomerList => {
                let mut list = CustomerList::new(self.config.ui.page_size);
                if let Some(request) = list.begin_load() {
                    let api = self.api.clone();
                    self.spawn_api(generation, async move {
                        ApiEvent::ListLoaded(api.list_customers(&request).await)
                    });
                }
                Screen::List(list)
            }
            Route::CreateCustomer => {
                Screen::Wizard(WizardScreen::new(WizardController::create(&self.settings)))
            }
            Route::CustomerDetail { id } => {
                let api = self.api.clone();
                self.spawn_api(generation, async move {
                    ApiEvent::DetailLoaded(api.get_customer(id).await)
                });
                Screen::Detail(DetailScreen {
                    id,
                    status: DetailStatus::Loading,
                    delete: DeleteFlow::new(self.config.delete_redirect_delay()),
                })
            }
            Route::EditCustomer { id } => {
                let api = self.api.clone();
                let settings = self.settings.clone();
                self.spawn_api(generation, async move {
                    let raw = id.to_string();
                    ApiEvent::EditLoaded(
                        WizardController::load_edit(&raw, api.as_ref(), &settings).await,
                    )
                });
                Screen::LoadingEdit { id }
            }
            Route::NotFound { path } => Screen::NotFound { path },
        }
    }

    fn spawn_api<F>(&self, generation: u64, call: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = call.await;
            if events.send(UiEvent::Api(ApiMessage { generation, event })).is_err() {
                debug!("ui closed before api result arrived");
            }
        });
    }

    pub(super) fn on_tick(&mut self, now: Instant) {
        self.notifier.expire(now);
        if let Some(route) = self.navigator.poll(now) {
            let generation = self.navigator.generation();
            self.screen = self.enter(route, generation);
        }
    }

    pub(super) fn handle_api(&mut self, message: ApiMessage) {
        let ApiMessage { generation, event } = message;
        if !self.navigator.is_current(generation) {
            debug!(
                kind = event.name(),
                generation,
                current = self.navigator.generation(),
                "dropping result for a screen no longer shown"
            );
            return;
        }

        let event = match event {
            ApiEvent::EditLoaded(result) => {
                self.finish_edit_load(result);
                return;
            }
            other => other,
        };

        let now = Instant::now();
        match (event, &mut self.screen) {
            (ApiEvent::ListLoaded(result), Screen::List(list)) => list.finish_load(result),
            (ApiEvent::DetailLoaded(result), Screen::Detail(detail)) => {
                detail.status = DetailStatus::from_fetch(result);
            }
            (ApiEvent::Submitted(result), Screen::Wizard(wizard)) => {
                let outcome = wizard.controller.complete_submit(result);
                self.notifier.show(outcome.toast().clone(), now);
                if let SubmitOutcome::Saved { redirect, .. } = outcome {
                    self.navigator.schedule(redirect, now);
                }
            }
            (ApiEvent::Deleted(result), Screen::Detail(detail)) => {
                match detail.delete.complete(result) {
                    Some(DeleteOutcome::Deleted { toast, redirect }) => {
                        self.notifier.show(toast, now);
                        self.navigator.schedule(redirect, now);
                    }
                    Some(DeleteOutcome::Failed { toast }) => self.notifier.show(toast, now),
                    None => {}
                }
            }
            (event, _) => {
                warn!(kind = event.name(), "api result does not match the current screen");
            }
        }
    }

    fn finish_edit_load(&mut self, result: Result<WizardController, WizardError>) {
        if !matches!(self.screen, Screen::LoadingEdit { .. }) {
            warn!("edit load finished outside the loading screen");
            return;
        }
        self.screen = match result {
            Ok(controller) => Screen::Wizard(WizardScreen::new(controller)),
            Err(err) => {
                warn!(error = %err, "edit target unavailable");
                Screen::NotFound {
                    path: self.navigator.current().path(),
                }
            }
        };
    }

    pub(super) fn reload_list(&mut self) {
        let request = match &mut self.screen {
            Screen::List(list) => list.begin_load(),
            _ => None,
        };
        if let Some(request) = request {
            let api = self.api.clone();
            self.spawn_api(self.navigator.generation(), async move {
                ApiEvent::ListLoaded(api.list_customers(&request).await)
            });
        }
    }

    pub(super) fn submit_wizard(&mut self) {
        let request = match &mut self.screen {
            Screen::Wizard(wizard) => wizard.controller.begin_submit(),
            _ => None,
        };
        if let Some(request) = request {
            let api = self.api.clone();
            self.spawn_api(self.navigator.generation(), async move {
                ApiEvent::Submitted(request.send(api.as_ref()).await)
            });
        }
    }

    pub(super) fn confirm_delete(&mut self) {
        let customer_id = match &mut self.screen {
            Screen::Detail(detail) => detail.delete.confirm(),
            _ => None,
        };
        if let Some(customer_id) = customer_id {
            let api = self.api.clone();
            self.spawn_api(self.navigator.generation(), async move {
                ApiEvent::Deleted(api.delete_customer(customer_id).await)
            });
        }
    }

    /// Options for a choice field, in display order.
    pub(super) fn choices(&self, set: ChoiceSet) -> Vec<String> {
        choice_options(&self.config, set)
    }
}

pub(super) fn choice_options(config: &DeskConfig, set: ChoiceSet) -> Vec<String> {
    let reference = &config.reference;
    match set {
        ChoiceSet::ContactTypes => ContactType::ALL
            .iter()
            .map(|kind| kind.label().to_string())
            .collect(),
        ChoiceSet::IdentityTypes => IdentityProofType::ALL
            .iter()
            .map(|kind| kind.label().to_string())
            .collect(),
        ChoiceSet::Genders => reference.genders.clone(),
        ChoiceSet::Languages => reference.languages.clone(),
        ChoiceSet::Countries => reference.countries.clone(),
        ChoiceSet::DialCodes => reference.dial_codes.clone(),
    }
}

/// Next option after `current`, wrapping; the first option when `current` is not listed.
pub(super) fn cycle_choice(options: &[String], current: &str, delta: i32) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as i64;
    let next = match options.iter().position(|option| option == current) {
        Some(index) => (index as i64 + delta as i64).rem_euclid(len),
        None => 0,
    };
    options.get(next as usize).cloned()
}

pub(super) fn is_text_field(field: FieldKey) -> bool {
    matches!(field.kind(), FieldKind::Text | FieldKind::Date)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use customer_desk::notify::MSG_UPDATED;
    use customer_desk::wizard::Step;
    use customer_desk::{CustomerPayload, PageRequest};

    use super::*;
    use crate::tui::runtime::LogBuffer;

    fn customer_body(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": { "firstName": "Grace", "middleName": "", "lastName": "Hopper" },
            "gender": "female",
            "language": "English",
            "dateOfBirth": "1906-12-09",
            "address": {
                "addressLine1": "1 Navy Yard",
                "city": "Arlington",
                "state": "VA",
                "country": "United States",
                "zipCode": "22202"
            },
            "contactDetails": [{ "type": "Mobile", "value": "5550100", "dialCode": "+1" }],
            "identityProofs": [{
                "type": "Passport",
                "value": "P-1906",
                "issuedDate": "2015-03-01",
                "expiryDate": "2025-03-01"
            }]
        })
    }

    /// Answers every call successfully from fixtures.
    struct StubApi;

    #[async_trait]
    impl CustomerApi for StubApi {
        async fn list_customers(
            &self,
            request: &PageRequest,
        ) -> customer_desk_adapter::Result<CustomerPage> {
            Ok(CustomerPage {
                content: Vec::new(),
                total_pages: 0,
                total_elements: 0,
                size: request.size,
                number: request.page,
                first: true,
                last: true,
                empty: true,
            })
        }

        async fn get_customer(&self, id: u64) -> customer_desk_adapter::Result<Customer> {
            Ok(serde_json::from_value(customer_body(id))?)
        }

        async fn create_customer(
            &self,
            payload: &CustomerPayload,
        ) -> customer_desk_adapter::Result<Customer> {
            Ok(Customer {
                id: 7,
                details: payload.clone(),
            })
        }

        async fn update_customer(
            &self,
            id: u64,
            payload: &CustomerPayload,
        ) -> customer_desk_adapter::Result<Customer> {
            Ok(Customer {
                id,
                details: payload.clone(),
            })
        }

        async fn delete_customer(&self, _id: u64) -> customer_desk_adapter::Result<()> {
            Ok(())
        }
    }

    fn app_with(events: mpsc::UnboundedSender<UiEvent>) -> AppState {
        AppState::new(
            Arc::new(StubApi),
            DeskConfig::default(),
            Arc::new(StdMutex::new(LogBuffer::new(10))),
            events,
        )
    }

    async fn next_api(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> ApiMessage {
        match rx.recv().await {
            Some(UiEvent::Api(message)) => message,
            Some(UiEvent::Input(_)) => panic!("unexpected input event"),
            None => panic!("event channel closed"),
        }
    }

    #[tokio::test]
    async fn test_results_for_a_left_screen_are_dropped() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = app_with(tx);

        app.navigate(Route::CustomerDetail { id: 5 });
        let stale = app.navigator.generation();
        app.navigate(Route::CustomerList);
        assert!(!app.navigator.is_current(stale));

        let customer: Customer = serde_json::from_value(customer_body(5)).unwrap();
        app.handle_api(ApiMessage {
            generation: stale,
            event: ApiEvent::DetailLoaded(Ok(customer)),
        });
        app.handle_api(ApiMessage {
            generation: stale,
            event: ApiEvent::ListLoaded(Err(ApiError::Status {
                status: 500,
                message: "late".to_string(),
            })),
        });

        match &app.screen {
            Screen::List(list) => assert!(list.is_loading()),
            _ => panic!("screen changed by a stale result"),
        }
    }

    #[tokio::test]
    async fn test_update_shows_toast_then_redirects_to_detail() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = app_with(tx);

        app.navigate(Route::EditCustomer { id: 42 });
        assert!(matches!(app.screen, Screen::LoadingEdit { id: 42 }));
        let loaded = next_api(&mut rx).await;
        app.handle_api(loaded);

        match &mut app.screen {
            Screen::Wizard(wizard) => {
                assert_eq!(wizard.controller.draft().personal.name.first_name, "Grace");
                while wizard.controller.current_step() != Step::Review {
                    wizard.controller.advance().unwrap();
                }
            }
            _ => panic!("edit wizard not shown"),
        }

        app.submit_wizard();
        let submitted = next_api(&mut rx).await;
        assert!(matches!(submitted.event, ApiEvent::Submitted(Ok(_))));
        app.handle_api(submitted);

        assert_eq!(
            app.notifier.current().map(|toast| toast.message.as_str()),
            Some(MSG_UPDATED)
        );
        assert!(app.navigator.pending().is_some());
        assert!(matches!(app.screen, Screen::Wizard(_)));

        app.on_tick(Instant::now() + Duration::from_secs(3));
        match &app.screen {
            Screen::Detail(detail) => assert_eq!(detail.id, 42),
            _ => panic!("no redirect to the saved record"),
        }
        assert_eq!(app.navigator.current(), &Route::CustomerDetail { id: 42 });
        assert!(app.navigator.pending().is_none());
    }

    fn options() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_cycle_choice_wraps_both_ways() {
        assert_eq!(cycle_choice(&options(), "c", 1).as_deref(), Some("a"));
        assert_eq!(cycle_choice(&options(), "a", -1).as_deref(), Some("c"));
        assert_eq!(cycle_choice(&options(), "", 1).as_deref(), Some("a"));
        assert_eq!(cycle_choice(&[], "a", 1), None);
    }

    #[test]
    fn test_type_choices_follow_enums() {
        let config = DeskConfig::default();
        let contact = choice_options(&config, ChoiceSet::ContactTypes);
        assert_eq!(contact.first().map(String::as_str), Some("Email"));
        let identity = choice_options(&config, ChoiceSet::IdentityTypes);
        assert!(identity.contains(&"Driver License".to_string()));
    }

    #[test]
    fn test_wizard_focus_wraps_and_resets() {
        let mut screen = WizardScreen::new(WizardController::create(&WizardSettings::default()));
        assert_eq!(screen.focused_field(), Some(FieldKey::FirstName));
        screen.move_focus(-1);
        assert_eq!(screen.focused_field(), Some(FieldKey::Language));
        screen.scroll = 4;
        screen.reset_view();
        assert_eq!(screen.focus, 0);
        assert_eq!(screen.scroll, 0);
        assert!(!screen.can_remove());
    }
}
