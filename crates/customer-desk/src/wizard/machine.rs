/*
[INPUT]:  Current wizard state, a wizard event, and the draft for guard checks
[OUTPUT]: Validated next state or a TransitionError; derived progress statuses
[POS]:    Wizard domain logic - state machine for the customer form
[UPDATE]: When steps, transitions, or guards change
*/

use std::fmt;

use thiserror::Error;

use super::draft::Draft;
use super::steps::StepForms;

/// The five form steps, numbered 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    PersonalInfo = 1,
    Address = 2,
    ContactDetails = 3,
    IdentityProofs = 4,
    Review = 5,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::PersonalInfo,
        Step::Address,
        Step::ContactDetails,
        Step::IdentityProofs,
        Step::Review,
    ];

    pub const FIRST: Step = Step::PersonalInfo;
    pub const LAST: Step = Step::Review;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Short name used by the progress indicator
    pub fn name(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal",
            Step::Address => "Address",
            Step::ContactDetails => "Contact",
            Step::IdentityProofs => "Identity",
            Step::Review => "Review",
        }
    }

    /// Steps that edit a collection and offer add/remove.
    pub fn has_entries(self) -> bool {
        matches!(self, Step::ContactDetails | Step::IdentityProofs)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Information",
            Step::Address => "Address",
            Step::ContactDetails => "Contact Details",
            Step::IdentityProofs => "Identity Proofs",
            Step::Review => "Review & Submit",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Step(Step),
    Submitting,
    Done { customer_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Advance,
    Retreat,
    Submit,
    SubmitSucceeded { customer_id: u64 },
    SubmitFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{step} has missing required fields: {}", missing.join(", "))]
    Incomplete { step: Step, missing: Vec<String> },
    #[error("invalid transition: {from:?} -> {event:?}")]
    InvalidTransition { from: WizardState, event: WizardEvent },
}

/// Pure transition function; the draft is only read for guards.
pub fn next_state(
    state: WizardState,
    event: &WizardEvent,
    draft: &Draft,
    forms: &StepForms,
) -> Result<WizardState, TransitionError> {
    let invalid = || TransitionError::InvalidTransition {
        from: state,
        event: event.clone(),
    };

    match (state, event) {
        (WizardState::Step(step), WizardEvent::Advance) => {
            let Some(next) = step.next() else {
                return Err(invalid());
            };
            let missing = forms.get(step).missing(draft);
            if !missing.is_empty() {
                return Err(TransitionError::Incomplete {
                    step,
                    missing: missing.iter().map(|field| field.label()).collect(),
                });
            }
            Ok(WizardState::Step(next))
        }
        (WizardState::Step(step), WizardEvent::Retreat) => {
            step.previous().map(WizardState::Step).ok_or_else(invalid)
        }
        (WizardState::Step(Step::Review), WizardEvent::Submit) => Ok(WizardState::Submitting),
        (WizardState::Submitting, WizardEvent::SubmitSucceeded { customer_id }) => {
            Ok(WizardState::Done {
                customer_id: *customer_id,
            })
        }
        (WizardState::Submitting, WizardEvent::SubmitFailed) => {
            Ok(WizardState::Step(Step::Review))
        }
        _ => Err(invalid()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    pub step: Step,
    pub status: StepStatus,
}

/// Statuses are derived from the current step, never stored.
pub fn progress(current: Step) -> [StepProgress; 5] {
    Step::ALL.map(|step| StepProgress {
        step,
        status: match step.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Complete,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        },
    })
}
