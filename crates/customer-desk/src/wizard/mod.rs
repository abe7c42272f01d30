/*
[INPUT]:  Draft edits and navigation events from the TUI
[OUTPUT]: Five-step customer wizard: draft store, step forms, state machine, controller
[POS]:    Wizard domain logic - module root
[UPDATE]: When wizard submodules or exports change
*/

pub mod controller;
pub mod draft;
pub mod fields;
pub mod machine;
pub mod steps;

pub use controller::{
    SubmitOutcome, SubmitRequest, WizardController, WizardError, WizardMode, WizardSettings,
};
pub use draft::{Draft, DraftStore, PersonalInfo};
pub use fields::{ChoiceSet, FieldKey, FieldKind};
pub use machine::{
    Step, StepProgress, StepStatus, TransitionError, WizardEvent, WizardState, next_state,
    progress,
};
pub use steps::{StepForm, StepForms};
