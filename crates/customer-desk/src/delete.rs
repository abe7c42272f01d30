/*
[INPUT]:  Delete requests from the detail screen, confirmation keys, API results
[OUTPUT]: Confirmation modal state, single delete call per confirmation, outcome toasts
[POS]:    Record delete - confirm-then-call flow
[UPDATE]: When the delete confirmation behavior changes
*/

use std::time::Duration;

use customer_desk_adapter::ApiError;
use thiserror::Error;
use tracing::{info, warn};

use crate::notify::{MSG_DELETE_FAILED, MSG_DELETED, Toast};
use crate::route::{Redirect, Route};

pub const DEFAULT_DELETE_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    Confirming { customer_id: u64 },
    Deleting { customer_id: u64 },
    Deleted { customer_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("cannot {action} while {state:?}")]
    InvalidState {
        action: &'static str,
        state: DeleteState,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { toast: Toast, redirect: Redirect },
    Failed { toast: Toast },
}

#[derive(Debug)]
pub struct DeleteFlow {
    state: DeleteState,
    redirect_delay: Duration,
}

impl Default for DeleteFlow {
    fn default() -> Self {
        Self::new(DEFAULT_DELETE_REDIRECT_DELAY)
    }
}

impl DeleteFlow {
    pub fn new(redirect_delay: Duration) -> Self {
        Self {
            state: DeleteState::Idle,
            redirect_delay,
        }
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(
            self.state,
            DeleteState::Confirming { .. } | DeleteState::Deleting { .. }
        )
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.state, DeleteState::Deleting { .. })
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.is_deleting() {
            "Deleting..."
        } else {
            "Delete"
        }
    }

    /// Open the confirmation modal.
    pub fn request(&mut self, customer_id: u64) -> Result<(), DeleteError> {
        match self.state {
            DeleteState::Idle => {
                self.state = DeleteState::Confirming { customer_id };
                Ok(())
            }
            state => Err(DeleteError::InvalidState {
                action: "request delete",
                state,
            }),
        }
    }

    /// Close the modal; not allowed while the call is in flight.
    pub fn cancel(&mut self) -> Result<(), DeleteError> {
        match self.state {
            DeleteState::Confirming { .. } => {
                self.state = DeleteState::Idle;
                Ok(())
            }
            state => Err(DeleteError::InvalidState {
                action: "cancel",
                state,
            }),
        }
    }

    /// Returns the id to delete exactly once per confirmation.
    pub fn confirm(&mut self) -> Option<u64> {
        match self.state {
            DeleteState::Confirming { customer_id } => {
                self.state = DeleteState::Deleting { customer_id };
                Some(customer_id)
            }
            _ => None,
        }
    }

    pub fn complete(&mut self, result: Result<(), ApiError>) -> Option<DeleteOutcome> {
        let DeleteState::Deleting { customer_id } = self.state else {
            warn!(state = ?self.state, "delete result without a pending delete");
            return None;
        };

        match result {
            Ok(()) => {
                info!(customer_id, "customer deleted");
                self.state = DeleteState::Deleted { customer_id };
                Some(DeleteOutcome::Deleted {
                    toast: Toast::success(MSG_DELETED),
                    redirect: Redirect {
                        to: Route::CustomerList,
                        after: self.redirect_delay,
                    },
                })
            }
            Err(err) => {
                warn!(customer_id, error = %err, "customer delete failed");
                self.state = DeleteState::Idle;
                Some(DeleteOutcome::Failed {
                    toast: Toast::error(MSG_DELETE_FAILED),
                })
            }
        }
    }
}
