/*
[INPUT]:  Route paths from the CLI or in-app navigation, redirect requests
[OUTPUT]: Typed routes, customer id parsing, deferred navigation with screen generations
[POS]:    Navigation layer - which screen is active and when it changes
[UPDATE]: When screens or their paths change
[UPDATE]: 2026-10-12 Track screen generation so late API results can be dropped
*/

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    CustomerList,
    CreateCustomer,
    CustomerDetail { id: u64 },
    EditCustomer { id: u64 },
    NotFound { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid customer id: {0:?}")]
    InvalidCustomerId(String),
}

/// Customer ids are positive integers; anything else is rejected.
pub fn parse_customer_id(raw: &str) -> Result<u64, RouteError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RouteError::InvalidCustomerId(raw.to_string())),
    }
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let not_found = || Route::NotFound {
            path: trimmed.to_string(),
        };

        match segments.as_slice() {
            [] => Route::Home,
            ["customers"] => Route::CustomerList,
            ["customers", "create"] => Route::CreateCustomer,
            ["customers", "edit", raw] => parse_customer_id(raw)
                .map(|id| Route::EditCustomer { id })
                .unwrap_or_else(|_| not_found()),
            ["customers", raw] => parse_customer_id(raw)
                .map(|id| Route::CustomerDetail { id })
                .unwrap_or_else(|_| not_found()),
            _ => not_found(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::CustomerList => "/customers".to_string(),
            Route::CreateCustomer => "/customers/create".to_string(),
            Route::CustomerDetail { id } => format!("/customers/{id}"),
            Route::EditCustomer { id } => format!("/customers/edit/{id}"),
            Route::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation requested by a finished operation, to happen after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRedirect {
    pub to: Route,
    pub due_at: Instant,
}

/// Current screen plus at most one scheduled redirect.
///
/// Every screen change bumps `generation`; work started for an older
/// generation belongs to a screen that is no longer shown.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    generation: u64,
    pending: Option<PendingRedirect>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            generation: 0,
            pending: None,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn pending(&self) -> Option<&PendingRedirect> {
        self.pending.as_ref()
    }

    /// Switch screens immediately, cancelling any scheduled redirect.
    pub fn navigate(&mut self, to: Route) -> u64 {
        debug!(from = %self.current, to = %to, "navigate");
        self.pending = None;
        self.current = to;
        self.generation += 1;
        self.generation
    }

    pub fn schedule(&mut self, redirect: Redirect, now: Instant) {
        let Redirect { to, after } = redirect;
        debug!(to = %to, delay_ms = after.as_millis() as u64, "redirect scheduled");
        self.pending = Some(PendingRedirect {
            to,
            due_at: now + after,
        });
    }

    /// Perform the scheduled redirect once it is due. Returns the new route.
    pub fn poll(&mut self, now: Instant) -> Option<Route> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.due_at);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.navigate(pending.to.clone());
        Some(pending.to)
    }
}
