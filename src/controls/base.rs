//! Control base
//!
//! The shared `(driver, selector)` pair every control wraps, plus the two
//! resolution primitives that carry the crate's central contract: read
//! queries resolve with a short bound and swallow failures, actions resolve
//! with the full bound and propagate them.

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::config::Timeouts;
use crate::driver::traits::{ElementHandle, PageDriver};
use crate::driver::types::{ResolveOptions, WaitState};
use crate::Result;

/// Shared state of a control wrapper
///
/// Owns a page driver handle and a selector; stateless beyond that pair.
/// Elements are resolved fresh per operation, never cached.
#[derive(Clone)]
pub struct ControlBase {
    driver: Arc<dyn PageDriver>,
    selector: String,
    timeouts: Timeouts,
}

impl std::fmt::Debug for ControlBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlBase")
            .field("selector", &self.selector)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl ControlBase {
    /// Create a new control base with default timeouts
    pub fn new(driver: Arc<dyn PageDriver>, selector: impl Into<String>) -> Self {
        Self {
            driver,
            selector: selector.into(),
            timeouts: Timeouts::default(),
        }
    }

    /// Override the wait bounds
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// The bound selector
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The configured wait bounds
    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Resolve for a read query.
    ///
    /// Uses the short read bound and the `Visible` wait state. Every
    /// resolution failure is swallowed and reported as `None`; the caller
    /// substitutes its documented default value. The short bound is what
    /// distinguishes "missing element" from "hung page" on the read path.
    #[instrument(skip(self), fields(selector = %self.selector))]
    pub async fn try_resolve(&self) -> Option<Arc<dyn ElementHandle>> {
        let options = ResolveOptions {
            state: WaitState::Visible,
            timeout: self.timeouts.read,
            poll: self.timeouts.poll,
        };

        match self.driver.resolve(&self.selector, options).await {
            Ok(element) => Some(element),
            Err(e) => {
                debug!("read resolution failed, substituting default: {}", e);
                None
            }
        }
    }

    /// Resolve for an action.
    ///
    /// Uses the full action bound and the `Attached` wait state; failures
    /// propagate to the caller since an action represents real user intent.
    #[instrument(skip(self), fields(selector = %self.selector))]
    pub async fn resolve_or_fail(&self) -> Result<Arc<dyn ElementHandle>> {
        let options = ResolveOptions {
            state: WaitState::Attached,
            timeout: self.timeouts.action,
            poll: self.timeouts.poll,
        };

        self.driver.resolve(&self.selector, options).await
    }

    /// Read an attribute, `""` when missing or unresolvable
    pub async fn attribute_or_empty(&self, name: &str) -> String {
        match self.try_resolve().await {
            Some(element) => element
                .attribute(name)
                .await
                .ok()
                .flatten()
                .unwrap_or_default(),
            None => String::new(),
        }
    }
}
