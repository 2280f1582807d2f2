//! Button control

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::controls::base::ControlBase;
use crate::controls::traits::Control;
use crate::driver::traits::PageDriver;
use crate::Result;

/// Button wrapper
///
/// Supports the uniform read surface plus click variants and form
/// submission. Text is read from the element's content.
pub struct Button {
    base: ControlBase,
}

impl Button {
    /// Create a new button wrapper
    pub fn new(driver: Arc<dyn PageDriver>, selector: impl Into<String>) -> Self {
        Self {
            base: ControlBase::new(driver, selector),
        }
    }

    /// Override the wait bounds
    pub fn with_timeouts(mut self, timeouts: crate::config::Timeouts) -> Self {
        self.base = self.base.with_timeouts(timeouts);
        self
    }

    /// Submit the form the button belongs to
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<()> {
        debug!("Submitting via button: {}", self.base.selector());
        self.base.resolve_or_fail().await?.submit().await
    }
}

#[async_trait]
impl Control for Button {
    fn base(&self) -> &ControlBase {
        &self.base
    }
}
