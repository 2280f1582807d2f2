//! Radio button control

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::controls::base::ControlBase;
use crate::controls::traits::Control;
use crate::driver::traits::PageDriver;
use crate::Result;

/// Radio button wrapper
///
/// Exposes selection only: a user can check a radio button but cannot
/// uncheck it directly, so there is no toggle surface.
pub struct RadioButton {
    base: ControlBase,
}

impl RadioButton {
    /// Create a new radio button wrapper
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

    /// Select this radio button
    #[instrument(skip(self))]
    pub async fn select(&self) -> Result<()> {
        self.base.resolve_or_fail().await?.set_checked(true).await
    }

    /// Whether this radio button is selected. `false` when missing.
    pub async fn is_selected(&self) -> bool {
        match self.base.try_resolve().await {
            Some(element) => element.is_checked().await.unwrap_or(false),
            None => false,
        }
    }

    /// Value of the `value` attribute. `""` when unset or missing.
    pub async fn value(&self) -> String {
        self.base.attribute_or_empty("value").await
    }

    /// Radio group name from the `name` attribute. `""` when unset or
    /// missing.
    pub async fn group_name(&self) -> String {
        self.base.attribute_or_empty("name").await
    }
}

#[async_trait]
impl Control for RadioButton {
    fn base(&self) -> &ControlBase {
        &self.base
    }
}
