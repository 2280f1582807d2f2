//! Checkbox control

use async_trait::async_trait;
use std::sync::Arc;

use crate::controls::base::ControlBase;
use crate::controls::traits::{Control, Toggleable};
use crate::driver::traits::PageDriver;

/// Checkbox wrapper
pub struct CheckBox {
    base: ControlBase,
}

impl CheckBox {
    /// Create a new checkbox wrapper
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

    /// Value of the `aria-hidden` attribute. `""` when unset or missing.
    pub async fn aria_hidden(&self) -> String {
        self.base.attribute_or_empty("aria-hidden").await
    }
}

#[async_trait]
impl Control for CheckBox {
    fn base(&self) -> &ControlBase {
        &self.base
    }
}

#[async_trait]
impl Toggleable for CheckBox {}
