//! Text box control

use async_trait::async_trait;
use std::sync::Arc;

use crate::controls::base::ControlBase;
use crate::controls::traits::{Control, TextEditable};
use crate::driver::traits::PageDriver;

/// Single-line text input wrapper
pub struct TextBox {
    base: ControlBase,
}

impl TextBox {
    /// Create a new text box wrapper
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
}

#[async_trait]
impl Control for TextBox {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    /// The current input value, untrimmed so entered text round-trips
    /// exactly. `""` when missing.
    async fn text(&self) -> String {
        match self.base.try_resolve().await {
            Some(element) => element.input_value().await.unwrap_or_default(),
            None => String::new(),
        }
    }
}

#[async_trait]
impl TextEditable for TextBox {}
