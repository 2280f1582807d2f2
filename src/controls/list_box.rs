//! List box control

use async_trait::async_trait;
use std::sync::Arc;

use crate::controls::base::ControlBase;
use crate::controls::traits::{Control, Selectable};
use crate::driver::traits::PageDriver;

/// Native select / list box wrapper
///
/// Option order is DOM order and is significant: index-based selection
/// depends on it.
pub struct ListBox {
    base: ControlBase,
}

impl ListBox {
    /// Create a new list box wrapper
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
impl Control for ListBox {
    fn base(&self) -> &ControlBase {
        &self.base
    }
}

#[async_trait]
impl Selectable for ListBox {}
