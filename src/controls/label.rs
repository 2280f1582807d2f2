//! Label control

use async_trait::async_trait;
use std::sync::Arc;

use crate::controls::base::ControlBase;
use crate::controls::traits::Control;
use crate::driver::traits::PageDriver;
use crate::driver::types::Rgb;

/// Label wrapper
///
/// Text comparison on labels is case-insensitive.
pub struct Label {
    base: ControlBase,
}

impl Label {
    /// Create a new label wrapper
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

    /// Value of the `for` attribute. `""` when unset or missing.
    pub async fn for_attribute(&self) -> String {
        self.base.attribute_or_empty("for").await
    }

    /// Text color from the computed `color` style.
    ///
    /// `None` when the element is missing or the style value is not an
    /// `rgb()`/`rgba()` expression.
    pub async fn text_color(&self) -> Option<Rgb> {
        let element = self.base.try_resolve().await?;
        let value = element.computed_style("color").await.ok().flatten()?;
        Rgb::parse_css(&value)
    }
}

#[async_trait]
impl Control for Label {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    /// Case-insensitive trimmed comparison
    async fn has_correct_text(&self, expected: &str) -> bool {
        self.text()
            .await
            .trim()
            .eq_ignore_ascii_case(expected.trim())
    }
}
