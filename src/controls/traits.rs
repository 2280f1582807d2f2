//! Control and capability traits
//!
//! `Control` is the uniform read/action surface every wrapper exposes.
//! Capability traits (`Toggleable`, `TextEditable`, `Selectable`) are
//! composed onto the kinds that support them instead of building an
//! inheritance tree.
//!
//! The contract split runs through every default method here: read queries
//! go through `ControlBase::try_resolve` and return a documented default on
//! any failure; actions go through `ControlBase::resolve_or_fail` and
//! propagate errors.

use async_trait::async_trait;

use crate::controls::base::ControlBase;
use crate::driver::types::{Key, Rect};
use crate::{Error, Result};

/// Uniform contract over one element located by a selector
#[async_trait]
pub trait Control: Send + Sync {
    /// The wrapped `(driver, selector)` pair
    fn base(&self) -> &ControlBase;

    /// Whether the element is currently displayed. `false` when the selector
    /// matches nothing within the read bound.
    async fn is_displayed(&self) -> bool {
        match self.base().try_resolve().await {
            Some(element) => element.is_visible().await.unwrap_or(false),
            None => false,
        }
    }

    /// Whether the element is enabled. `false` when missing.
    async fn is_enabled(&self) -> bool {
        match self.base().try_resolve().await {
            Some(element) => element.is_enabled().await.unwrap_or(false),
            None => false,
        }
    }

    /// Trimmed text content. `""` when missing.
    async fn text(&self) -> String {
        match self.base().try_resolve().await {
            Some(element) => element
                .text()
                .await
                .map(|t| t.trim().to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Value of the `class` attribute. `""` when missing.
    async fn css_class(&self) -> String {
        self.base().attribute_or_empty("class").await
    }

    /// Value of the `aria-label` attribute. `""` when missing.
    async fn aria_label(&self) -> String {
        self.base().attribute_or_empty("aria-label").await
    }

    /// Value of the `title` attribute. `""` when missing.
    async fn tooltip(&self) -> String {
        self.base().attribute_or_empty("title").await
    }

    /// Lower-cased tag name. `""` when missing.
    async fn tag_name(&self) -> String {
        match self.base().try_resolve().await {
            Some(element) => element
                .tag_name()
                .await
                .map(|t| t.to_lowercase())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Bounding box at query time. `Rect::EMPTY` when missing.
    async fn bounds(&self) -> Rect {
        match self.base().try_resolve().await {
            Some(element) => element.bounds().await.unwrap_or(Rect::EMPTY),
            None => Rect::EMPTY,
        }
    }

    /// Arbitrary attribute read. `None` when absent or missing.
    async fn attribute(&self, name: &str) -> Option<String> {
        match self.base().try_resolve().await {
            Some(element) => element.attribute(name).await.ok().flatten(),
            None => None,
        }
    }

    /// Compare the element's trimmed text against `expected`.
    ///
    /// Case-sensitive by default; kinds with a different convention
    /// override. Never errors: a missing element compares as `""`.
    async fn has_correct_text(&self, expected: &str) -> bool {
        self.text().await.trim() == expected.trim()
    }

    /// Click the element
    async fn click(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.click().await
    }

    /// Double-click the element
    async fn double_click(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.double_click().await
    }

    /// Right-click the element
    async fn right_click(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.right_click().await
    }

    /// Hover over the element
    async fn hover(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.hover().await
    }

    /// Focus the element
    async fn focus(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.focus().await
    }

    /// Scroll the element into view
    async fn scroll_into_view(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.scroll_into_view().await
    }
}

/// Capability of checkbox-like controls
#[async_trait]
pub trait Toggleable: Control {
    /// Checked state. `false` when missing.
    async fn is_checked(&self) -> bool {
        match self.base().try_resolve().await {
            Some(element) => element.is_checked().await.unwrap_or(false),
            None => false,
        }
    }

    /// Set the checked state on
    async fn check(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.set_checked(true).await
    }

    /// Set the checked state off
    async fn uncheck(&self) -> Result<()> {
        self.base()
            .resolve_or_fail()
            .await?
            .set_checked(false)
            .await
    }

    /// Flip the checked state
    async fn toggle(&self) -> Result<()> {
        let element = self.base().resolve_or_fail().await?;
        let checked = element.is_checked().await?;
        element.set_checked(!checked).await
    }
}

/// Capability of text-input controls
#[async_trait]
pub trait TextEditable: Control {
    /// Replace the current value with `text`
    async fn enter_text(&self, text: &str) -> Result<()> {
        self.base().resolve_or_fail().await?.fill(text).await
    }

    /// Type `text` after the current value
    async fn append_text(&self, text: &str) -> Result<()> {
        self.base().resolve_or_fail().await?.type_text(text).await
    }

    /// Clear the current value
    async fn clear(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.clear().await
    }

    /// Press Enter with the element focused
    async fn press_enter(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.press(Key::Enter).await
    }

    /// Press Tab with the element focused
    async fn press_tab(&self) -> Result<()> {
        self.base().resolve_or_fail().await?.press(Key::Tab).await
    }

    /// Whether the element carries a `readonly` attribute. `false` when
    /// missing.
    async fn is_read_only(&self) -> bool {
        self.attribute("readonly").await.is_some()
    }

    /// Placeholder text. `""` when unset or missing.
    async fn placeholder(&self) -> String {
        self.base().attribute_or_empty("placeholder").await
    }

    /// Maximum input length, `-1` when unset or missing.
    async fn max_length(&self) -> i64 {
        self.attribute("maxlength")
            .await
            .and_then(|v| v.parse().ok())
            .unwrap_or(-1)
    }
}

/// Capability of list/select controls
#[async_trait]
pub trait Selectable: Control {
    /// Trimmed labels of all options in DOM order. Empty when missing.
    async fn available_options(&self) -> Vec<String> {
        match self.base().try_resolve().await {
            Some(element) => element
                .option_labels()
                .await
                .map(|labels| labels.iter().map(|l| l.trim().to_string()).collect())
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Trimmed label of the currently selected option. `""` when the element
    /// is missing or has no options.
    async fn selected_text(&self) -> String {
        let element = match self.base().try_resolve().await {
            Some(element) => element,
            None => return String::new(),
        };

        let labels = element.option_labels().await.unwrap_or_default();
        match element.selected_index().await.ok().flatten() {
            Some(index) => labels
                .get(index)
                .map(|l| l.trim().to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Whether an option with the given trimmed label exists. `false` when
    /// missing.
    async fn is_option_available(&self, label: &str) -> bool {
        self.available_options()
            .await
            .iter()
            .any(|o| o == label.trim())
    }

    /// Select the option whose trimmed label equals `label`
    async fn select_by_text(&self, label: &str) -> Result<()> {
        self.base()
            .resolve_or_fail()
            .await?
            .select_text(label.trim())
            .await
    }

    /// Select the option at a zero-based `index`.
    ///
    /// The option count is checked first so an out-of-range index fails with
    /// `Error::IndexOutOfRange` instead of letting the driver time out on a
    /// nonexistent option.
    async fn select_by_index(&self, index: usize) -> Result<()> {
        let element = self.base().resolve_or_fail().await?;
        let count = element.option_labels().await?.len();
        if index >= count {
            return Err(Error::index_out_of_range(index, count));
        }
        element.select_index(index).await
    }
}
