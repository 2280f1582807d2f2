//! Driver traits
//!
//! Abstract interfaces over the external browser-automation collaborator.
//! The control layer only ever talks to these traits; the live driver
//! (CDP, WebDriver, or an in-memory mock) plugs in behind them.

use async_trait::async_trait;
use std::sync::Arc;

use crate::driver::types::{Key, Rect, ResolveOptions};
use crate::Result;

/// Page driver trait
///
/// Represents one page context owned by the caller. The only responsibility
/// exposed here is selector resolution with a bounded wait; session and
/// navigation lifecycle stay with the caller.
#[async_trait]
pub trait PageDriver: Send + Sync + std::fmt::Debug {
    /// Resolve a selector to a live element handle.
    ///
    /// Waits until the element reaches the requested state or the bound in
    /// `options` elapses. Fails with `Error::ElementNotFound` or
    /// `Error::Timeout`; handles are resolved fresh per call and carry no
    /// persistent identity.
    async fn resolve(
        &self,
        selector: &str,
        options: ResolveOptions,
    ) -> Result<Arc<dyn ElementHandle>>;
}

/// Element handle trait
///
/// One resolved DOM node. Read operations report current state; action
/// operations simulate user input and may be rejected by the page (for
/// example on a disabled element).
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Handle ID
    fn id(&self) -> &str;

    /// Text content of the element
    async fn text(&self) -> Result<String>;

    /// Current value of an input-like element
    async fn input_value(&self) -> Result<String>;

    /// Get an attribute, `None` when absent
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// Get a computed style property, `None` when absent
    async fn computed_style(&self, property: &str) -> Result<Option<String>>;

    /// Tag name of the element
    async fn tag_name(&self) -> Result<String>;

    /// Bounding box at query time
    async fn bounds(&self) -> Result<Rect>;

    /// Whether the element is visible
    async fn is_visible(&self) -> Result<bool>;

    /// Whether the element is enabled
    async fn is_enabled(&self) -> Result<bool>;

    /// Whether a checkbox/radio element is checked
    async fn is_checked(&self) -> Result<bool>;

    /// Click the element
    async fn click(&self) -> Result<()>;

    /// Double-click the element
    async fn double_click(&self) -> Result<()>;

    /// Right-click the element
    async fn right_click(&self) -> Result<()>;

    /// Hover over the element
    async fn hover(&self) -> Result<()>;

    /// Focus the element
    async fn focus(&self) -> Result<()>;

    /// Scroll the element into view
    async fn scroll_into_view(&self) -> Result<()>;

    /// Submit the enclosing form
    async fn submit(&self) -> Result<()>;

    /// Replace the element's value with `text`
    async fn fill(&self, text: &str) -> Result<()>;

    /// Type `text` at the end of the element's current value
    async fn type_text(&self, text: &str) -> Result<()>;

    /// Clear the element's value
    async fn clear(&self) -> Result<()>;

    /// Press a key with the element focused
    async fn press(&self, key: Key) -> Result<()>;

    /// Set the checked state of a checkbox/radio element
    async fn set_checked(&self, checked: bool) -> Result<()>;

    /// Select the option at `index` in a select element
    async fn select_index(&self, index: usize) -> Result<()>;

    /// Select the option whose trimmed label equals `label`
    async fn select_text(&self, label: &str) -> Result<()>;

    /// Labels of all option children, in DOM order
    async fn option_labels(&self) -> Result<Vec<String>>;

    /// Index of the currently selected option, `None` when the element has
    /// no options
    async fn selected_index(&self) -> Result<Option<usize>>;
}
