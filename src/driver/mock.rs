//! Mock driver implementation for testing
//!
//! An in-memory page with mutable node state, so control behavior is
//! observable in tests without a live browser. Nodes are keyed by the
//! selector that resolves them.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::driver::traits::{ElementHandle, PageDriver};
use crate::driver::types::{Key, Rect, ResolveOptions, WaitState};
use crate::{Error, Result};

/// State of one mock DOM node
#[derive(Debug, Clone)]
pub struct MockNode {
    /// Tag name
    pub tag: String,
    /// Text content
    pub text: String,
    /// Input value
    pub value: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// Computed style properties
    pub styles: HashMap<String, String>,
    /// Option labels (select elements)
    pub options: Vec<String>,
    /// Selected option index
    pub selected: Option<usize>,
    /// Checked state (checkbox/radio)
    pub checked: bool,
    /// Visibility flag
    pub visible: bool,
    /// Enabled flag
    pub enabled: bool,
    /// Bounding box
    pub bounds: Rect,
    /// Keys pressed on this node, in order
    pub pressed_keys: Vec<Key>,
    /// Whether the enclosing form was submitted through this node
    pub submitted: bool,
    /// Number of clicks received (single, double and right clicks each
    /// count once)
    pub click_count: u32,
}

impl MockNode {
    /// Create a new node with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: String::new(),
            value: String::new(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            options: Vec::new(),
            selected: None,
            checked: false,
            visible: true,
            enabled: true,
            bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
            pressed_keys: Vec::new(),
            submitted: false,
            click_count: 0,
        }
    }

    /// Set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set input value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a computed style property
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Set option labels. A fresh native select reports its first option as
    /// selected unless a selection was set explicitly.
    pub fn with_options(mut self, options: Vec<&str>) -> Self {
        self.options = options.into_iter().map(String::from).collect();
        if self.selected.is_none() && !self.options.is_empty() {
            self.selected = Some(0);
        }
        self
    }

    /// Set the selected option index
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// Set the checked state
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the bounding box
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Mark the node as hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Mark the node as disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn is_toggle_input(&self) -> bool {
        self.tag == "input"
            && matches!(
                self.attributes.get("type").map(String::as_str),
                Some("checkbox") | Some("radio")
            )
    }
}

/// Mock page driver
///
/// Holds nodes keyed by selector. Resolution polls until the node is present
/// (and visible, when requested) or the bound elapses, mirroring how a real
/// driver waits on a locator.
#[derive(Debug, Default)]
pub struct MockPage {
    nodes: Arc<RwLock<HashMap<String, Arc<RwLock<MockNode>>>>>,
    focused: Arc<RwLock<Option<String>>>,
}

impl MockPage {
    /// Create an empty mock page
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under a selector
    pub async fn insert(&self, selector: impl Into<String>, node: MockNode) {
        self.nodes
            .write()
            .await
            .insert(selector.into(), Arc::new(RwLock::new(node)));
    }

    /// Remove a node (simulates detachment)
    pub async fn remove(&self, selector: &str) {
        self.nodes.write().await.remove(selector);
    }

    /// Snapshot of a node's current state, for assertions
    pub async fn node(&self, selector: &str) -> Option<MockNode> {
        let nodes = self.nodes.read().await;
        match nodes.get(selector) {
            Some(node) => Some(node.read().await.clone()),
            None => None,
        }
    }

    /// Selector of the currently focused node, if any
    pub async fn focused(&self) -> Option<String> {
        self.focused.read().await.clone()
    }
}

#[async_trait]
impl PageDriver for MockPage {
    async fn resolve(
        &self,
        selector: &str,
        options: ResolveOptions,
    ) -> Result<Arc<dyn ElementHandle>> {
        let start = std::time::Instant::now();

        loop {
            {
                let nodes = self.nodes.read().await;
                if let Some(node) = nodes.get(selector) {
                    let visible = node.read().await.visible;
                    if options.state == WaitState::Attached || visible {
                        return Ok(Arc::new(MockElement {
                            id: Uuid::new_v4().to_string(),
                            selector: selector.to_string(),
                            node: node.clone(),
                            focused: self.focused.clone(),
                        }));
                    }
                }
            }

            if start.elapsed() >= options.timeout {
                debug!(selector, state = ?options.state, "mock resolution timed out");
                return Err(Error::timeout(format!(
                    "Element did not reach state {:?} within {}ms: {}",
                    options.state,
                    options.timeout.as_millis(),
                    selector
                )));
            }

            tokio::time::sleep(options.poll).await;
        }
    }
}

/// Handle over one mock node
pub struct MockElement {
    id: String,
    selector: String,
    node: Arc<RwLock<MockNode>>,
    focused: Arc<RwLock<Option<String>>>,
}

impl MockElement {
    async fn ensure_enabled(&self) -> Result<()> {
        if self.node.read().await.enabled {
            Ok(())
        } else {
            Err(Error::action_failed(format!(
                "Element is disabled: {}",
                self.selector
            )))
        }
    }

    async fn ensure_writable(&self) -> Result<()> {
        self.ensure_enabled().await?;
        if self.node.read().await.attributes.contains_key("readonly") {
            return Err(Error::action_failed(format!(
                "Element is read-only: {}",
                self.selector
            )));
        }
        Ok(())
    }

    async fn take_focus(&self) {
        *self.focused.write().await = Some(self.selector.clone());
    }
}

#[async_trait]
impl ElementHandle for MockElement {
    fn id(&self) -> &str {
        &self.id
    }

    async fn text(&self) -> Result<String> {
        Ok(self.node.read().await.text.clone())
    }

    async fn input_value(&self) -> Result<String> {
        Ok(self.node.read().await.value.clone())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.node.read().await.attributes.get(name).cloned())
    }

    async fn computed_style(&self, property: &str) -> Result<Option<String>> {
        Ok(self.node.read().await.styles.get(property).cloned())
    }

    async fn tag_name(&self) -> Result<String> {
        Ok(self.node.read().await.tag.clone())
    }

    async fn bounds(&self) -> Result<Rect> {
        let node = self.node.read().await;
        if node.visible {
            Ok(node.bounds)
        } else {
            Ok(Rect::EMPTY)
        }
    }

    async fn is_visible(&self) -> Result<bool> {
        Ok(self.node.read().await.visible)
    }

    async fn is_enabled(&self) -> Result<bool> {
        Ok(self.node.read().await.enabled)
    }

    async fn is_checked(&self) -> Result<bool> {
        Ok(self.node.read().await.checked)
    }

    async fn click(&self) -> Result<()> {
        self.ensure_enabled().await?;
        {
            let mut node = self.node.write().await;
            node.click_count += 1;
            if node.is_toggle_input() {
                let is_radio = node.attributes.get("type").map(String::as_str) == Some("radio");
                node.checked = if is_radio { true } else { !node.checked };
            }
        }
        self.take_focus().await;
        Ok(())
    }

    async fn double_click(&self) -> Result<()> {
        self.ensure_enabled().await?;
        self.node.write().await.click_count += 1;
        self.take_focus().await;
        Ok(())
    }

    async fn right_click(&self) -> Result<()> {
        self.ensure_enabled().await?;
        self.node.write().await.click_count += 1;
        Ok(())
    }

    async fn hover(&self) -> Result<()> {
        Ok(())
    }

    async fn focus(&self) -> Result<()> {
        self.take_focus().await;
        Ok(())
    }

    async fn scroll_into_view(&self) -> Result<()> {
        Ok(())
    }

    async fn submit(&self) -> Result<()> {
        self.ensure_enabled().await?;
        self.node.write().await.submitted = true;
        Ok(())
    }

    async fn fill(&self, text: &str) -> Result<()> {
        self.ensure_writable().await?;
        self.node.write().await.value = text.to_string();
        self.take_focus().await;
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<()> {
        self.ensure_writable().await?;
        self.node.write().await.value.push_str(text);
        self.take_focus().await;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.ensure_writable().await?;
        self.node.write().await.value.clear();
        Ok(())
    }

    async fn press(&self, key: Key) -> Result<()> {
        self.ensure_enabled().await?;
        self.node.write().await.pressed_keys.push(key);
        if key == Key::Tab {
            // Tab moves focus off the element
            *self.focused.write().await = None;
        }
        Ok(())
    }

    async fn set_checked(&self, checked: bool) -> Result<()> {
        self.ensure_enabled().await?;
        self.node.write().await.checked = checked;
        Ok(())
    }

    async fn select_index(&self, index: usize) -> Result<()> {
        self.ensure_enabled().await?;
        let mut node = self.node.write().await;
        if index >= node.options.len() {
            return Err(Error::action_failed(format!(
                "No option at index {} in {}",
                index, self.selector
            )));
        }
        node.selected = Some(index);
        Ok(())
    }

    async fn select_text(&self, label: &str) -> Result<()> {
        self.ensure_enabled().await?;
        let mut node = self.node.write().await;
        match node.options.iter().position(|o| o.trim() == label) {
            Some(index) => {
                node.selected = Some(index);
                Ok(())
            }
            None => Err(Error::action_failed(format!(
                "No option labelled '{}' in {}",
                label, self.selector
            ))),
        }
    }

    async fn option_labels(&self) -> Result<Vec<String>> {
        Ok(self.node.read().await.options.clone())
    }

    async fn selected_index(&self) -> Result<Option<usize>> {
        let node = self.node.read().await;
        if node.options.is_empty() {
            Ok(None)
        } else {
            Ok(node.selected)
        }
    }
}
