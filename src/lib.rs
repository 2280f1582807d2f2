//! Veneer-Oxide: failure-tolerant UI control wrappers
//!
//! This library wraps individual UI controls (button, checkbox, label, text
//! box, text area, list box, radio button) located by a selector on a page
//! owned by a pluggable browser-automation driver.
//!
//! The central contract is the read/action asymmetry:
//!
//! - **Read queries never fail.** A selector matching nothing resolves
//!   within a short bounded wait and the query returns its documented
//!   default (empty string, `false`, empty rectangle, `-1`, empty list).
//! - **Actions fail loudly.** They resolve with the driver's full default
//!   bound and propagate resolution failures, page rejections and argument
//!   validation errors to the caller.
//!
//! Session and page lifecycle stay with the caller; the library only talks
//! to the [`driver::PageDriver`] trait seam.

pub mod config;
pub mod error;

pub mod controls;
pub mod driver;

// Re-exports
pub use config::{Config, Timeouts};
pub use controls::{
    Button, CheckBox, Control, Label, ListBox, RadioButton, Selectable, TextArea, TextBox,
    TextEditable, Toggleable,
};
pub use driver::{ElementHandle, Key, PageDriver, Rect, ResolveOptions, Rgb, WaitState};
pub use error::{Error, Result};

/// Veneer-Oxide library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
