//! Driver layer
//!
//! Trait seams over the external browser-automation collaborator, shared
//! driver-facing types, and an in-memory mock driver for tests.
//!
//! The control layer never depends on a concrete driver; it resolves
//! selectors through [`PageDriver`] and operates on the returned
//! [`ElementHandle`] trait objects.

pub mod mock;
pub mod traits;
pub mod types;

pub use mock::{MockElement, MockNode, MockPage};
pub use traits::{ElementHandle, PageDriver};
pub use types::{Key, Rect, ResolveOptions, Rgb, WaitState};
