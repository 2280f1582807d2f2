//! Control layer
//!
//! One wrapper type per control kind (button, checkbox, label, radio,
//! text box, text area, list box) over a shared base:
//!
//! - `base`: the `(driver, selector)` pair and the two resolution
//!   primitives (`try_resolve` for reads, `resolve_or_fail` for actions).
//! - `traits`: the uniform [`Control`] contract plus capability traits
//!   composed per kind.
//!
//! The layer's central contract is the read/action asymmetry: read queries
//! resolve with a short bound and turn any failure into a documented default
//! value, while actions resolve with the full bound and fail loudly.

pub mod base;
pub mod traits;

pub mod button;
pub mod checkbox;
pub mod label;
pub mod list_box;
pub mod radio;
pub mod text_area;
pub mod text_box;


pub use base::ControlBase;
pub use button::Button;
pub use checkbox::CheckBox;
pub use label::Label;
pub use list_box::ListBox;
pub use radio::RadioButton;
pub use text_area::TextArea;
pub use text_box::TextBox;
pub use traits::{Control, Selectable, TextEditable, Toggleable};
