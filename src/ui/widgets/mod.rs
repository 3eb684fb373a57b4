//! Stock widgets: leaves (label, button, field, checkbox, radio, list) and containers (box,
//! grid, split, scroll, pick).

pub mod boxed;
pub mod button;
pub mod checkbox;
pub mod field;
pub mod grid;
pub mod label;
pub mod list;
pub mod pick;
pub mod radio;
pub mod scroll;
pub mod split;

pub use boxed::BoxUi;
pub use button::Button;
pub use checkbox::Checkbox;
pub use field::Field;
pub use grid::{Grid, Halign, Valign};
pub use label::Label;
pub use list::{List, ListValue};
pub use pick::Pick;
pub use radio::{Radio, RadioGroup};
pub use scroll::Scroll;
pub use split::{equal_split, Axis, Split, SplitFn};
