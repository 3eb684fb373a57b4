//! Core value types shared by the widget tree and its drivers.

pub mod event;

pub use event::{Buttons, InputEvent, Key, KeyCode, KeyModifiers, Mouse, MouseKind};
