//! Pre-match screens
//!
//! Menus are plain state machines fed a [`MenuInput`] once per frame, so
//! they run the same way under macroquad and in tests.

mod login;
mod main_menu;
mod text;
mod widgets;

use glam::Vec2;

pub use login::{LoginField, LoginMenu, LoginScreen};
pub use main_menu::{MainMenu, MenuSlot};
pub use text::BoundedText;
pub use widgets::{Button, CheckBox, Focus, Label, LabelStyle, RadioGroup, TextBox};

/// Menu-relevant input gathered for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuInput {
    /// Printable characters typed this frame, in order
    pub chars: Vec<char>,
    pub backspace: bool,
    pub tab: bool,
    pub enter: bool,
    /// Left click position, if the button went down this frame
    pub click: Option<Vec2>,
}
