//! Menu widgets
//!
//! Every widget embeds a [`Rect`] for placement and hit-testing. The rect is
//! exactly what gets drawn, so a click lands on what the player sees.

use glam::Vec2;

use super::text::BoundedText;
use crate::consts::TEXT_MAX_CHARS;
use crate::sim::Rect;

pub const TEXT_BOX_SIZE: Vec2 = Vec2::new(200.0, 30.0);
pub const BUTTON_SIZE: Vec2 = Vec2::new(100.0, 30.0);
pub const CHECK_BOX_SIZE: f32 = 30.0;

/// Keyboard focus flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    focused: bool,
}

impl Focus {
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// Single-line text entry with a title drawn above it
#[derive(Debug, Clone)]
pub struct TextBox {
    pub rect: Rect,
    pub title: &'static str,
    pub text: BoundedText,
    /// Rendered as asterisks
    pub masked: bool,
    pub focus: Focus,
}

impl TextBox {
    pub fn new(center_x: f32, y: f32, title: &'static str, masked: bool) -> Self {
        Self {
            rect: Rect::centered_x(center_x, y, TEXT_BOX_SIZE.x, TEXT_BOX_SIZE.y),
            title,
            text: BoundedText::new(TEXT_MAX_CHARS),
            masked,
            focus: Focus::default(),
        }
    }

    /// Typed characters only reach the focused box
    pub fn type_char(&mut self, c: char) {
        if self.focus.is_focused() {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focus.is_focused() {
            self.text.pop();
        }
    }

    /// What the box shows
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.text.len())
        } else {
            self.text.as_str().to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub title: &'static str,
    pub focus: Focus,
}

impl Button {
    pub fn new(center_x: f32, y: f32, title: &'static str) -> Self {
        Self {
            rect: Rect::centered_x(center_x, y, BUTTON_SIZE.x, BUTTON_SIZE.y),
            title,
            focus: Focus::default(),
        }
    }
}

/// Square toggle with its title to the right
#[derive(Debug, Clone)]
pub struct CheckBox {
    pub rect: Rect,
    pub title: &'static str,
    pub checked: bool,
    pub focus: Focus,
}

impl CheckBox {
    pub fn new(center_x: f32, y: f32, title: &'static str) -> Self {
        Self {
            rect: Rect::centered_x(center_x, y, CHECK_BOX_SIZE, CHECK_BOX_SIZE),
            title,
            checked: false,
            focus: Focus::default(),
        }
    }
}

/// How a label is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Title,
    Guide,
}

/// Static text centred on `center_x`
#[derive(Debug, Clone)]
pub struct Label {
    pub text: &'static str,
    pub center_x: f32,
    pub y: f32,
    pub style: LabelStyle,
}

impl Label {
    pub fn new(text: &'static str, center_x: f32, y: f32, style: LabelStyle) -> Self {
        Self {
            text,
            center_x,
            y,
            style,
        }
    }
}

/// Checkboxes of which at most one is checked, each tied to a value
#[derive(Debug, Clone)]
pub struct RadioGroup<T> {
    pub options: Vec<(T, CheckBox)>,
}

impl<T: Copy + PartialEq> RadioGroup<T> {
    pub fn new(options: Vec<(T, CheckBox)>) -> Self {
        Self { options }
    }

    pub fn selected(&self) -> Option<T> {
        self.options
            .iter()
            .find(|(_, b)| b.checked)
            .map(|(value, _)| *value)
    }

    /// Check `index` and clear the rest
    pub fn select(&mut self, index: usize) {
        for (i, (_, b)) in self.options.iter_mut().enumerate() {
            b.checked = i == index;
        }
    }

    pub fn select_value(&mut self, value: T) {
        if let Some(index) = self.options.iter().position(|(v, _)| *v == value) {
            self.select(index);
        }
    }

    /// Flip `index`; if that checked it, clear the rest. Unchecking may
    /// leave the group empty.
    pub fn toggle(&mut self, index: usize) {
        let Some((_, b)) = self.options.get_mut(index) else {
            return;
        };
        b.checked = !b.checked;
        if b.checked {
            self.select(index);
        }
    }

    /// Index of the option under `point`
    pub fn hit(&self, point: Vec2) -> Option<usize> {
        self.options.iter().position(|(_, b)| b.rect.contains_point(point))
    }

    pub fn boxes(&self) -> impl Iterator<Item = &CheckBox> {
        self.options.iter().map(|(_, b)| b)
    }
}

/// Slot after `current` in a focus ring, wrapping; the first slot when
/// nothing is focused
pub fn next_in_ring<T: Copy + PartialEq>(ring: &[T], current: Option<T>) -> Option<T> {
    let next = match current.and_then(|c| ring.iter().position(|s| *s == c)) {
        Some(i) => (i + 1) % ring.len(),
        None => 0,
    };
    ring.get(next).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> RadioGroup<u8> {
        RadioGroup::new(vec![
            (1, CheckBox::new(340.0, 300.0, "ONE")),
            (2, CheckBox::new(640.0, 300.0, "TWO")),
            (3, CheckBox::new(940.0, 300.0, "THREE")),
        ])
    }

    #[test]
    fn test_text_box_needs_focus() {
        let mut tb = TextBox::new(640.0, 300.0, "USERNAME", false);
        tb.type_char('a');
        assert!(tb.text.is_empty());
        tb.focus.set(true);
        tb.type_char('a');
        tb.type_char('b');
        tb.backspace();
        assert_eq!(tb.display(), "a");
    }

    #[test]
    fn test_masked_display() {
        let mut tb = TextBox::new(640.0, 400.0, "PASSWORD", true);
        tb.focus.set(true);
        for c in "hunter2".chars() {
            tb.type_char(c);
        }
        assert_eq!(tb.display(), "*******");
        assert_eq!(tb.text.as_str(), "hunter2");
    }

    #[test]
    fn test_text_box_cap() {
        let mut tb = TextBox::new(640.0, 300.0, "USERNAME", false);
        tb.focus.set(true);
        for _ in 0..150 {
            tb.type_char('x');
        }
        assert_eq!(tb.text.len(), TEXT_MAX_CHARS);
    }

    #[test]
    fn test_hit_rect_matches_drawn_rect() {
        let cb = CheckBox::new(640.0, 300.0, "SIN");
        assert_eq!(cb.rect, Rect::new(625.0, 300.0, 30.0, 30.0));
        let button = Button::new(640.0, 675.0, "Start");
        assert!(button.rect.contains_point(Vec2::new(595.0, 680.0)));
        assert!(!button.rect.contains_point(Vec2::new(700.0, 680.0)));
    }

    #[test]
    fn test_radio_toggle_and_select() {
        let mut g = group();
        assert_eq!(g.selected(), None);
        g.toggle(1);
        assert_eq!(g.selected(), Some(2));
        g.toggle(0);
        assert_eq!(g.selected(), Some(1));
        assert_eq!(g.boxes().filter(|b| b.checked).count(), 1);
        g.toggle(0);
        assert_eq!(g.selected(), None);
        g.select_value(3);
        assert_eq!(g.selected(), Some(3));
    }

    #[test]
    fn test_radio_hit() {
        let g = group();
        assert_eq!(g.hit(Vec2::new(940.0, 310.0)), Some(2));
        assert_eq!(g.hit(Vec2::new(500.0, 310.0)), None);
    }

    #[test]
    fn test_next_in_ring_wraps() {
        let ring = [10, 20, 30];
        assert_eq!(next_in_ring(&ring, Some(10)), Some(20));
        assert_eq!(next_in_ring(&ring, Some(30)), Some(10));
        assert_eq!(next_in_ring(&ring, None), Some(10));
        assert_eq!(next_in_ring::<u8>(&[], None), None);
    }
}
