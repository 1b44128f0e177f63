//! Login screen

use glam::Vec2;
use rand::Rng;

use super::MenuInput;
use super::widgets::{Button, Label, LabelStyle, TextBox, next_in_ring};
use crate::bench::BenchmarkContext;
use crate::sim::{Ball, Field, TrajectoryBackend};

/// Focusable widgets, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
    Login,
}

const RING: [LoginField; 3] = [LoginField::Username, LoginField::Password, LoginField::Login];

/// Username/password form
#[derive(Debug, Clone)]
pub struct LoginMenu {
    pub title: Label,
    pub username: TextBox,
    pub password: TextBox,
    pub login: Button,
}

impl LoginMenu {
    pub fn new(field: Field) -> Self {
        let center = field.center();
        let mut menu = Self {
            title: Label::new("LOGIN MENU", center.x, center.y - 200.0, LabelStyle::Title),
            username: TextBox::new(center.x, center.y - 100.0, "USERNAME", false),
            password: TextBox::new(center.x, center.y, "PASSWORD", true),
            login: Button::new(center.x, center.y + 100.0, "Login"),
        };
        menu.focus_only(LoginField::Username);
        menu
    }

    pub fn focused(&self) -> Option<LoginField> {
        RING.into_iter().find(|f| match f {
            LoginField::Username => self.username.focus.is_focused(),
            LoginField::Password => self.password.focus.is_focused(),
            LoginField::Login => self.login.focus.is_focused(),
        })
    }

    pub fn focus_only(&mut self, field: LoginField) {
        self.username.focus.set(field == LoginField::Username);
        self.password.focus.set(field == LoginField::Password);
        self.login.focus.set(field == LoginField::Login);
    }

    /// Feed one frame of input. Returns the username once the form has been
    /// submitted with both fields filled in.
    pub fn handle(&mut self, input: &MenuInput) -> Option<String> {
        for &c in &input.chars {
            self.username.type_char(c);
            self.password.type_char(c);
        }
        if input.backspace {
            self.username.backspace();
            self.password.backspace();
        }

        if input.tab {
            if let Some(next) = next_in_ring(&RING, self.focused()) {
                self.focus_only(next);
            }
        }

        let mut submitted = false;
        if input.enter {
            if self.focused() == Some(LoginField::Username) {
                self.focus_only(LoginField::Password);
            } else {
                submitted = self.try_login();
            }
        }

        if let Some(point) = input.click {
            submitted |= self.click(point);
        }

        submitted.then(|| self.username.text.as_str().to_string())
    }

    fn click(&mut self, point: Vec2) -> bool {
        if self.login.rect.contains_point(point) {
            self.try_login()
        } else if self.username.rect.contains_point(point) {
            self.focus_only(LoginField::Username);
            false
        } else if self.password.rect.contains_point(point) {
            self.focus_only(LoginField::Password);
            false
        } else {
            false
        }
    }

    /// Accepts any non-empty pair; otherwise sends the player back to the
    /// username box
    fn try_login(&mut self) -> bool {
        if !self.username.text.is_empty() && !self.password.text.is_empty() {
            log::info!("Logged in as {}", self.username.text.as_str());
            true
        } else {
            log::debug!("Login rejected: empty username or password");
            self.focus_only(LoginField::Username);
            false
        }
    }
}

/// Login form over two bouncing balls
#[derive(Debug, Clone)]
pub struct LoginScreen {
    pub menu: LoginMenu,
    pub balls: [Ball; 2],
}

impl LoginScreen {
    pub fn new<R: Rng + ?Sized>(field: Field, rng: &mut R) -> Self {
        Self {
            menu: LoginMenu::new(field),
            balls: [Ball::decorative(field, rng), Ball::decorative(field, rng)],
        }
    }

    /// Move the background balls one tick; they bounce off every wall
    pub fn animate<R: Rng + ?Sized>(
        &mut self,
        backend: &dyn TrajectoryBackend,
        bench: &mut BenchmarkContext,
        rng: &mut R,
    ) {
        for ball in &mut self.balls {
            ball.update(backend, bench, rng, None);
        }
    }
}
