//! Main menu: player count, ball path, difficulty and backend

use glam::Vec2;

use super::MenuInput;
use super::widgets::{Button, CheckBox, Focus, Label, LabelStyle, RadioGroup, next_in_ring};
use crate::sim::{BackendKind, Difficulty, Field, GameMode, PlayerCount, TrajectoryMode};

/// A focusable widget, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSlot {
    Players(usize),
    Path(usize),
    Difficulty(usize),
    Backend(usize),
    Start,
}

const RING: [MenuSlot; 11] = [
    MenuSlot::Players(0),
    MenuSlot::Players(1),
    MenuSlot::Path(0),
    MenuSlot::Path(1),
    MenuSlot::Path(2),
    MenuSlot::Difficulty(0),
    MenuSlot::Difficulty(1),
    MenuSlot::Difficulty(2),
    MenuSlot::Backend(0),
    MenuSlot::Backend(1),
    MenuSlot::Start,
];

#[derive(Debug, Clone)]
pub struct MainMenu {
    pub labels: Vec<Label>,
    pub players: RadioGroup<PlayerCount>,
    pub path: RadioGroup<TrajectoryMode>,
    pub difficulty: RadioGroup<Difficulty>,
    pub backend: RadioGroup<BackendKind>,
    pub start: Button,
}

impl MainMenu {
    /// Menu with `defaults` pre-checked and focus on the first box
    pub fn new(field: Field, defaults: GameMode) -> Self {
        let c = field.center();
        let labels = vec![
            Label::new("MAIN MENU", c.x, c.y - 375.0, LabelStyle::Title),
            Label::new("Choose the game mode:", c.x, c.y - 325.0, LabelStyle::Guide),
            Label::new("Choose the ball's path:", c.x, c.y - 175.0, LabelStyle::Guide),
            Label::new("Choose game's difficulty:", c.x, c.y - 25.0, LabelStyle::Guide),
            Label::new("Choose the backend for the hot paths:", c.x, c.y + 125.0, LabelStyle::Guide),
        ];

        let players = RadioGroup::new(vec![
            (PlayerCount::One, CheckBox::new(c.x - 200.0, c.y - 250.0, "SINGLEPLAYER")),
            (PlayerCount::Two, CheckBox::new(c.x + 200.0, c.y - 250.0, "MULTIPLAYER")),
        ]);
        let path = RadioGroup::new(
            TrajectoryMode::ALL
                .iter()
                .zip([-300.0, 0.0, 300.0])
                .map(|(&mode, dx)| (mode, CheckBox::new(c.x + dx, c.y - 100.0, mode_title(mode))))
                .collect(),
        );
        let difficulty = RadioGroup::new(
            Difficulty::ALL
                .iter()
                .zip([-300.0, 0.0, 300.0])
                .map(|(&d, dx)| (d, CheckBox::new(c.x + dx, c.y + 50.0, difficulty_title(d))))
                .collect(),
        );
        let backend = RadioGroup::new(
            BackendKind::ALL
                .iter()
                .zip([-200.0, 200.0])
                .map(|(&kind, dx)| (kind, CheckBox::new(c.x + dx, c.y + 200.0, kind.label())))
                .collect(),
        );

        let mut menu = Self {
            labels,
            players,
            path,
            difficulty,
            backend,
            start: Button::new(c.x, c.y + 275.0, "Start"),
        };
        menu.players.select_value(defaults.players);
        menu.path.select_value(defaults.path);
        menu.difficulty.select_value(defaults.difficulty);
        menu.backend.select_value(defaults.backend);
        menu.focus_only(MenuSlot::Players(0));
        menu
    }

    fn focus_mut(&mut self, slot: MenuSlot) -> Option<&mut Focus> {
        match slot {
            MenuSlot::Players(i) => self.players.options.get_mut(i).map(|(_, b)| &mut b.focus),
            MenuSlot::Path(i) => self.path.options.get_mut(i).map(|(_, b)| &mut b.focus),
            MenuSlot::Difficulty(i) => self.difficulty.options.get_mut(i).map(|(_, b)| &mut b.focus),
            MenuSlot::Backend(i) => self.backend.options.get_mut(i).map(|(_, b)| &mut b.focus),
            MenuSlot::Start => Some(&mut self.start.focus),
        }
    }

    pub fn focused(&self) -> Option<MenuSlot> {
        RING.into_iter().find(|&slot| {
            let focus = match slot {
                MenuSlot::Players(i) => self.players.options.get(i).map(|(_, b)| b.focus),
                MenuSlot::Path(i) => self.path.options.get(i).map(|(_, b)| b.focus),
                MenuSlot::Difficulty(i) => self.difficulty.options.get(i).map(|(_, b)| b.focus),
                MenuSlot::Backend(i) => self.backend.options.get(i).map(|(_, b)| b.focus),
                MenuSlot::Start => Some(self.start.focus),
            };
            focus.is_some_and(|f| f.is_focused())
        })
    }

    pub fn focus_only(&mut self, target: MenuSlot) {
        for slot in RING {
            if let Some(focus) = self.focus_mut(slot) {
                focus.set(slot == target);
            }
        }
    }

    /// The full selection, if every group has one
    pub fn selection(&self) -> Option<GameMode> {
        Some(GameMode {
            players: self.players.selected()?,
            path: self.path.selected()?,
            difficulty: self.difficulty.selected()?,
            backend: self.backend.selected()?,
        })
    }

    /// Feed one frame of input. Returns the chosen mode once Start is
    /// activated with every group filled in.
    pub fn handle(&mut self, input: &MenuInput) -> Option<GameMode> {
        if input.tab {
            if let Some(next) = next_in_ring(&RING, self.focused()) {
                self.focus_only(next);
            }
        }

        let mut chosen = None;
        if input.enter {
            match self.focused() {
                Some(MenuSlot::Players(i)) => self.players.toggle(i),
                Some(MenuSlot::Path(i)) => self.path.toggle(i),
                Some(MenuSlot::Difficulty(i)) => self.difficulty.toggle(i),
                Some(MenuSlot::Backend(i)) => self.backend.toggle(i),
                Some(MenuSlot::Start) => chosen = self.try_start(),
                None => {}
            }
        }

        if let Some(point) = input.click {
            if let Some(mode) = self.click(point) {
                chosen = Some(mode);
            }
        }

        chosen
    }

    /// A click focuses and checks the box under it, or presses Start
    fn click(&mut self, point: Vec2) -> Option<GameMode> {
        if self.start.rect.contains_point(point) {
            self.focus_only(MenuSlot::Start);
            return self.try_start();
        }

        let slot = if let Some(i) = self.players.hit(point) {
            self.players.select(i);
            MenuSlot::Players(i)
        } else if let Some(i) = self.path.hit(point) {
            self.path.select(i);
            MenuSlot::Path(i)
        } else if let Some(i) = self.difficulty.hit(point) {
            self.difficulty.select(i);
            MenuSlot::Difficulty(i)
        } else if let Some(i) = self.backend.hit(point) {
            self.backend.select(i);
            MenuSlot::Backend(i)
        } else {
            return None;
        };
        self.focus_only(slot);
        None
    }

    fn try_start(&self) -> Option<GameMode> {
        let mode = self.selection();
        match mode {
            Some(mode) => log::info!(
                "Starting: {:?} player(s), {} path, {} difficulty, {} backend",
                mode.players,
                mode.path.label(),
                mode.difficulty.label(),
                mode.backend.label()
            ),
            None => log::debug!("Start pressed with an incomplete selection"),
        }
        mode
    }

    pub fn checkboxes(&self) -> impl Iterator<Item = &CheckBox> {
        self.players
            .boxes()
            .chain(self.path.boxes())
            .chain(self.difficulty.boxes())
            .chain(self.backend.boxes())
    }
}

fn mode_title(mode: TrajectoryMode) -> &'static str {
    match mode {
        TrajectoryMode::Linear => "REGULAR",
        TrajectoryMode::SinModulated => "SIN",
        TrajectoryMode::AttractorCurve => "CURVE",
    }
}

fn difficulty_title(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "EASY",
        Difficulty::Medium => "MEDIUM",
        Difficulty::Hard => "HARD",
    }
}
