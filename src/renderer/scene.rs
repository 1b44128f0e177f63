//! Frame composition for each screen

use glam::Vec2;

use super::palette::*;
use super::{Canvas, Rgba};
use crate::bench::BenchmarkContext;
use crate::consts::{ACCENT_RADIUS, ACCENT_STEP, BALL_SEGMENTS, BALL_SPIN};
use crate::sim::{Ball, Field, MatchState, Paddle, Scoreboard, TrajectoryBackend};
use crate::ui::{Button, CheckBox, Label, LabelStyle, LoginScreen, MainMenu, TextBox};

const TEXT_SIZE: f32 = 20.0;
const OUTLINE: f32 = 1.0;

/// One full match frame
pub fn draw_match(
    canvas: &mut dyn Canvas,
    state: &MatchState,
    backend: &dyn TrajectoryBackend,
    bench: &mut BenchmarkContext,
) {
    canvas.clear(BACKGROUND);
    draw_center_accent(canvas, state.field, backend, bench);
    draw_ball(canvas, &state.ball, backend, bench);
    draw_paddle(canvas, &state.left);
    draw_paddle(canvas, &state.right);
    draw_scoreboard(canvas, &state.scoreboard, state.field);
}

/// Center line plus a disc brightening toward the middle
pub fn draw_center_accent(
    canvas: &mut dyn Canvas,
    field: Field,
    backend: &dyn TrajectoryBackend,
    bench: &mut BenchmarkContext,
) {
    let center = field.center();
    canvas.line(
        Vec2::new(center.x, 0.0),
        Vec2::new(center.x, field.height),
        OUTLINE,
        PANTONE,
    );

    let rings = bench.record(|| accent_rings(backend));
    for (radius, color) in rings {
        canvas.fill_circle(center, radius, color);
    }

    canvas.stroke_circle(center, ACCENT_RADIUS, OUTLINE, PANTONE);
}

/// Radius and color of every gradient ring, outermost first
fn accent_rings(backend: &dyn TrajectoryBackend) -> Vec<(f32, Rgba)> {
    let count = (ACCENT_RADIUS / ACCENT_STEP).round() as u32;
    (0..count)
        .map(|k| {
            let radius = ACCENT_RADIUS - k as f32 * ACCENT_STEP;
            let base = BACKGROUND;
            let color = Rgba {
                r: backend.gradient_channel(base.r, ACCENT_RADIUS, radius),
                g: backend.gradient_channel(base.g, ACCENT_RADIUS, radius),
                b: backend.gradient_channel(base.b, ACCENT_RADIUS, radius),
                a: base.a,
            };
            (radius, color)
        })
        .collect()
}

/// Spinning pinwheel of alternating sectors with a spoke on each edge
pub fn draw_ball(
    canvas: &mut dyn Canvas,
    ball: &Ball,
    backend: &dyn TrajectoryBackend,
    bench: &mut BenchmarkContext,
) {
    let rotation = ball.tick as f32 * BALL_SPIN;
    let sectors = bench.record(|| {
        (0..BALL_SEGMENTS)
            .map(|i| backend.ball_sector(ball.pos, ball.radius, rotation, i))
            .collect::<Vec<_>>()
    });

    for (i, sector) in sectors.iter().enumerate() {
        let fill = if i % 2 == 0 { STEEL_BLUE } else { TIFFANY_BLUE };
        canvas.fill_sector(ball.pos, ball.radius, sector.start_angle, sector.end_angle, fill);
        canvas.line(ball.pos, sector.spoke_end, OUTLINE, SEASALT);
    }
}

pub fn draw_paddle(canvas: &mut dyn Canvas, paddle: &Paddle) {
    canvas.fill_rect(paddle.rect, HUNYADI_YELLOW);
}

/// Names in the top corners, scores under them
pub fn draw_scoreboard(canvas: &mut dyn Canvas, board: &Scoreboard, field: Field) {
    let right_x = field.width - 100.0;
    canvas.text(board.left.name(), Vec2::new(10.0, 10.0), TEXT_SIZE, LAPIS_LAZULI);
    canvas.text(board.right.name(), Vec2::new(right_x, 10.0), TEXT_SIZE, LAPIS_LAZULI);
    canvas.text(
        &board.left.score().to_string(),
        Vec2::new(10.0, 40.0),
        TEXT_SIZE,
        LAPIS_LAZULI,
    );
    canvas.text(
        &board.right.score().to_string(),
        Vec2::new(right_x, 40.0),
        TEXT_SIZE,
        LAPIS_LAZULI,
    );
}

pub fn draw_login(
    canvas: &mut dyn Canvas,
    screen: &LoginScreen,
    backend: &dyn TrajectoryBackend,
    bench: &mut BenchmarkContext,
) {
    canvas.clear(LOGIN_BACKGROUND);
    for ball in &screen.balls {
        draw_ball(canvas, ball, backend, bench);
    }
    draw_label(canvas, &screen.menu.title);
    draw_text_box(canvas, &screen.menu.username);
    draw_text_box(canvas, &screen.menu.password);
    draw_button(canvas, &screen.menu.login);
}

pub fn draw_main_menu(canvas: &mut dyn Canvas, menu: &MainMenu) {
    canvas.clear(BACKGROUND);
    for label in &menu.labels {
        draw_label(canvas, label);
    }
    for checkbox in menu.checkboxes() {
        draw_check_box(canvas, checkbox);
    }
    draw_button(canvas, &menu.start);
}

fn centered_text(canvas: &mut dyn Canvas, text: &str, center_x: f32, y: f32, color: Rgba) {
    let width = canvas.measure_text(text, TEXT_SIZE);
    canvas.text(text, Vec2::new(center_x - width / 2.0, y), TEXT_SIZE, color);
}

fn outline_color(focused: bool) -> Rgba {
    if focused { FOCUSED } else { UNFOCUSED }
}

fn draw_label(canvas: &mut dyn Canvas, label: &Label) {
    let color = match label.style {
        LabelStyle::Title => PANTONE,
        LabelStyle::Guide => LAPIS_LAZULI,
    };
    centered_text(canvas, label.text, label.center_x, label.y, color);
}

fn draw_text_box(canvas: &mut dyn Canvas, tb: &TextBox) {
    let cx = tb.rect.center().x;
    centered_text(canvas, tb.title, cx, tb.rect.y - 25.0, TIFFANY_BLUE);
    canvas.fill_rect(tb.rect, SEASALT);
    canvas.stroke_rect(tb.rect, OUTLINE, outline_color(tb.focus.is_focused()));
    centered_text(canvas, &tb.display(), cx, tb.rect.y + 5.0, TIFFANY_BLUE);
}

fn draw_button(canvas: &mut dyn Canvas, button: &Button) {
    canvas.fill_rect(button.rect, HUNYADI_YELLOW);
    canvas.stroke_rect(button.rect, OUTLINE, outline_color(button.focus.is_focused()));
    centered_text(canvas, button.title, button.rect.center().x, button.rect.y + 5.0, TIFFANY_BLUE);
}

fn draw_check_box(canvas: &mut dyn Canvas, cb: &CheckBox) {
    let fill = if cb.checked { PANTONE } else { ASH_GRAY };
    canvas.fill_rect(cb.rect, fill);
    canvas.stroke_rect(cb.rect, OUTLINE, outline_color(cb.focus.is_focused()));
    canvas.text(
        cb.title,
        Vec2::new(cb.rect.right() + 5.0, cb.rect.y + 5.0),
        TEXT_SIZE,
        TIFFANY_BLUE,
    );
}
