//! Drives login, main menu and a match headlessly, the way the app loop does

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use path_pong::persistence::append_report;
use path_pong::sim::{
    BackendKind, Field, GameEvent, GameMode, MatchState, PaddleInput, PlayerCount, Side, TickInput,
    TrajectoryMode, tick,
};
use path_pong::ui::{LoginScreen, MainMenu, MenuInput};
use path_pong::{BenchmarkContext, Settings};

fn typed(s: &str) -> MenuInput {
    MenuInput {
        chars: s.chars().collect(),
        ..Default::default()
    }
}

fn click(point: Vec2) -> MenuInput {
    MenuInput {
        click: Some(point),
        ..Default::default()
    }
}

#[test]
fn test_login_menu_match_flow() {
    let field = Field::default();
    let mut rng = Pcg32::seed_from_u64(99);
    let mut bench = BenchmarkContext::new(BackendKind::Native);
    let native = BackendKind::Native.instantiate();

    // Login
    let mut login = LoginScreen::new(field, &mut rng);
    let mut name = None;
    for input in [
        typed("player-one"),
        MenuInput {
            enter: true,
            ..Default::default()
        },
        typed("pw"),
        click(login.menu.login.rect.center()),
    ] {
        login.animate(native.as_ref(), &mut bench, &mut rng);
        name = login.menu.handle(&input);
    }
    let name = name.expect("login should succeed");
    assert_eq!(name, "player-one");

    // Main menu: two players, sin path, foreign backend
    let settings = Settings::default();
    let mut menu = MainMenu::new(field, settings.menu_defaults);
    menu.handle(&click(menu.players.options[1].1.rect.center()));
    menu.handle(&click(menu.path.options[1].1.rect.center()));
    menu.handle(&click(menu.backend.options[1].1.rect.center()));
    let mode = menu
        .handle(&click(menu.start.rect.center()))
        .expect("complete selection starts the match");
    assert_eq!(mode.players, PlayerCount::Two);
    assert_eq!(mode.path, TrajectoryMode::SinModulated);
    assert_eq!(mode.backend, BackendKind::Foreign);

    // Match
    let backend = mode.backend.instantiate();
    bench.set_backend(mode.backend);
    let mut state = MatchState::new(mode, &name, &settings.second_player_name, 5);
    assert_eq!(state.scoreboard.right.name(), "Player2");

    let input = TickInput {
        left: PaddleInput { up: true, down: false },
        right: PaddleInput { up: false, down: true },
    };
    let mut scored = 0;
    for _ in 0..3_600 {
        for event in tick(&mut state, &input, backend.as_ref(), &mut bench) {
            if let GameEvent::Scored { .. } = event {
                scored += 1;
            }
        }
    }
    let total = state.scoreboard.left.score() + state.scoreboard.right.score();
    assert_eq!(total, scored);
    assert_eq!(state.left.rect.y, 5.0);
    assert_eq!(state.right.rect.y, 695.0);
    assert_eq!(bench.report().backend, BackendKind::Foreign);
}

#[test]
fn test_backends_track_each_other() {
    let mode = GameMode {
        path: TrajectoryMode::SinModulated,
        ..Default::default()
    };
    let native = BackendKind::Native.instantiate();
    let foreign = BackendKind::Foreign.instantiate();
    let mut a = MatchState::new(mode, "A", "AI", 21);
    let mut b = MatchState::new(mode, "A", "AI", 21);
    let mut bench = BenchmarkContext::new(BackendKind::Native);

    // Short enough that the ball cannot reach a wall from the center
    for _ in 0..30 {
        tick(&mut a, &TickInput::default(), native.as_ref(), &mut bench);
        tick(&mut b, &TickInput::default(), foreign.as_ref(), &mut bench);
    }
    assert!(a.ball.pos.distance(b.ball.pos) < 1e-2);
    assert_eq!(a.ball.tick, b.ball.tick);
}

#[test]
fn test_ai_match_scores_and_logs() {
    let mode = GameMode {
        difficulty: path_pong::sim::Difficulty::Hard,
        ..Default::default()
    };
    let backend = mode.backend.instantiate();
    let mut bench = BenchmarkContext::new(mode.backend);
    let mut state = MatchState::new(mode, "Solo", "AI", 8);

    // Straight at the left edge while the left paddle hides at the top
    state.ball.vel = Vec2::new(-400.0, 0.0);
    state.ball.accel = Vec2::ZERO;
    let input = TickInput {
        left: PaddleInput { up: true, down: false },
        ..Default::default()
    };
    let mut right_scored = false;
    for _ in 0..600 {
        let events = tick(&mut state, &input, backend.as_ref(), &mut bench);
        right_scored |= events.contains(&GameEvent::Scored {
            side: Side::Right,
            score: state.scoreboard.right.score(),
        });
        if right_scored {
            break;
        }
    }
    assert!(right_scored);

    let path = std::env::temp_dir().join(format!("path_pong_flow_{}.txt", std::process::id()));
    let _ = std::fs::remove_file(&path);
    append_report(&path, &bench.report()).expect("append timing log");
    let text = std::fs::read_to_string(&path).expect("read timing log");
    assert!(text.starts_with("Execution time is "));
    assert!(text.contains("Calculation time while using NATIVE is "));
    let _ = std::fs::remove_file(&path);
}
