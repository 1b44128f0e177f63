//! Path Pong entry point
//!
//! Sets up logging and the window, then runs login -> main menu -> match
//! until the window is closed. The timing report is appended on the way out.

use macroquad::prelude::{Conf, next_frame, prevent_quit};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use path_pong::consts::{FIELD_HEIGHT, FIELD_WIDTH, GAME_NAME, TARGET_FPS};
use path_pong::platform::{self, FramePacer};
use path_pong::renderer::{MacroquadCanvas, scene};
use path_pong::sim::{
    BackendKind, Field, GameMode, MatchState, NativeBackend, PlayerCount, TrajectoryBackend, tick,
};
use path_pong::ui::{LoginScreen, MainMenu};
use path_pong::{BenchmarkContext, Settings, persistence};

fn window_conf() -> Conf {
    Conf {
        window_title: GAME_NAME.to_owned(),
        window_width: FIELD_WIDTH as i32,
        window_height: FIELD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Which screen owns the frame
enum Screen {
    Login(LoginScreen),
    Menu(MainMenu),
    Match(MatchState),
}

struct App {
    settings: Settings,
    field: Field,
    bench: BenchmarkContext,
    backend: Box<dyn TrajectoryBackend>,
    rng: Pcg32,
    canvas: MacroquadCanvas,
    player_name: String,
    screen: Screen,
}

impl App {
    fn new(settings: Settings) -> Self {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(rand::rng().random::<u64>());
        let screen = Screen::Login(LoginScreen::new(field, &mut rng));
        Self {
            settings,
            field,
            bench: BenchmarkContext::new(BackendKind::Native),
            backend: Box::new(NativeBackend),
            rng,
            canvas: MacroquadCanvas,
            player_name: String::new(),
            screen,
        }
    }

    /// Poll, simulate and draw one frame
    fn frame(&mut self) {
        let next = match &mut self.screen {
            Screen::Login(login) => {
                let input = platform::poll_menu_input();
                let submitted = login.menu.handle(&input);
                login.animate(self.backend.as_ref(), &mut self.bench, &mut self.rng);
                scene::draw_login(&mut self.canvas, login, self.backend.as_ref(), &mut self.bench);

                submitted.map(|name| {
                    self.player_name = name;
                    Screen::Menu(MainMenu::new(self.field, self.settings.menu_defaults))
                })
            }
            Screen::Menu(menu) => {
                let input = platform::poll_menu_input();
                let chosen = menu.handle(&input);
                scene::draw_main_menu(&mut self.canvas, menu);
                chosen.map(|mode| Screen::Match(self.start_match(mode)))
            }
            Screen::Match(state) => {
                let input = platform::poll_tick_input();
                tick(state, &input, self.backend.as_ref(), &mut self.bench);
                scene::draw_match(&mut self.canvas, state, self.backend.as_ref(), &mut self.bench);
                None
            }
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
    }

    fn start_match(&mut self, mode: GameMode) -> MatchState {
        self.backend = mode.backend.instantiate();
        self.bench.set_backend(mode.backend);

        let opponent = match mode.players {
            PlayerCount::One => self.settings.ai_name.as_str(),
            PlayerCount::Two => self.settings.second_player_name.as_str(),
        };
        log::info!("Match: {} vs {}", self.player_name, opponent);
        MatchState::new(mode, &self.player_name, opponent, self.rng.random())
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("{} starting", GAME_NAME);

    let settings = Settings::load();
    prevent_quit();

    let mut pacer = FramePacer::new(TARGET_FPS, settings.frame_limiter);
    let mut app = App::new(settings);

    while !platform::quit_requested() {
        app.frame();
        next_frame().await;
        pacer.wait();
    }

    let report = app.bench.report();
    log::info!(
        "Shutting down: {}s total, {}ns calculating with {}",
        report.execution.as_secs(),
        report.calculation.as_nanos(),
        report.backend.label()
    );
    if let Err(e) = persistence::append_report(&app.settings.log_path, &report) {
        log::error!("Failed to write timing log: {}", e);
    }
}
