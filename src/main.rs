//! Space Defender entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use space_defender::platform::KeyState;
    use space_defender::renderer::{RenderState, build_scene};
    use space_defender::sim::{GamePhase, Session};

    /// Game instance holding all state
    struct Game {
        session: Session,
        keys: KeyState,
        rng: Pcg32,
        render_state: Option<RenderState>,
        // Overlays only change on phase transitions
        shown_phase: Option<GamePhase>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                session: Session::new(),
                keys: KeyState::new(),
                rng: Pcg32::seed_from_u64(seed),
                render_state: None,
                shown_phase: None,
            }
        }

        /// Run one simulation step with this frame's input
        fn update(&mut self) {
            let input = self.keys.take_input();
            if let Some(report) = self.session.tick(&input, &mut self.rng)
                && report.level_cleared
            {
                log::info!("Level {} cleared", self.session.levels_cleared);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.session.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.score().to_string()));
            }

            let phase = self.session.phase;
            if self.shown_phase == Some(phase) {
                return;
            }
            self.shown_phase = Some(phase);

            let show = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
                }
            };
            show("start-screen", phase == GamePhase::Title);
            show("game-over", phase == GamePhase::GameOver);

            if phase == GamePhase::GameOver
                && let Some(el) = document.get_element_by_id("final-score")
            {
                el.set_text_content(Some(&self.session.score().to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Space Defender starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Back the canvas with device pixels
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_start_buttons(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(game);

        log::info!("Space Defender running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down: movement keys are held, Space fires once per press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                if KeyState::is_game_key(&key) {
                    // Keep arrows and Space from scrolling the page
                    event.prevent_default();
                }
                game.borrow_mut().keys.press(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.keys.clear();
                    g.session.start();
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation step per displayed frame
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use clap::Parser;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use serde::Serialize;

    use space_defender::consts::{GAME_WIDTH, PLAYER_WIDTH};
    use space_defender::sim::{GamePhase, Session, SimulationState, TickInput};

    pub const DEFAULT_SEED: u64 = 0x5eed;
    pub const DEFAULT_FRAMES: u64 = 3600;
    const FIRE_INTERVAL: u64 = 12;
    const PROGRESS_INTERVAL: u64 = 600;

    /// Scripted player: sweeps wall to wall, firing at a fixed cadence
    #[derive(Debug, Default)]
    pub struct Autopilot {
        heading_left: bool,
        frame: u64,
    }

    impl Autopilot {
        pub fn input(&mut self, state: &SimulationState) -> TickInput {
            let x = state.player.pos.x;
            if x <= 0.0 {
                self.heading_left = false;
            } else if x >= GAME_WIDTH - PLAYER_WIDTH {
                self.heading_left = true;
            }

            let fire = self.frame % FIRE_INTERVAL == 0;
            self.frame += 1;

            TickInput {
                left: self.heading_left,
                right: !self.heading_left,
                fire,
            }
        }
    }

    /// Final snapshot printed as JSON
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub phase: GamePhase,
        pub frames: u64,
        pub levels_cleared: u32,
        pub score: u32,
        pub state: SimulationState,
    }

    /// Play up to `max_frames` frames of a seeded session
    pub fn run(seed: u64, max_frames: u64) -> RunSummary {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut session = Session::new();
        let mut pilot = Autopilot::default();
        session.start();

        while session.frames < max_frames {
            let input = pilot.input(&session.state);
            let Some(report) = session.tick(&input, &mut rng) else {
                break;
            };
            if report.level_cleared {
                log::info!("Level {} cleared at frame {}", session.levels_cleared, session.frames);
            }
            if session.frames % PROGRESS_INTERVAL == 0 {
                log::info!(
                    "frame {}: score {}, {} enemies left",
                    session.frames,
                    session.score(),
                    session.state.enemies.len()
                );
            }
        }

        RunSummary {
            seed,
            phase: session.phase,
            frames: session.frames,
            levels_cleared: session.levels_cleared,
            score: session.score(),
            state: session.state,
        }
    }

    /// Headless run of the game with a scripted player
    #[derive(Parser, Debug, Clone, PartialEq, Eq)]
    #[command(name = "space-defender")]
    #[command(about = "Play a seeded Space Defender run headless and print the final state as JSON")]
    pub struct Args {
        /// Seed for enemy fire
        #[arg(long, default_value_t = DEFAULT_SEED)]
        pub seed: u64,
        /// Maximum number of frames to simulate
        #[arg(long, default_value_t = DEFAULT_FRAMES)]
        pub frames: u64,
    }

}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let headless::Args { seed, frames } = <headless::Args as clap::Parser>::parse();
    log::info!("Space Defender (headless) seed {} for up to {} frames", seed, frames);
    log::info!("Browser build: run with `trunk serve`");

    let summary = headless::run(seed, frames);
    log::info!(
        "Finished in {:?} after {} frames with score {}",
        summary.phase,
        summary.frames,
        summary.score
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
