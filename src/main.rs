//! Paddle Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use paddle_duel::GameConfig;
    use paddle_duel::platform::client_to_surface_y;
    use paddle_duel::renderer::{CanvasSurface, draw_world};
    use paddle_duel::sim::{Game, GameEvent, TickInput};

    /// Host state shared between event handlers and the frame loop
    struct Host {
        game: Game,
        surface: CanvasSurface,
        /// Pointer position received since the last frame
        input: TickInput,
    }

    impl Host {
        /// One frame: tick the simulation once, then draw
        fn frame(&mut self) {
            let input = std::mem::take(&mut self.input);
            self.game.tick(&input);

            let world = self.game.world();
            if world.events().iter().any(|e| matches!(e, GameEvent::Scored(_))) {
                let score = world.score();
                log::info!("Score {} - {}", score.left, score.right);
            }
            draw_world(world, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Paddle Duel starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("pong")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"pong\"> found");
            return;
        };

        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        // The field is the canvas; every other setting comes from storage or defaults
        let config = GameConfig {
            field_width: canvas.width() as f32,
            field_height: canvas.height() as f32,
            ..GameConfig::load()
        };

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(config, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Canvas too small to play: {}", e);
                return;
            }
        };
        let host = Rc::new(RefCell::new(Host {
            game,
            surface,
            input: TickInput::default(),
        }));

        setup_input_handlers(&canvas, host.clone());

        // Start game loop
        request_animation_frame(host);

        log::info!("Paddle Duel running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let y = client_to_surface_y(
                event.client_y() as f32,
                rect.top() as f32,
                rect.height() as f32,
                canvas_clone.height() as f32,
            );
            host.borrow_mut().input.pointer_y = Some(y);
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            host.borrow_mut().frame();
            request_animation_frame(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Duel (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match paddle_duel::GameConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                paddle_duel::GameConfig::default()
            }
        },
        None => paddle_duel::GameConfig::default(),
    };
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(3600);

    if let Err(e) = headless::run(config, ticks) {
        log::error!("Cannot start match: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use paddle_duel::renderer::{AsciiSurface, draw_world};
    use paddle_duel::sim::{Game, GameEvent, TickInput, World};
    use paddle_duel::{ConfigError, GameConfig};

    const GRID_COLS: usize = 80;
    const GRID_ROWS: usize = 30;

    /// Stand-in for a human: follows the ball with a slow wobble so points
    /// actually get scored on both sides
    fn scripted_pointer(world: &World) -> f32 {
        let t = world.ticks() as f32;
        world.ball().center().y + 70.0 * (t * 0.013).sin()
    }

    pub fn run(config: GameConfig, ticks: u64) -> Result<(), ConfigError> {
        let seed = rand::random::<u64>();
        let mut game = Game::new(config, seed)?;
        let mut hits = 0u32;

        for _ in 0..ticks {
            let input = TickInput::pointer(scripted_pointer(game.world()));
            game.tick(&input);

            let world = game.world();
            for event in world.events() {
                match event {
                    GameEvent::PaddleHit(_) => hits += 1,
                    GameEvent::Scored(side) => {
                        log::debug!("{} scores at tick {}", side.as_str(), world.ticks())
                    }
                    GameEvent::WallBounce(_) => {}
                }
            }
        }

        let world = game.world();
        let mut surface = AsciiSurface::new(world.field(), GRID_COLS, GRID_ROWS);
        draw_world(world, &mut surface);

        println!("{}", surface.to_text());
        let score = world.score();
        println!(
            "\nAfter {} ticks (seed {}): left {} - right {}, {} paddle hits",
            world.ticks(),
            game.seed(),
            score.left,
            score.right,
            hits
        );
        match serde_json::to_string(&score) {
            Ok(json) => log::info!("Final score: {}", json),
            Err(e) => log::warn!("Could not serialize score: {}", e),
        }
        Ok(())
    }
}
