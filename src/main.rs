//! Side Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use side_runner::config::GameConfig;
    use side_runner::platform::{self, ControlButton};
    use side_runner::renderer::hud::{self, HudView};
    use side_runner::renderer::{RenderState, build_scene, sky_color};
    use side_runner::sim::{
        Autopilot, GameEvent, GamePhase, GameState, InputCommand, InputQueue, tick,
    };

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: InputQueue,
        /// Demo mode bot, toggled with `i`
        autopilot: Option<Autopilot>,
        /// Last HUD pushed to the DOM, to skip redundant writes
        last_hud: Option<HudView>,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                state: GameState::new(config, seed),
                render_state: None,
                input: InputQueue::new(),
                autopilot: None,
                last_hud: None,
            }
        }

        fn push(&mut self, command: InputCommand) {
            self.input.push(command);
        }

        fn toggle_autopilot(&mut self) {
            self.autopilot = match self.autopilot {
                Some(_) => {
                    // Let go of anything the bot was holding
                    self.input.push(InputCommand::SetRight(false));
                    None
                }
                None => Some(Autopilot::default()),
            };
            log::info!("Autopilot: {}", self.autopilot.is_some());
        }

        /// Run one simulation tick
        fn update(&mut self) {
            if let Some(pilot) = self.autopilot {
                let commands = pilot.commands(&self.state);
                self.input.extend(commands);
            }

            for event in tick(&mut self.state, &mut self.input) {
                match event {
                    GameEvent::Jumped | GameEvent::ObstacleSpawned(_) => {}
                    other => log::debug!("{:?} at frame {}", other, self.state.frame),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.state);
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
            let view = HudView::from_state(&self.state);
            if self.last_hud.as_ref() == Some(&view) {
                return;
            }

            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("hud") {
                let class = if view.show_stats { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&view.score));
            }
            if let Some(el) = document.get_element_by_id("hud-distance") {
                el.set_text_content(Some(&view.distance));
            }

            if let Some(el) = document.get_element_by_id("banner") {
                match &view.banner {
                    Some(banner) => {
                        let _ = el.set_attribute("class", "");
                        if let Some(title) = document.get_element_by_id("banner-title") {
                            title.set_text_content(Some(banner.title));
                            set_style(
                                &title,
                                "color",
                                &hud::css_color(hud::banner_title_color(
                                    banner.phase,
                                    &self.state.config,
                                )),
                            );
                        }
                        if let Some(lines) = document.get_element_by_id("banner-lines") {
                            lines.set_text_content(Some(&banner.lines.join("\n")));
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            for (id, caption) in ["flag-start", "flag-goal"].iter().zip(view.flags.iter()) {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(&caption.text));
                    let class = if caption.visible { "flag-caption" } else { "flag-caption hidden" };
                    let _ = el.set_attribute("class", class);
                    set_style(&el, "left", &format!("{}px", caption.x));
                    set_style(&el, "top", &format!("{}px", caption.y));
                }
            }

            self.last_hud = Some(view);
        }
    }

    fn set_style(el: &web_sys::Element, property: &str, value: &str) {
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    /// Read the optional inline JSON config, falling back to defaults
    fn load_config(document: &web_sys::Document) -> GameConfig {
        let Some(json) = document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
        else {
            log::info!("Using default config");
            return GameConfig::default();
        };

        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from page");
                config
            }
            Err(e) => {
                log::warn!("Ignoring page config: {}", e);
                GameConfig::default()
            }
        }
    }

    /// Apply UI font sizes and colors from the config to the HUD elements
    fn style_hud(document: &web_sys::Document, config: &GameConfig) {
        let ui = &config.ui;
        let styles = [
            ("hud-score", ui.score_color, ui.score_size),
            ("hud-distance", ui.distance_color, ui.distance_size),
            ("banner-title", ui.title_color, ui.title_size),
            ("banner-lines", ui.message_color, ui.message_size),
        ];
        for (id, color, size) in styles {
            if let Some(el) = document.get_element_by_id(id) {
                set_style(&el, "color", &hud::css_color(color));
                set_style(&el, "font-size", &format!("{}px", size));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Side Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let config = load_config(&document);
        style_hud(&document, &config);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store at device resolution, CSS size at logical resolution
        let logical = (config.world.canvas_width, config.world.canvas_height);
        let dpr = window.device_pixel_ratio();
        let width = (logical.0 as f64 * dpr) as u32;
        let height = (logical.1 as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.style().set_property("width", &format!("{}px", logical.0));
        let _ = canvas.style().set_property("height", &format!("{}px", logical.1));

        let clear_color = sky_color(&config);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
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

        let render_state =
            RenderState::new(surface, &adapter, width, height, logical, clear_color).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_control_buttons(game.clone());
        setup_canvas_touch(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Side Runner running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                if platform::is_autopilot_toggle(&key) {
                    g.toggle_autopilot();
                } else if let Some(command) = platform::key_down(&key) {
                    // Keep space/arrows from scrolling the page
                    event.prevent_default();
                    if !event.repeat() {
                        g.push(command);
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = platform::key_up(&event.key()) {
                    game.borrow_mut().push(command);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_control_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for button in ControlButton::ALL {
            let Some(el) = document.get_element_by_id(button.element_id()) else {
                log::warn!("Missing control button #{}", button.element_id());
                continue;
            };

            // Touch
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().push(button.press());
                });
                let _ = el.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    if let Some(command) = button.release() {
                        game.borrow_mut().push(command);
                    }
                });
                let _ = el
                    .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            // Mouse
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().push(button.press());
                });
                let _ = el
                    .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    if let Some(command) = button.release() {
                        game.borrow_mut().push(command);
                    }
                });
                let _ = el
                    .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_canvas_touch(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                let mut g = game.borrow_mut();
                // Map client pixels to logical canvas units
                let rect = canvas_clone.get_bounding_client_rect();
                let logical_height = g.state.config.world.canvas_height;
                let scale = logical_height / rect.height().max(1.0) as f32;
                let y = (touch.client_y() as f32 - rect.top() as f32) * scale;
                if let Some(command) = platform::canvas_touch(y, logical_height) {
                    g.push(command);
                }
            }
        });
        let _ = canvas
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One tick per display refresh
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let phase_before = g.state.phase;

            g.update();
            g.render();
            g.update_hud();

            if g.state.phase != phase_before && g.state.phase == GamePhase::Goal {
                log::info!("Finished in {} frames", g.state.score);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Upper bound on the headless demo run
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_TICKS: u32 = 10_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use side_runner::GameConfig;
    use side_runner::sim::{Autopilot, GameEvent, GameState, InputQueue, tick};

    env_logger::init();
    log::info!("Side Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the web version");

    let config = match std::env::var("SIDE_RUNNER_CONFIG") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(json) => GameConfig::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {}", path, e);
                GameConfig::default()
            }),
            Err(e) => {
                log::warn!("Cannot read {}: {}", path, e);
                GameConfig::default()
            }
        },
        Err(_) => GameConfig::default(),
    };

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);

    let mut state = GameState::new(config, seed);
    let pilot = Autopilot::default();
    let mut input = InputQueue::new();
    let mut jumps = 0;
    let mut spawned = 0;

    for _ in 0..MAX_DEMO_TICKS {
        input.extend(pilot.commands(&state));
        for event in tick(&mut state, &mut input) {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::ObstacleSpawned(_) => spawned += 1,
                _ => {}
            }
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    println!(
        "Seed {}: {:?} after {} frames, distance {:.0}, score {}, {} obstacles, {} jumps",
        seed, state.phase, state.frame, state.distance, state.score, spawned, jumps
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
