//! Coin Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use coin_hop::consts::FRAME_MS;
    use coin_hop::platform::{InputMapper, fit_canvas};
    use coin_hop::renderer::{CanvasSurface, draw_scene};
    use coin_hop::sim::{Command, GameEvent, GameState, TickInput, tick};
    use coin_hop::{Roster, Settings, Tuning};

    /// Longest frame we simulate in one step (tab switches, breakpoints)
    const MAX_FRAME_MS: f32 = 100.0;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        settings: Settings,
        roster: Roster,
        input: TickInput,
        mapper: InputMapper,
        last_time: f64,
        /// An animation frame is scheduled
        running: bool,
    }

    impl Game {
        fn start(&mut self, name: Option<&str>) {
            let character = match name {
                Some(name) => self.roster.select(name),
                None => self.roster.default_character(),
            };
            self.state.start(character);
            self.input.clear();
            self.mapper = InputMapper::new();
            self.last_time = 0.0;
            set_display("startupScreen", "none");
            set_display("characterSelection", "none");
            set_display("gameArea", "block");
            set_score(self.state.player.score);
        }

        fn queue(&mut self, command: Option<Command>) {
            if let Some(command) = command {
                self.input.push(command);
            }
        }

        fn frame(&mut self, time: f64) {
            let frame_ms = if self.last_time > 0.0 {
                ((time - self.last_time) as f32).clamp(0.0, MAX_FRAME_MS)
            } else {
                FRAME_MS
            };
            self.last_time = time;

            tick(&mut self.state, &self.input, frame_ms);
            self.input.clear();

            for event in &self.state.events {
                match *event {
                    GameEvent::ScoreChanged { score } => set_score(score),
                    GameEvent::LevelAdvanced { level } => log::info!("Level {level}"),
                    GameEvent::CoinCollected { .. } | GameEvent::FellOff => {}
                }
            }

            draw_scene(&self.state, &mut self.surface, &self.settings);
        }

        /// Fit the canvas to its container and rescale the world to match
        fn fit(&mut self) {
            let Some(container) = document().and_then(|d| d.get_element_by_id("gameContainer"))
            else {
                log::error!("Game container not found");
                return;
            };
            let available = Vec2::new(
                container.client_width() as f32,
                container.client_height() as f32,
            );
            let size = fit_canvas(available, self.state.tuning.design_size());
            let canvas = self.surface.canvas();
            canvas.set_width(size.x as u32);
            canvas.set_height(size.y as u32);
            self.state.resize(size);
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn html_element(id: &str) -> Option<HtmlElement> {
        document()?.get_element_by_id(id)?.dyn_into().ok()
    }

    fn set_display(id: &str, value: &str) {
        if let Some(el) = html_element(id) {
            let _ = el.style().set_property("display", value);
        }
    }

    fn set_score(score: u64) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id("score")) {
            el.set_text_content(Some(&format!("Score: {score}")));
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Coin Hop starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let tuning_json = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content());
        let tuning = Tuning::load_or_default(tuning_json.as_deref());
        let settings = Settings::from_query(&window.location().search().unwrap_or_default());
        log::info!("Quality preset: {}", settings.quality.as_str());

        let design = tuning.design_size();
        canvas.set_width(design.x as u32);
        canvas.set_height(design.y as u32);
        let surface = CanvasSurface::new(canvas.clone())?;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(design, tuning),
            surface,
            settings,
            roster: Roster::default(),
            input: TickInput::default(),
            mapper: InputMapper::new(),
            last_time: 0.0,
            running: false,
        }));
        game.borrow_mut().fit();

        setup_startup_screen(&document, game.clone());
        setup_input_handlers(&canvas, game.clone());
        setup_mobile_controls(&document, game.clone());
        setup_resize(game);

        log::info!("Coin Hop ready");
        Ok(())
    }

    fn on<E, F>(target: &web_sys::EventTarget, event: &str, handler: F)
    where
        E: wasm_bindgen::convert::FromWasmAbi + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add {event} listener: {:?}", e);
        }
        closure.forget();
    }

    fn setup_startup_screen(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            on(&btn, "click", move |_: web_sys::MouseEvent| {
                start_game(&game, None);
            });
        }

        if let Some(btn) = document.get_element_by_id("characterButton") {
            on(&btn, "click", move |_: web_sys::MouseEvent| {
                let Some(panel) = html_element("characterSelection") else {
                    return;
                };
                let shown = panel
                    .style()
                    .get_property_value("display")
                    .is_ok_and(|d| d == "block");
                set_display("characterSelection", if shown { "none" } else { "block" });
            });
        }

        let Ok(options) = document.query_selector_all(".character-option") else {
            return;
        };
        for i in 0..options.length() {
            let Some(option) = options.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let game = game.clone();
            let name = option.get_attribute("data-name").unwrap_or_default();
            on(&option, "click", move |_: web_sys::MouseEvent| {
                start_game(&game, Some(&name));
            });
        }
    }

    /// Start (or restart) play and make sure the loop is running
    fn start_game(game: &Rc<RefCell<Game>>, name: Option<&str>) {
        let needs_loop = {
            let mut g = game.borrow_mut();
            g.start(name);
            !std::mem::replace(&mut g.running, true)
        };
        if needs_loop {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            on(&document, "keydown", move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let command = g.mapper.key_down(&event.key());
                g.queue(command);
            });
        }
        {
            let game = game.clone();
            on(&document, "keyup", move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let command = g.mapper.key_up(&event.key());
                g.queue(command);
            });
        }

        // Touch start: tap the top half to jump
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            on(canvas, "touchstart", move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let rect = canvas_clone.get_bounding_client_rect();
                let x = touch.client_x() as f32 - rect.left() as f32;
                let y = touch.client_y() as f32 - rect.top() as f32;
                let mut g = game.borrow_mut();
                let command =
                    g.mapper
                        .touch_start(touch.identifier(), x, y, rect.height() as f32);
                g.queue(command);
            });
        }

        // Touch move: swipe to walk
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            on(canvas, "touchmove", move |event: TouchEvent| {
                event.prevent_default();
                let rect = canvas_clone.get_bounding_client_rect();
                let touches = event.changed_touches();
                let mut g = game.borrow_mut();
                for i in 0..touches.length() {
                    if let Some(touch) = touches.get(i) {
                        let x = touch.client_x() as f32 - rect.left() as f32;
                        let command = g.mapper.touch_move(touch.identifier(), x);
                        g.queue(command);
                    }
                }
            });
        }

        {
            let game = game.clone();
            on(canvas, "touchend", move |event: TouchEvent| {
                event.prevent_default();
                let touches = event.changed_touches();
                let mut g = game.borrow_mut();
                for i in 0..touches.length() {
                    if let Some(touch) = touches.get(i) {
                        let command = g.mapper.touch_end(touch.identifier());
                        g.queue(command);
                    }
                }
            });
        }

        on(canvas, "touchcancel", move |event: TouchEvent| {
            event.prevent_default();
            let mut g = game.borrow_mut();
            let command = g.mapper.touch_cancel();
            g.input.push(command);
        });
    }

    /// On-screen buttons for devices without a keyboard
    fn setup_mobile_controls(document: &Document, game: Rc<RefCell<Game>>) {
        let bind = |id: &str, event: &str, command: Command| {
            let Some(btn) = document.get_element_by_id(id) else {
                return;
            };
            let game = game.clone();
            on(&btn, event, move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let command = g.mapper.emit(command);
                g.input.push(command);
            });
        };
        bind("jumpButton", "touchstart", Command::Jump);
        bind("leftButton", "touchstart", Command::MoveLeft);
        bind("leftButton", "touchend", Command::Stop);
        bind("rightButton", "touchstart", Command::MoveRight);
        bind("rightButton", "touchend", Command::Stop);
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        on(&window, "resize", move |_: web_sys::Event| {
            game.borrow_mut().fit();
        });
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let playing = {
            let mut g = game.borrow_mut();
            g.frame(time);
            g.running = g.state.is_started();
            g.running
        };
        if playing {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Hop (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a short scripted run against the recording surface and log what happens
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use coin_hop::consts::FRAME_MS;
    use coin_hop::renderer::{DrawList, draw_scene};
    use coin_hop::sim::{Command, GameEvent, GameState, TickInput, tick};
    use coin_hop::{Roster, Settings, Tuning};

    // Optional tuning JSON file as the first argument
    let tuning_json = std::env::args().nth(1).and_then(|path| {
        std::fs::read_to_string(&path)
            .map_err(|e| log::warn!("Cannot read {path}: {e}"))
            .ok()
    });
    let tuning = Tuning::load_or_default(tuning_json.as_deref());
    let design = tuning.design_size();
    let mut state = GameState::new(design, tuning);
    state.start(Roster::default().default_character());

    let settings = Settings::default();
    let mut surface = DrawList::new(design);
    let mut input = TickInput::default();

    // Hop right along the first platform, then wander off the edge
    for frame in 0..600u32 {
        match frame {
            0 => input.push(Command::MoveRight),
            60 | 150 => input.push(Command::Jump),
            200 => input.push(Command::MoveLeft),
            _ => {}
        }
        tick(&mut state, &input, FRAME_MS);
        input.clear();

        for event in &state.events {
            match event {
                GameEvent::CoinCollected { index } => log::info!("frame {frame}: coin {index}"),
                GameEvent::ScoreChanged { score } => log::info!("frame {frame}: score {score}"),
                GameEvent::FellOff => log::info!("frame {frame}: fell off"),
                GameEvent::LevelAdvanced { level } => log::info!("frame {frame}: level {level}"),
            }
        }
    }

    surface.clear();
    draw_scene(&state, &mut surface, &settings);
    println!(
        "Level {} score {} after {} ticks ({} draw commands)",
        state.level,
        state.player.score,
        state.time_ticks,
        surface.len()
    );
}
