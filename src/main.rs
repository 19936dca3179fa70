//! Word Pills entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};

    use word_pills::recognition::BrowserRecognizer;
    use word_pills::renderer::CanvasSurface;
    use word_pills::{Enclosure, Feedback, Game, GameConfig, GameError, Result, SpeechEvent};

    /// Appends caught pills to the `#enclosure` list
    struct DomEnclosure {
        document: Document,
        list: Element,
    }

    impl Enclosure for DomEnclosure {
        fn append(&mut self, label: &str) {
            let div = match self.document.create_element("div") {
                Ok(div) => div,
                Err(e) => {
                    log::warn!("Could not create enclosure entry: {:?}", e);
                    return;
                }
            };
            div.set_class_name("word-pill");
            div.set_text_content(Some(label));
            if let Err(e) = self.list.append_child(&div) {
                log::warn!("Could not append to enclosure: {:?}", e);
            }
        }
    }

    /// Everything the frame loop and the speech callbacks share
    struct App {
        game: Game,
        surface: CanvasSurface,
        enclosure: DomEnclosure,
        speech_output: Option<Element>,
    }

    impl App {
        fn frame(&mut self) {
            self.game.frame(&mut self.surface);
        }

        /// Run one speech event to completion and update the feedback line
        fn dispatch(&mut self, event: SpeechEvent) {
            let feedback = self.game.on_speech(event, &mut self.enclosure);
            let Some(output) = &self.speech_output else {
                return;
            };
            match feedback {
                Feedback::Show(text) => output.set_text_content(Some(&text)),
                Feedback::Clear => output.set_text_content(None),
                Feedback::Unchanged => {}
            }
        }
    }

    fn element(document: &Document, id: &str) -> Result<Element> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::MissingElement(id.to_string()))
    }

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Word Pills starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Js("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Js("no document".to_string()))?;

        let canvas: HtmlCanvasElement = element(&document, "gameCanvas")?
            .dyn_into()
            .map_err(|_| GameError::Js("#gameCanvas is not a canvas".to_string()))?;

        // Optional JSON overrides; the canvas itself always defines the field
        let mut config = match canvas.get_attribute("data-config") {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::default(),
        };
        config.field_width = canvas.width() as f32;
        config.field_height = canvas.height() as f32;
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Game::new(&config, seed);
        log::info!(
            "Game initialized with seed: {} ({} pills)",
            seed,
            game.field().len()
        );

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(&canvas)?,
            enclosure: DomEnclosure {
                list: element(&document, "enclosure")?,
                document: document.clone(),
            },
            speech_output: document.get_element_by_id("speech-output"),
        }));

        // Start game loop
        request_animation_frame(app.clone());

        setup_speech(&window, &document, &config.lang, app)?;

        log::info!("Word Pills running!");
        Ok(())
    }

    fn setup_speech(
        window: &web_sys::Window,
        document: &Document,
        lang: &str,
        app: Rc<RefCell<App>>,
    ) -> Result<()> {
        let sink: Rc<dyn Fn(SpeechEvent)> = {
            let app = app.clone();
            Rc::new(move |event: SpeechEvent| app.borrow_mut().dispatch(event))
        };

        let recognizer = match BrowserRecognizer::new(lang, sink) {
            Ok(recognizer) => Rc::new(recognizer),
            Err(GameError::SpeechUnsupported) => {
                log::warn!("Speech recognition unavailable; pills will keep bouncing");
                let _ = window.alert_with_message("Speech Recognition API not supported in this browser.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let Some(button) = document.get_element_by_id("start-btn") else {
            log::warn!("No #start-btn found; speech recognition cannot be started");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if let Err(e) = app.borrow_mut().game.start_listening() {
                log::warn!("{}", e);
                return;
            }
            if let Err(e) = recognizer.start() {
                log::error!("Failed to start speech recognition: {}", e);
                app.borrow_mut().dispatch(SpeechEvent::Ended);
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; animation loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(JsValue::from)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Word Pills (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Bounce the default pills for ten simulated seconds while a scripted
/// "player" says a few words
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use word_pills::renderer::RecordingSurface;
    use word_pills::{Game, GameConfig, SpeechEvent};

    const FRAMES: u64 = 600;
    const SEED: u64 = 42;
    let script: &[(u64, &str)] = &[(60, "lion"), (120, "  Tiger "), (180, "unicorn"), (240, "PANDA")];

    let config = GameConfig {
        seed: Some(SEED),
        ..Default::default()
    };
    let mut game = Game::new(&config, SEED);
    let mut surface = RecordingSurface::new();
    let mut enclosure: Vec<String> = Vec::new();

    if let Err(e) = game.start_listening() {
        log::warn!("{}", e);
    }

    let mut collisions = 0;
    let mut stalled = 0;
    for frame in 0..FRAMES {
        let report = game.frame(&mut surface);
        collisions += report.collisions;
        stalled += report.stalled;

        for (_, words) in script.iter().filter(|(at, _)| *at == frame) {
            game.on_speech(
                SpeechEvent::Result {
                    interim: String::new(),
                    finalized: words.to_string(),
                },
                &mut enclosure,
            );
        }
    }
    game.on_speech(SpeechEvent::Ended, &mut enclosure);

    log::info!(
        "{} frames: {} collisions ({} stalled), {} pills still bouncing",
        FRAMES,
        collisions,
        stalled,
        game.field().len()
    );
    println!("Enclosure: {}", enclosure.join(", "));
    println!("Still bouncing: {}", surface.texts().join(", "));
}
