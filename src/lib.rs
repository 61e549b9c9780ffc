#[macro_use]
mod logging;
mod utils;

pub mod animation;
pub mod browser;
pub mod canvas;
pub mod color;
pub mod config;
pub mod cursor;
pub mod events;
pub mod field;
pub mod particle;
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::animation::Simulation;
use crate::browser::{AnimationFrames, WindowEvents};
use crate::canvas::CanvasSurface;
use crate::events::Subscription;

pub use crate::config::FieldConfig;
pub use crate::cursor::CursorState;
pub use crate::field::Field;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

type CanvasSimulation = Simulation<CanvasSurface, AnimationFrames>;

// Animated particle background mounted on a canvas. Freeing it from JS stops
// the animation and removes its window listeners.
#[wasm_bindgen]
pub struct ParticleBackground {
    simulation: Rc<RefCell<CanvasSimulation>>,
    _subscriptions: Vec<Subscription>,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::mount(canvas, FieldConfig::default())
    }

    // Same as `new`, but the field is reproducible
    pub fn with_seed(canvas: HtmlCanvasElement, seed: u32) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::mount(canvas, FieldConfig::seeded(seed as u64))
    }

    pub fn start(&self) {
        self.simulation.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.simulation.borrow_mut().stop();
    }

    pub fn is_running(&self) -> bool {
        self.simulation.borrow().is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.simulation.borrow().field().particles().len()
    }

    pub fn width(&self) -> f64 {
        self.simulation.borrow().field().width()
    }

    pub fn height(&self) -> f64 {
        self.simulation.borrow().field().height()
    }

    // Canvas-local cursor position, undefined while the pointer is off the canvas
    pub fn cursor_x(&self) -> Option<f64> {
        self.simulation.borrow().field().cursor().position().map(|pos| pos[0])
    }

    pub fn cursor_y(&self) -> Option<f64> {
        self.simulation.borrow().field().cursor().position().map(|pos| pos[1])
    }
}

impl ParticleBackground {
    fn mount(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<ParticleBackground, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let events = WindowEvents::new(window.clone(), canvas.clone());
        let (width, height) = browser::measure(&canvas);

        let surface = CanvasSurface::new(canvas);
        let available = surface.is_available();
        let simulation = Rc::new(RefCell::new(Simulation::new(
            Field::new(config),
            surface,
            AnimationFrames::new(window),
        )));
        simulation.borrow_mut().resize(width, height);

        let weak = Rc::downgrade(&simulation);
        let on_frame = Closure::wrap(Box::new(move || {
            if let Some(simulation) = weak.upgrade() {
                match simulation.try_borrow_mut() {
                    Ok(mut simulation) => simulation.on_frame(),
                    Err(_) => error!("particle background busy, animation frame dropped"),
                };
            }
        }) as Box<dyn FnMut()>);
        simulation.borrow_mut().scheduler_mut().bind(on_frame);

        let subscriptions =
            animation::listen(&simulation, &events).map_err(|e| JsValue::from_str(&e))?;

        if available {
            simulation.borrow_mut().start();
        }
        log!(
            "particle background mounted: {}x{}, {} particles",
            width,
            height,
            simulation.borrow().field().particles().len()
        );

        Ok(ParticleBackground {
            simulation,
            _subscriptions: subscriptions,
        })
    }
}
