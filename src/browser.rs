// Browser implementations of the frame scheduler and the event source:
// requestAnimationFrame for frames, window listeners for pointer and resize.

use crate::animation::{FrameId, FrameScheduler};
use crate::events::{EventSource, PointerHandler, PointerMove, Resize, ResizeHandler, Subscription};
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, Window};

pub(crate) fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// Size of the canvas's CSS box in pixels
pub fn measure(canvas: &HtmlCanvasElement) -> (f64, f64) {
    (canvas.offset_width() as f64, canvas.offset_height() as f64)
}

pub struct AnimationFrames {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        AnimationFrames {
            window,
            callback: None,
        }
    }

    // The callback runs on every delivered frame; it is usually a closure
    // holding a weak reference back to the simulation
    pub fn bind(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> Result<FrameId, String> {
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| String::from("no frame callback bound"))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(js_error)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Err(e) = self.window.cancel_animation_frame(id) {
            error!("failed to cancel animation frame {}: {}", id, js_error(e));
        }
    }
}

// Listens on the window so fast pointer moves are tracked even when the
// canvas itself sits under other content
pub struct WindowEvents {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl WindowEvents {
    pub fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
        WindowEvents { window, canvas }
    }

    fn add_listener<T>(&self, kind: &'static str, closure: Closure<T>) -> Result<Subscription, String>
    where
        T: WasmClosure + ?Sized + 'static,
    {
        self.window
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        let window = self.window.clone();
        Ok(Subscription::new(move || {
            if let Err(e) =
                window.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            {
                error!("failed to remove {} listener: {}", kind, js_error(e));
            }
        }))
    }
}

impl EventSource for WindowEvents {
    fn subscribe_pointer_move(&self, mut handler: PointerHandler) -> Result<Subscription, String> {
        let canvas = self.canvas.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            handler(PointerMove {
                x: event.client_x() as f64 - rect.left(),
                y: event.client_y() as f64 - rect.top(),
            });
        }) as Box<dyn FnMut(MouseEvent)>);
        self.add_listener("mousemove", closure)
    }

    fn subscribe_resize(&self, mut handler: ResizeHandler) -> Result<Subscription, String> {
        let canvas = self.canvas.clone();
        let closure = Closure::wrap(Box::new(move |_: Event| {
            let (width, height) = measure(&canvas);
            handler(Resize { width, height });
        }) as Box<dyn FnMut(Event)>);
        self.add_listener("resize", closure)
    }
}
