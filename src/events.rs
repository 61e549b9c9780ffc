//! Host events the simulation reacts to, behind an injectable source.

/// Pointer position, already translated into surface-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerMove {
    pub x: f64,
    pub y: f64,
}

/// New size of the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resize {
    pub width: f64,
    pub height: f64,
}

pub type PointerHandler = Box<dyn FnMut(PointerMove)>;
pub type ResizeHandler = Box<dyn FnMut(Resize)>;

/// Something that can report pointer moves and surface resizes. In the
/// browser this is the window; tests fire events by hand.
pub trait EventSource {
    fn subscribe_pointer_move(&self, handler: PointerHandler) -> Result<Subscription, String>;

    fn subscribe_resize(&self, handler: ResizeHandler) -> Result<Subscription, String>;
}

/// A registered listener. Dropping it unsubscribes.
#[must_use]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F: FnOnce() + 'static>(cancel: F) -> Subscription {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
