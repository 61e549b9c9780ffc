//! Frame loop lifecycle.
//!
//! `Simulation` ties a `Field` to a `Surface` and a `FrameScheduler` and runs
//! one tick + draw per scheduled frame. It is either `Running` (exactly one
//! frame pending) or `Stopped` (none pending). Stopping cancels the pending
//! frame, and a frame delivered while stopped is ignored, so nothing moves or
//! paints after `stop` returns.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cursor::CursorState;
use crate::events::{EventSource, Subscription};
use crate::field::Field;
use crate::surface::Surface;

pub type FrameId = i32;

/// Per-repaint callback source, `requestAnimationFrame` in the browser.
pub trait FrameScheduler {
    /// Asks the host to call `Simulation::on_frame` once before the next
    /// repaint.
    fn request_frame(&mut self) -> Result<FrameId, String>;

    /// Withdraws a request; the frame must not be delivered afterwards.
    fn cancel_frame(&mut self, id: FrameId);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Stopped,
}

pub struct Simulation<S: Surface, F: FrameScheduler> {
    field: Field,
    surface: S,
    scheduler: F,
    status: Status,
    pending_frame: Option<FrameId>,
}

impl<S: Surface, F: FrameScheduler> Simulation<S, F> {
    pub fn new(field: Field, surface: S, scheduler: F) -> Self {
        Simulation {
            field,
            surface,
            scheduler,
            status: Status::Stopped,
            pending_frame: None,
        }
    }

    pub fn start(&mut self) {
        if self.status == Status::Running {
            return;
        }
        match self.scheduler.request_frame() {
            Ok(id) => {
                self.pending_frame = Some(id);
                self.status = Status::Running;
            }
            Err(e) => error!("particle field could not start: {}", e),
        }
    }

    pub fn stop(&mut self) {
        if self.status == Status::Stopped {
            return;
        }
        self.status = Status::Stopped;
        if let Some(id) = self.pending_frame.take() {
            self.scheduler.cancel_frame(id);
        }
    }

    /// Runs one frame and schedules the next one.
    pub fn on_frame(&mut self) {
        if self.status != Status::Running {
            return;
        }
        self.pending_frame = None;
        self.field.tick();
        self.field.draw(&mut self.surface);

        match self.scheduler.request_frame() {
            Ok(id) => self.pending_frame = Some(id),
            Err(e) => {
                error!("particle field stopped, next frame not scheduled: {}", e);
                self.status = Status::Stopped;
            }
        }
    }

    /// Reseeds the field for the given bounds without touching the run state.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.field.initialize(width, height);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.field.resize(width, height);
    }

    pub fn set_cursor(&mut self, cursor: CursorState) {
        self.field.set_cursor(cursor);
    }

    pub fn point_at(&mut self, x: f64, y: f64) {
        self.field.point_at(x, y);
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}

impl<S: Surface, F: FrameScheduler> Drop for Simulation<S, F> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Routes pointer moves and resizes from `events` into the shared simulation.
/// The listeners hold only a weak reference and stay registered until the
/// returned subscriptions are dropped.
pub fn listen<S, F, E>(
    simulation: &Rc<RefCell<Simulation<S, F>>>,
    events: &E,
) -> Result<Vec<Subscription>, String>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
    E: EventSource + ?Sized,
{
    let sim = Rc::downgrade(simulation);
    let pointer = events.subscribe_pointer_move(Box::new(move |e| {
        if let Some(sim) = sim.upgrade() {
            if let Ok(mut sim) = sim.try_borrow_mut() {
                sim.point_at(e.x, e.y);
            }
        }
    }))?;

    let sim = Rc::downgrade(simulation);
    let resize = events.subscribe_resize(Box::new(move |e| {
        if let Some(sim) = sim.upgrade() {
            if let Ok(mut sim) = sim.try_borrow_mut() {
                sim.resize(e.width, e.height);
            }
        }
    }))?;

    Ok(vec![pointer, resize])
}
