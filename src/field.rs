//! The particle field: a set of drifting points pushed away from the cursor.
//!
//! `Field` owns the particles, the surface bounds and the cursor. It knows
//! nothing about the browser: frames come from `animation::Simulation`, pixels
//! go out through a `Surface`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::FieldConfig;
use crate::cursor::CursorState;
use crate::logging::Timer;
use crate::particle::Particle;

pub struct Field {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    cursor: CursorState,
    rng: ChaCha8Rng,
}

impl Field {
    /// Empty field; nothing is spawned until `initialize` gets real bounds.
    pub fn new(config: FieldConfig) -> Field {
        let seed = match config.seed {
            Some(seed) => seed,
            None => rand::thread_rng().gen(),
        };
        Field {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            cursor: CursorState::Absent,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the whole particle set with a fresh one sized for
    /// `width` x `height`. Degenerate bounds leave the field empty.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.particles.clear();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            self.width = 0.0;
            self.height = 0.0;
            return;
        }
        self.width = width;
        self.height = height;

        let count = self.config.particle_count(width, height);
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&mut self.rng, width, height, &self.config);
            self.particles.push(p);
        }
    }

    // Called for every window resize event, so it stays quiet
    pub fn resize(&mut self, width: f64, height: f64) {
        self.initialize(width, height);
    }

    pub fn set_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }

    /// Moves the cursor to canvas-local `(x, y)`, or hides it when that point
    /// is off the surface.
    pub fn point_at(&mut self, x: f64, y: f64) {
        self.cursor = CursorState::locate(x, y, self.width, self.height);
    }

    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Advances every particle one frame.
    pub fn tick(&mut self) {
        if !self.is_ready() {
            return;
        }
        let _timer = Timer::new("Field::tick");
        let (width, height) = (self.width, self.height);
        let cursor = self.cursor.position();
        for particle in &mut self.particles {
            particle.drift(width, height);
            if let Some(cursor) = cursor {
                particle.repel(cursor, width, height, &self.config);
            }
        }
    }

    /// Paints the current frame: glow under the cursor, particles, and the
    /// lines linking nearby particles to the cursor.
    pub fn draw<S: crate::surface::Surface + ?Sized>(&self, surface: &mut S) {
        if !self.is_ready() {
            return;
        }
        let _timer = Timer::new("Field::draw");
        let config = &self.config;
        surface.clear(self.width, self.height);

        let cursor = self.cursor.position();
        if let Some(cursor) = cursor {
            surface.glow(cursor, config.glow_radius, &config.glow_stops);
        }

        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, p.color.with_opacity(config.particle_opacity));

            if let Some(cursor) = cursor {
                let distance = p.distance_to(cursor);
                if distance < config.link_distance {
                    let opacity = (1.0 - distance / config.link_distance) * config.link_opacity;
                    surface.stroke_line(p.pos, cursor, config.link_width, p.color.with_opacity(opacity));
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::particle;
    use crate::surface::recording::{DrawCall, RecordingSurface};

    const EPSILON: f64 = 1e-9;

    fn seeded(width: f64, height: f64) -> Field {
        let mut field = Field::new(FieldConfig::seeded(1234));
        field.initialize(width, height);
        field
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 1.0, Color::CYAN)
    }

    fn assert_in_bounds(field: &Field) {
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < field.width(), "x out of bounds: {:?}", p.pos);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < field.height(), "y out of bounds: {:?}", p.pos);
        }
    }

    // ---- Initialize ----

    #[test]
    fn initialize_count_follows_area() {
        assert_eq!(seeded(500.0, 500.0).particles().len(), 10);
        assert_eq!(seeded(1280.0, 720.0).particles().len(), 36);
        assert_eq!(seeded(150.0, 150.0).particles().len(), 0);
    }

    #[test]
    fn initialize_replaces_previous_set() {
        let mut field = seeded(1000.0, 1000.0);
        let before = field.particles().to_vec();
        field.initialize(1000.0, 1000.0);
        assert_eq!(field.particles().len(), 40);
        assert_ne!(field.particles(), &before[..]);
    }

    #[test]
    fn same_seed_same_field() {
        let a = seeded(800.0, 600.0);
        let b = seeded(800.0, 600.0);
        assert_eq!(a.particles(), b.particles());

        let mut c = Field::new(FieldConfig::seeded(99));
        c.initialize(800.0, 600.0);
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn zero_sized_surface_is_inert() {
        let mut field = seeded(0.0, 400.0);
        assert!(!field.is_ready());
        assert!(field.particles().is_empty());

        field.set_cursor(CursorState::Present([1.0, 1.0]));
        field.tick();
        let mut surface = RecordingSurface::default();
        field.draw(&mut surface);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let field = seeded(f64::NAN, 400.0);
        assert!(!field.is_ready());
        let field = seeded(f64::INFINITY, 400.0);
        assert!(!field.is_ready());
    }

    // ---- Tick ----

    #[test]
    fn particles_stay_in_bounds() {
        let mut field = seeded(640.0, 480.0);
        for frame in 0..5000 {
            // sweep the cursor so repulsion pushes across edges too
            let x = (frame % 640) as f64;
            field.set_cursor(CursorState::Present([x, 2.0]));
            field.tick();
        }
        assert_in_bounds(&field);
        field.set_cursor(CursorState::Absent);
        for _ in 0..5000 {
            field.tick();
        }
        assert_in_bounds(&field);
    }

    #[test]
    fn absent_cursor_moves_by_velocity_only() {
        let mut field = seeded(500.0, 500.0);
        field.set_cursor(CursorState::Absent);
        let before = field.particles().to_vec();
        field.tick();
        for (old, new) in before.iter().zip(field.particles()) {
            assert_eq!(new.pos[0], particle::wrap(old.pos[0] + old.vel[0], 500.0));
            assert_eq!(new.pos[1], particle::wrap(old.pos[1] + old.vel[1], 500.0));
            assert_eq!(new.vel, old.vel);
        }
    }

    #[test]
    fn repulsion_only_inside_radius() {
        let mut field = seeded(500.0, 500.0);
        *field.particles_mut() = vec![still(300.0, 0.0), still(50.0, 0.0)];
        field.set_cursor(CursorState::Present([0.0, 0.0]));
        field.tick();

        let far = field.particles()[0];
        assert_eq!(far.pos, [300.0, 0.0]);

        let near = field.particles()[1];
        assert!((near.pos[0] - (50.0 + 100.0 / 150.0)).abs() < EPSILON);
        assert_eq!(near.pos[1], 0.0);
    }

    #[test]
    fn closer_particles_are_pushed_harder() {
        let mut field = seeded(1000.0, 1000.0);
        *field.particles_mut() = vec![
            still(510.0, 500.0),
            still(560.0, 500.0),
            still(620.0, 500.0),
            still(649.0, 500.0),
        ];
        field.set_cursor(CursorState::Present([500.0, 500.0]));
        let before = field.particles().to_vec();
        field.tick();
        let pushes: Vec<f64> = before
            .iter()
            .zip(field.particles())
            .map(|(old, new)| new.pos[0] - old.pos[0])
            .collect();
        for pair in pushes.windows(2) {
            assert!(pair[0] > pair[1], "{:?}", pushes);
        }
        assert!(pushes[3] > 0.0);
    }

    // ---- Draw ----

    #[test]
    fn absent_cursor_draws_no_glow_or_links() {
        let mut field = seeded(500.0, 500.0);
        field.set_cursor(CursorState::Absent);
        let mut surface = RecordingSurface::default();
        field.draw(&mut surface);

        assert_eq!(
            surface.calls[0],
            DrawCall::Clear {
                width: 500.0,
                height: 500.0
            }
        );
        assert_eq!(surface.glows(), 0);
        assert_eq!(surface.circles(), 10);
        assert!(surface.lines().is_empty());
    }

    #[test]
    fn present_cursor_draws_glow_first() {
        let mut field = seeded(500.0, 500.0);
        field.set_cursor(CursorState::Present([250.0, 250.0]));
        let mut surface = RecordingSurface::default();
        field.draw(&mut surface);

        match &surface.calls[1] {
            DrawCall::Glow {
                center,
                radius,
                stops,
            } => {
                assert_eq!(*center, [250.0, 250.0]);
                assert_eq!(*radius, 300.0);
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[2].color, Color::TRANSPARENT);
            }
            other => panic!("expected glow, got {:?}", other),
        }
        assert_eq!(surface.glows(), 1);
    }

    #[test]
    fn particles_drawn_at_fixed_opacity() {
        let mut field = seeded(500.0, 500.0);
        *field.particles_mut() = vec![Particle::new([5.0, 6.0], [0.0, 0.0], 1.5, Color::VIOLET)];
        let mut surface = RecordingSurface::default();
        field.draw(&mut surface);
        assert_eq!(
            surface.calls[1],
            DrawCall::Circle {
                center: [5.0, 6.0],
                radius: 1.5,
                color: Color::VIOLET.with_opacity(0.6),
            }
        );
    }

    #[test]
    fn links_fade_with_distance() {
        let mut field = seeded(500.0, 500.0);
        *field.particles_mut() = vec![still(160.0, 100.0), still(100.0, 220.0), still(100.0, 300.0)];
        field.set_cursor(CursorState::Present([100.0, 100.0]));
        let mut surface = RecordingSurface::default();
        field.draw(&mut surface);

        // 60 away links at half strength; exactly 120 and beyond do not link
        let lines = surface.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            *lines[0],
            DrawCall::Line {
                from: [160.0, 100.0],
                to: [100.0, 100.0],
                width: 0.5,
                color: Color::CYAN.with_opacity(0.15),
            }
        );
        match lines[0] {
            DrawCall::Line { color, .. } => {
                assert_eq!(color.opacity(), (1.0 - 60.0 / 120.0) * 0.3);
                assert_eq!(color.to_css(), "rgba(0, 240, 255, 0.15)");
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn links_near_the_edge_stay_faintly_visible() {
        let mut field = seeded(500.0, 500.0);
        *field.particles_mut() = vec![still(219.5, 100.0)];
        field.set_cursor(CursorState::Present([100.0, 100.0]));
        let mut surface = RecordingSurface::default();
        field.draw(&mut surface);

        match surface.lines()[0] {
            DrawCall::Line { color, .. } => {
                assert!(color.opacity() > 0.0);
                assert!((color.opacity() - 0.00125).abs() < 1e-12);
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    // ---- Resize / cursor ----

    #[test]
    fn resize_reseeds_within_new_bounds() {
        let mut field = seeded(1920.0, 1080.0);
        field.resize(800.0, 300.0);
        assert_eq!(field.particles().len(), 9);
        assert_in_bounds(&field);
    }

    #[test]
    fn pointer_outside_hides_cursor() {
        let mut field = seeded(500.0, 500.0);
        field.point_at(20.0, 30.0);
        assert_eq!(field.cursor(), CursorState::Present([20.0, 30.0]));

        field.point_at(20.0, 501.0);
        assert_eq!(field.cursor(), CursorState::Absent);

        let mut surface = RecordingSurface::default();
        field.draw(&mut surface);
        assert_eq!(surface.glows(), 0);
        assert!(surface.lines().is_empty());
    }
}
