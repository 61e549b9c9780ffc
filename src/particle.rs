// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    // Random particle somewhere inside a width x height surface
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = wrap(rng.gen::<f64>() * width, width);
        let pos_y = wrap(rng.gen::<f64>() * height, height);
        let vel_x = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let vel_y = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let color = if rng.gen_bool(0.5) {
            Color::PALETTE[0]
        } else {
            Color::PALETTE[1]
        };
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, color)
    }

    pub fn drift(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.wrap(width, height);
    }

    // Pushes the particle away from the cursor, then keeps it on the surface
    pub fn repel(&mut self, cursor: Vector2<f64>, width: f64, height: f64, config: &FieldConfig) {
        let offset = vecmath::vec2_sub(self.pos, cursor);
        let push = repulsion(offset, self.vel, config);
        if push == [0.0, 0.0] {
            return;
        }
        self.pos = vecmath::vec2_add(self.pos, push);
        self.wrap(width, height);
    }

    pub fn distance_to(&self, point: Vector2<f64>) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(point, self.pos))
    }

    fn wrap(&mut self, width: f64, height: f64) {
        self.pos[0] = wrap(self.pos[0], width);
        self.pos[1] = wrap(self.pos[1], height);
    }
}

// Toroidal wrap into [0, bound)
pub fn wrap(value: f64, bound: f64) -> f64 {
    let wrapped = value.rem_euclid(bound);
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

// Linear falloff: full force at the cursor, nothing at the repulsion radius
pub fn repulsion_strength(distance: f64, config: &FieldConfig) -> f64 {
    if distance >= config.repulsion_radius {
        0.0
    } else {
        (config.repulsion_radius - distance) / config.repulsion_radius * config.repulsion_force
    }
}

// Displacement for a particle at `offset` from the cursor. A particle sitting
// exactly on the cursor is pushed along its own heading, or +x when at rest.
pub fn repulsion(offset: Vector2<f64>, heading: Vector2<f64>, config: &FieldConfig) -> Vector2<f64> {
    let distance = vecmath::vec2_len(offset);
    let strength = repulsion_strength(distance, config);
    if strength <= 0.0 {
        return [0.0, 0.0];
    }
    let direction = if distance > 0.0 {
        vecmath::vec2_scale(offset, 1.0 / distance)
    } else if vecmath::vec2_len(heading) > 0.0 {
        vecmath::vec2_normalized(heading)
    } else {
        [1.0, 0.0]
    };
    vecmath::vec2_scale(direction, strength)
}
