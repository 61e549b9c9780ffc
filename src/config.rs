//! Tuning parameters for the particle field.

use crate::color::Color;

/// One color stop of the cursor glow gradient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlowStop {
    /// Offset along the gradient radius, in [0, 1].
    pub offset: f64,
    pub color: Color,
}

/// Configuration for a particle field. The defaults reproduce the hero
/// background of the site.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Canvas area (px²) per spawned particle.
    pub area_per_particle: f64,
    /// Upper bound of each velocity component, in px per frame.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub particle_opacity: f64,
    /// Distance under which the cursor pushes particles away.
    pub repulsion_radius: f64,
    /// Push applied at zero distance; falls off linearly to 0 at the radius.
    pub repulsion_force: f64,
    /// Distance under which a particle is linked to the cursor.
    pub link_distance: f64,
    /// Line opacity at zero distance.
    pub link_opacity: f64,
    pub link_width: f64,
    pub glow_radius: f64,
    pub glow_stops: Vec<GlowStop>,
    /// RNG seed. Same seed = same field.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 25_000.0,
            max_speed: 0.1,
            min_radius: 0.5,
            max_radius: 2.0,
            particle_opacity: 0.6,
            repulsion_radius: 150.0,
            repulsion_force: 1.0,
            link_distance: 120.0,
            link_opacity: 0.3,
            link_width: 0.5,
            glow_radius: 300.0,
            glow_stops: vec![
                GlowStop {
                    offset: 0.0,
                    color: Color::CYAN.with_opacity(0.1),
                },
                GlowStop {
                    offset: 0.4,
                    color: Color::VIOLET.with_opacity(0.05),
                },
                GlowStop {
                    offset: 1.0,
                    color: Color::TRANSPARENT,
                },
            ],
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Number of particles spawned on a `width` x `height` surface.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        if width <= 0.0 || height <= 0.0 || self.area_per_particle <= 0.0 {
            return 0;
        }
        ((width * height) / self.area_per_particle).floor() as usize
    }
}
