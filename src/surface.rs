//! Drawing seam between the simulation and whatever it paints on.

use crate::color::Color;
use crate::config::GlowStop;
use vecmath::Vector2;

/// A 2-D drawing target. The browser implementation wraps a canvas 2-D
/// context; tests record the calls.
pub trait Surface {
    /// Called when the simulation is resized, before the field is reseeded.
    fn resize(&mut self, _width: f64, _height: f64) {}

    /// Erases the `width` x `height` area starting at the origin.
    fn clear(&mut self, width: f64, height: f64);

    /// Paints a radial gradient disc with screen compositing, so it brightens
    /// what is underneath instead of covering it.
    fn glow(&mut self, center: Vector2<f64>, radius: f64, stops: &[GlowStop]);

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color);
}
