// Simple color struct: 8 bit rgb channels and an opacity in [0, 1]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const CYAN: Color = Color::rgb(0, 240, 255);
    pub const VIOLET: Color = Color::rgb(112, 0, 255);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    // The two colors a particle can be spawned with
    pub const PALETTE: [Color; 2] = [Color::CYAN, Color::VIOLET];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    // Same rgb, alpha replaced by an opacity in [0, 1]
    pub fn with_opacity(self, opacity: f64) -> Color {
        Color {
            a: opacity.max(0.0).min(1.0),
            ..self
        }
    }

    pub fn opacity(&self) -> f64 {
        self.a
    }

    // Formats as a CSS color usable for canvas fill and stroke styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
