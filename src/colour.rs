/// An 8-bit RGBA colour, as drawn onto raster frames
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour from red, green, and blue components
    pub fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with an explicit alpha component
    pub fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new opaque grey where all three components equal `g`
    pub fn new_grey(g: u8) -> Colour {
        Colour {
            r: g,
            g,
            b: g,
            a: 255,
        }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::new_rgba(c.0, c.1, c.2, c.3)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Colour = Colour {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}
