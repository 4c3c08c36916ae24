use crate::WordCloudError;

/// The colour a word is drawn in
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// RGB colour with transparency; all components range from 0.0 to 1.0
    RGBA { r: f32, g: f32, b: f32, a: f32 },
    /// Grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour with transparency. All components range from 0.0 to 1.0
    pub fn new_rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Colour::RGBA { r, g, b, a }
    }

    /// Create a new grey colour, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a hex colour such as `#1E792C` or `1E792C80`. Six digits give an opaque
    /// colour, eight digits carry alpha in the last byte.
    pub fn from_hex(hex: &str) -> Result<Colour, WordCloudError> {
        let invalid = || WordCloudError::InvalidColour(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
        if digits.len() == 8 {
            let a = byte(6)?;
            Ok(Colour::RGBA {
                r: r as f32 / 255.0,
                g: g as f32 / 255.0,
                b: b as f32 / 255.0,
                a: a as f32 / 255.0,
            })
        } else {
            Ok(Colour::new_rgb_bytes(r, g, b))
        }
    }

    /// The opacity of the colour, 1.0 for colours without an alpha component
    pub fn alpha(&self) -> f32 {
        match self {
            Colour::RGBA { a, .. } => *a,
            _ => 1.0,
        }
    }

    /// The same colour with its alpha replaced, clamped to 0.0..=1.0
    pub fn with_alpha(&self, alpha: f32) -> Colour {
        let a = alpha.clamp(0.0, 1.0);
        match *self {
            Colour::RGB { r, g, b } | Colour::RGBA { r, g, b, .. } => Colour::RGBA { r, g, b, a },
            Colour::Grey { g } => Colour::RGBA {
                r: g,
                g,
                b: g,
                a,
            },
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        let unit = |c: f32| (0.0..=1.0).contains(&c);
        match *self {
            Colour::RGB { r, g, b } => unit(r) && unit(g) && unit(b),
            Colour::RGBA { r, g, b, a } => unit(r) && unit(g) && unit(b) && unit(a),
            Colour::Grey { g } => unit(g),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T, T)> for Colour {
    fn from(c: (T, T, T, T)) -> Self {
        Colour::RGBA {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
            a: c.3.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 2.0 / 3.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const FOREST_GREEN: Colour = Colour::RGB {
        r: 30.0 / 255.0,
        g: 121.0 / 255.0,
        b: 44.0 / 255.0,
    };
    pub const ORANGE: Colour = Colour::RGB {
        r: 1.0,
        g: 0.5,
        b: 0.0,
    };
}
