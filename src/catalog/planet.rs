//! Planet record and its nested attribute groups.

use serde::{Deserialize, Serialize};

/// Surface temperature range in degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Body classification and atmospheric gases (ordered by abundance).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    #[serde(rename = "type")]
    pub kind: String,
    pub atmosphere: Vec<String>,
}

/// Static description of one catalog body (the Sun or a planet).
///
/// Field names serialize in camelCase so catalog overrides can reuse the
/// same JSON layout the web data files use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Unique lookup key, e.g. `"earth"`.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Equatorial diameter in km.
    pub diameter: f64,
    /// Mass in kg, kept as display text.
    pub mass: String,
    /// Mean distance from the Sun in million km (0 for the Sun).
    pub distance_from_sun: f64,
    /// Orbital period in Earth days (0 for the Sun).
    pub orbital_period: f64,
    /// Sidereal rotation in Earth days. Negative means retrograde.
    pub rotation_period: f64,
    pub temperature: Temperature,
    pub moons: u32,
    pub has_rings: bool,
    /// Hex color, e.g. `"#6B93D6"`.
    pub color: String,
    pub texture: String,
    pub fun_facts: Vec<String>,
    pub composition: Composition,
    /// Orbital order: 0 for the Sun, 1..=8 outward.
    pub position: u32,
    /// Orbit angular speed in radians per second of animation time.
    pub orbit_speed: f32,
    /// Self-rotation in radians per animation frame tick.
    pub rotation_speed: f32,
    /// Artistic size used in visual scale mode.
    pub size: f32,
    /// Size relative to Earth, used in realistic scale mode.
    pub real_size: f32,
}

impl Planet {
    /// Whether this body is the central star.
    pub fn is_sun(&self) -> bool {
        self.position == 0
    }

    /// Whether the body spins opposite to its orbit.
    pub fn is_retrograde(&self) -> bool {
        self.rotation_period < 0.0
    }

    /// Display color as sRGB bytes. Falls back to mid grey for malformed hex.
    pub fn rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.color).unwrap_or([128, 128, 128])
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into sRGB bytes.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
