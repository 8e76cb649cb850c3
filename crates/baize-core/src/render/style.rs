//! Table colors. Hosts may push a JSON style sheet to override any entry;
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::api::types::BallKind;
use crate::render::canvas::Rgba;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub felt: Rgba,
    pub rail: Rgba,
    pub pocket: Rgba,
    pub diamond: Rgba,
    /// Ring drawn around the selected ball.
    pub ring: Rgba,
    /// Ring color while the dragged ball hangs over a pocket mouth.
    pub ring_warning: Rgba,
    /// Table-size label on the bottom rail.
    pub label: Rgba,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            felt: Rgba::rgb8(0x0a, 0x5d, 0x2f),
            rail: Rgba::rgb8(0x65, 0x43, 0x21),
            pocket: Rgba::BLACK,
            diamond: Rgba::WHITE,
            ring: Rgba::WHITE.with_alpha(0.8),
            ring_warning: Rgba::rgb8(0xe8, 0x5c, 0x1e),
            label: Rgba::WHITE.with_alpha(0.65),
        }
    }
}

impl TableStyle {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Fill color for a ball kind. Stripes share the palette of their solid
/// counterpart; the band rendering differentiates them.
pub fn ball_color(kind: BallKind) -> Rgba {
    match kind {
        BallKind::Cue => Rgba::WHITE,
        BallKind::Solid(n) | BallKind::Stripe(n) => numbered_color(n),
    }
}

fn numbered_color(n: u8) -> Rgba {
    let base = if n > 8 { n - 8 } else { n };
    match base {
        1 => Rgba::rgb(1.0, 0.84, 0.0),   // yellow
        2 => Rgba::rgb(0.0, 0.0, 0.7),    // blue
        3 => Rgba::rgb(0.86, 0.0, 0.0),   // red
        4 => Rgba::rgb(0.39, 0.0, 0.55),  // purple
        5 => Rgba::rgb(1.0, 0.39, 0.0),   // orange
        6 => Rgba::rgb(0.0, 0.47, 0.0),   // green
        7 => Rgba::rgb(0.51, 0.12, 0.12), // maroon
        _ => Rgba::rgb(0.04, 0.04, 0.04), // black
    }
}
