use crate::api::error::ConfigError;

/// Stable identifier for a ball in the registry.
///
/// Selection holds one of these rather than a reference, so a ball that was
/// removed mid-gesture resolves to a clean lookup miss instead of a dangling
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BallId(pub u32);

/// Host-side pointer identifier (PointerEvent.pointerId).
///
/// Recorded at drag start so that only up/cancel events from the capturing
/// pointer can end the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerId(pub i32);

/// Render tag for a placed ball. Purely cosmetic — interaction treats every
/// kind identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Cue,
    /// Solid-colour ball, numbered 1-8.
    Solid(u8),
    /// Striped ball, numbered 9-15.
    Stripe(u8),
}

impl BallKind {
    /// Decode the numeric code the host menu sends over the wasm boundary:
    /// 0 = cue, 1-8 = solids, 9-15 = stripes.
    pub fn from_code(code: u32) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(Self::Cue),
            1..=8 => Ok(Self::Solid(code as u8)),
            9..=15 => Ok(Self::Stripe(code as u8)),
            _ => Err(ConfigError::UnknownBallKind(code)),
        }
    }

    /// The printed number, if this kind carries one.
    pub fn number(&self) -> Option<u8> {
        match self {
            Self::Cue => None,
            Self::Solid(n) | Self::Stripe(n) => Some(*n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_round_trip() {
        assert_eq!(BallKind::from_code(0).unwrap(), BallKind::Cue);
        assert_eq!(BallKind::from_code(8).unwrap(), BallKind::Solid(8));
        assert_eq!(BallKind::from_code(9).unwrap(), BallKind::Stripe(9));
        assert!(BallKind::from_code(16).is_err());
    }

    #[test]
    fn cue_has_no_number() {
        assert_eq!(BallKind::Cue.number(), None);
        assert_eq!(BallKind::Solid(8).number(), Some(8));
        assert_eq!(BallKind::Stripe(12).number(), Some(12));
    }
}
