use thiserror::Error;

/// Why a ball placement was refused. Recovered locally — the board simply
/// stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("placement would overlap an existing ball")]
    Overlapping,
    #[error("placement point is outside the felt")]
    OutsideFelt,
}

/// A host handed us a numeric code we don't recognise. State is left
/// untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown table size code {0}")]
    InvalidTableSize(u32),
    #[error("unknown ball kind code {0}")]
    UnknownBallKind(u32),
}
