pub mod api;
pub mod core;
pub mod input;
pub mod render;

// Re-export key types at crate root for convenience
pub use crate::api::error::{ConfigError, PlacementError};
pub use crate::api::session::TableSession;
pub use crate::api::types::{BallId, BallKind, PointerId};
pub use crate::core::layout::{Pocket, TableLayout, TableSize};
pub use crate::core::registry::{Ball, BallRegistry};
pub use crate::input::interaction::{DragState, Interaction, PointerOutcome};
pub use crate::render::canvas::{Canvas, CanvasVertex, Rgba};
pub use crate::render::style::TableStyle;
