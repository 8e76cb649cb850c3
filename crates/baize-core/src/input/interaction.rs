//! Pointer-driven interaction: selection, dragging, placement and pocket
//! capture, expressed as an explicit state machine.

use glam::Vec2;

use crate::api::types::{BallId, BallKind, PointerId};
use crate::core::layout::TableLayout;
use crate::core::registry::BallRegistry;

/// The interaction state. One tagged value instead of an `is_dragging` flag
/// next to a nullable selection — the two can't drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Selected(BallId),
    Dragging {
        ball: BallId,
        /// Pointer-to-ball-center offset captured at drag start and held
        /// constant through the gesture.
        grab: Vec2,
        /// The pointer that owns this gesture; only its up/cancel ends it.
        pointer: PointerId,
    },
}

/// What a pointer event did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    None,
    Selected(BallId),
    Deselected,
    Placed(BallId),
    PlacementRejected,
    Moved(BallId),
    MoveRejected,
    Pocketed(BallId),
    DragEnded(BallId),
}

pub struct Interaction {
    state: DragState,
    /// Ball type armed for the next placement, set by the host menu.
    pending_kind: Option<BallKind>,
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            pending_kind: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn selected(&self) -> Option<BallId> {
        match self.state {
            DragState::Idle => None,
            DragState::Selected(id) => Some(id),
            DragState::Dragging { ball, .. } => Some(ball),
        }
    }

    /// The pointer id holding an active drag, if any. Hosts mirror this into
    /// DOM setPointerCapture/releasePointerCapture.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match self.state {
            DragState::Dragging { pointer, .. } => Some(pointer),
            _ => None,
        }
    }

    pub fn pending_kind(&self) -> Option<BallKind> {
        self.pending_kind
    }

    pub fn arm_placement(&mut self, kind: BallKind) {
        self.pending_kind = Some(kind);
    }

    pub fn on_pointer_down(
        &mut self,
        p: Vec2,
        pointer: PointerId,
        layout: &TableLayout,
        balls: &mut BallRegistry,
    ) -> PointerOutcome {
        // Pressing any ball selects it and starts the drag in one motion.
        // The grab offset keeps the ball from snapping its center to the
        // pointer.
        if let Some(ball) = balls.find_at(p, layout.ball_radius) {
            let id = ball.id;
            self.state = DragState::Dragging {
                ball: id,
                grab: p - ball.pos,
                pointer,
            };
            return PointerOutcome::Selected(id);
        }

        // An outside tap with a selection is an explicit deselect; it also
        // disarms any pending placement.
        if self.selected().is_some() {
            self.state = DragState::Idle;
            self.pending_kind = None;
            return PointerOutcome::Deselected;
        }

        if let Some(kind) = self.pending_kind {
            if layout.contains_ball_center(p) {
                return match balls.place(kind, p, layout) {
                    Ok(id) => {
                        self.pending_kind = None;
                        PointerOutcome::Placed(id)
                    }
                    Err(err) => {
                        log::info!("placement rejected: {err}");
                        PointerOutcome::PlacementRejected
                    }
                };
            }
        }

        PointerOutcome::None
    }

    pub fn on_pointer_move(
        &mut self,
        p: Vec2,
        layout: &TableLayout,
        balls: &mut BallRegistry,
    ) -> PointerOutcome {
        let DragState::Dragging { ball, grab, .. } = self.state else {
            return PointerOutcome::None;
        };
        if balls.get(ball).is_none() {
            // Drag target vanished out from under us; quietly reset.
            self.state = DragState::Idle;
            return PointerOutcome::None;
        }

        let candidate = p - grab;
        // Over a pocket mouth the rails stop constraining: the ball must be
        // free to cross the felt boundary and drop in. Everywhere else it
        // clamps against the cushion face, one axis at a time.
        let resolved = if layout.pocket_at(candidate).is_some() {
            candidate
        } else {
            layout.clamp_ball_center(candidate)
        };

        // Overlap rejection wins over clamping: the move is discarded whole.
        if balls.any_overlap(resolved, layout.ball_radius, Some(ball)) {
            return PointerOutcome::MoveRejected;
        }

        if let Some(entry) = balls.get_mut(ball) {
            entry.pos = resolved;
        }
        PointerOutcome::Moved(ball)
    }

    pub fn on_pointer_up(
        &mut self,
        pointer: PointerId,
        layout: &TableLayout,
        balls: &mut BallRegistry,
    ) -> PointerOutcome {
        let DragState::Dragging { ball, pointer: captured, .. } = self.state else {
            return PointerOutcome::None;
        };
        if pointer != captured {
            return PointerOutcome::None;
        }

        let Some(pos) = balls.get(ball).map(|b| b.pos) else {
            self.state = DragState::Idle;
            return PointerOutcome::None;
        };

        if layout.pocket_at(pos).is_some() {
            balls.remove(ball);
            self.state = DragState::Idle;
            return PointerOutcome::Pocketed(ball);
        }

        // Drag ends but the selection sticks until an explicit outside tap.
        self.state = DragState::Selected(ball);
        PointerOutcome::DragEnded(ball)
    }

    /// Cancel carries the same transitions as up: the gesture ends, capture
    /// is released, and a ball parked over a pocket still falls in.
    pub fn on_pointer_cancel(
        &mut self,
        pointer: PointerId,
        layout: &TableLayout,
        balls: &mut BallRegistry,
    ) -> PointerOutcome {
        self.on_pointer_up(pointer, layout, balls)
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}
