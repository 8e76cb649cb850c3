//! Ordered ball storage with placement validation and hit lookup.

use glam::Vec2;

use crate::api::error::PlacementError;
use crate::api::types::{BallId, BallKind};
use crate::core::layout::TableLayout;

/// A ball on the table.
#[derive(Debug, Clone)]
pub struct Ball {
    pub id: BallId,
    pub pos: Vec2,
    pub kind: BallKind,
}

/// Flat Vec storage, like the scene it replaces. Insertion order is
/// meaningful here: hit-test ties resolve to the earliest-placed ball, so
/// removal shifts instead of swapping.
pub struct BallRegistry {
    balls: Vec<Ball>,
    next_id: u32,
}

impl BallRegistry {
    pub fn new() -> Self {
        Self {
            balls: Vec::with_capacity(16),
            next_id: 1,
        }
    }

    /// Place a new ball, enforcing containment and non-overlap. On success
    /// the ball is appended and its id returned.
    pub fn place(
        &mut self,
        kind: BallKind,
        pos: Vec2,
        layout: &TableLayout,
    ) -> Result<BallId, PlacementError> {
        if !layout.contains_ball_center(pos) {
            return Err(PlacementError::OutsideFelt);
        }
        if self.any_overlap(pos, layout.ball_radius, None) {
            return Err(PlacementError::Overlapping);
        }
        let id = BallId(self.next_id);
        self.next_id += 1;
        self.balls.push(Ball { id, pos, kind });
        Ok(id)
    }

    /// Remove by id. Returns the removed ball, or None if already gone.
    pub fn remove(&mut self, id: BallId) -> Option<Ball> {
        let idx = self.balls.iter().position(|b| b.id == id)?;
        Some(self.balls.remove(idx))
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    /// First ball (insertion order) whose center lies within `ball_radius`
    /// of the query point.
    pub fn find_at(&self, pos: Vec2, ball_radius: f32) -> Option<&Ball> {
        self.balls.iter().find(|b| b.pos.distance(pos) <= ball_radius)
    }

    /// Would a ball centered at `pos` violate the non-overlap invariant
    /// against any ball other than `excluding`?
    pub fn any_overlap(&self, pos: Vec2, ball_radius: f32, excluding: Option<BallId>) -> bool {
        self.balls
            .iter()
            .filter(|b| Some(b.id) != excluding)
            .any(|b| b.pos.distance(pos) < ball_radius * 2.0)
    }

    /// Re-fit balls after the table geometry changed: clamp each into the
    /// new felt, dropping later-placed balls whose clamped position would
    /// overlap an earlier one.
    pub fn reconcile(&mut self, layout: &TableLayout) {
        let mut kept: Vec<Ball> = Vec::with_capacity(self.balls.len());
        for ball in self.balls.drain(..) {
            let pos = layout.clamp_ball_center(ball.pos);
            if kept
                .iter()
                .any(|k| k.pos.distance(pos) < layout.ball_radius * 2.0)
            {
                log::warn!("ball {:?} dropped during re-layout (no room)", ball.id);
                continue;
            }
            kept.push(Ball { pos, ..ball });
        }
        self.balls = kept;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn clear(&mut self) {
        self.balls.clear();
    }
}

impl Default for BallRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::TableSize;

    fn layout() -> TableLayout {
        TableLayout::compute(1000.0, 600.0, TableSize::NineFoot)
    }

    fn felt_center(layout: &TableLayout) -> Vec2 {
        layout.origin + layout.size / 2.0
    }

    #[test]
    fn place_at_center_then_reject_duplicate() {
        let layout = layout();
        let mut reg = BallRegistry::new();
        let center = felt_center(&layout);

        reg.place(BallKind::Cue, center, &layout).unwrap();
        assert_eq!(reg.len(), 1);

        // Same point again: overlapping, registry unchanged.
        let err = reg.place(BallKind::Solid(8), center, &layout).unwrap_err();
        assert_eq!(err, PlacementError::Overlapping);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn place_outside_felt_is_rejected() {
        let layout = layout();
        let mut reg = BallRegistry::new();
        let err = reg
            .place(BallKind::Cue, layout.origin - Vec2::splat(50.0), &layout)
            .unwrap_err();
        assert_eq!(err, PlacementError::OutsideFelt);
        assert!(reg.is_empty());

        // A center closer to the edge than one ball radius also fails.
        let rim = Vec2::new(layout.origin.x + layout.ball_radius * 0.5, felt_center(&layout).y);
        assert!(reg.place(BallKind::Cue, rim, &layout).is_err());
    }

    #[test]
    fn find_at_prefers_earliest_placed() {
        let layout = layout();
        let mut reg = BallRegistry::new();
        let center = felt_center(&layout);
        let a = reg.place(BallKind::Cue, center, &layout).unwrap();
        let b = reg
            .place(
                BallKind::Solid(8),
                center + Vec2::new(layout.ball_radius * 2.0, 0.0),
                &layout,
            )
            .unwrap();

        // Query point on the shared tangent is within one radius of both
        // centers only for the second ball; nudge onto the overlap of the
        // two hit disks to exercise the tie.
        let probe = center + Vec2::new(layout.ball_radius, 0.0);
        let hit = reg.find_at(probe, layout.ball_radius).unwrap();
        assert_eq!(hit.id, a);
        assert_ne!(hit.id, b);
    }

    #[test]
    fn remove_preserves_order() {
        let layout = layout();
        let mut reg = BallRegistry::new();
        let center = felt_center(&layout);
        let step = Vec2::new(layout.ball_radius * 3.0, 0.0);
        let a = reg.place(BallKind::Solid(1), center - step, &layout).unwrap();
        let b = reg.place(BallKind::Solid(2), center, &layout).unwrap();
        let c = reg.place(BallKind::Solid(3), center + step, &layout).unwrap();

        reg.remove(b);
        let order: Vec<BallId> = reg.iter().map(|b| b.id).collect();
        assert_eq!(order, vec![a, c]);

        // Removing again is a no-op.
        assert!(reg.remove(b).is_none());
    }

    #[test]
    fn reconcile_clamps_and_drops() {
        let big = TableLayout::compute(2000.0, 1200.0, TableSize::NineFoot);
        let mut reg = BallRegistry::new();
        let center = big.origin + big.size / 2.0;
        reg.place(BallKind::Cue, center, &big).unwrap();
        reg.place(
            BallKind::Solid(8),
            Vec2::new(center.x, big.origin.y + big.ball_radius),
            &big,
        )
        .unwrap();

        let small = TableLayout::compute(300.0, 200.0, TableSize::NineFoot);
        reg.reconcile(&small);

        for ball in reg.iter() {
            assert!(small.contains_ball_center(ball.pos));
        }
        let positions: Vec<Vec2> = reg.iter().map(|b| b.pos).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a.distance(*b) >= small.ball_radius * 2.0);
            }
        }
    }
}
