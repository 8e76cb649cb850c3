//! The table session: one self-contained board instance.
//!
//! Hosts own the drawing surface and event wiring; they forward resize,
//! menu and pointer events here and read back the tessellated frame. All
//! state lives on the session, so several independent boards can coexist
//! in one process.

use glam::Vec2;

use crate::api::types::{BallKind, PointerId};
use crate::core::layout::{TableLayout, TableSize};
use crate::core::registry::BallRegistry;
use crate::input::interaction::{Interaction, PointerOutcome};
use crate::render::canvas::Canvas;
use crate::render::draw::draw_table;
use crate::render::style::TableStyle;

pub struct TableSession {
    viewport: Vec2,
    size: TableSize,
    layout: TableLayout,
    balls: BallRegistry,
    interaction: Interaction,
    style: TableStyle,
    canvas: Canvas,
}

impl TableSession {
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        let size = TableSize::REFERENCE;
        let mut session = Self {
            viewport: Vec2::new(viewport_w, viewport_h),
            size,
            layout: TableLayout::compute(viewport_w, viewport_h, size),
            balls: BallRegistry::new(),
            interaction: Interaction::new(),
            style: TableStyle::default(),
            canvas: Canvas::new(),
        };
        session.render();
        session
    }

    /// Viewport changed: recompute geometry wholesale and re-fit the balls.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.relayout();
    }

    /// Switch the nominal table size. The felt rectangle barely moves but
    /// every derived radius changes, so balls are re-fitted too.
    pub fn set_table_size(&mut self, size: TableSize) {
        if size != self.size {
            log::info!("table size -> {}", size.label());
        }
        self.size = size;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = TableLayout::compute(self.viewport.x, self.viewport.y, self.size);
        self.balls.reconcile(&self.layout);
        self.render();
    }

    /// Arm the next placement with a ball type chosen in the host menu.
    pub fn arm_placement(&mut self, kind: BallKind) {
        self.interaction.arm_placement(kind);
        self.render();
    }

    /// Replace the color sheet from a host-provided JSON document.
    pub fn load_style(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.style = TableStyle::from_json(json)?;
        self.render();
        Ok(())
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32, pointer_id: i32) -> PointerOutcome {
        let out = self.interaction.on_pointer_down(
            Vec2::new(x, y),
            PointerId(pointer_id),
            &self.layout,
            &mut self.balls,
        );
        self.render();
        out
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> PointerOutcome {
        let out =
            self.interaction
                .on_pointer_move(Vec2::new(x, y), &self.layout, &mut self.balls);
        self.render();
        out
    }

    pub fn on_pointer_up(&mut self, pointer_id: i32) -> PointerOutcome {
        let out =
            self.interaction
                .on_pointer_up(PointerId(pointer_id), &self.layout, &mut self.balls);
        if let PointerOutcome::Pocketed(id) = out {
            log::info!("ball {:?} pocketed", id);
        }
        self.render();
        out
    }

    pub fn on_pointer_cancel(&mut self, pointer_id: i32) -> PointerOutcome {
        let out = self.interaction.on_pointer_cancel(
            PointerId(pointer_id),
            &self.layout,
            &mut self.balls,
        );
        self.render();
        out
    }

    /// Rebuild the frame from current state. Handlers call this after every
    /// event, so the buffer always reflects the fully applied event.
    pub fn render(&mut self) {
        self.canvas.clear();
        draw_table(
            &mut self.canvas,
            &self.layout,
            &self.balls,
            &self.interaction,
            &self.style,
            self.size,
        );
    }

    // -- Read accessors --

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn balls(&self) -> &BallRegistry {
        &self.balls
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn table_size(&self) -> TableSize {
        self.size
    }

    /// Pointer id to mirror into DOM pointer capture, if a drag is active.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.interaction.captured_pointer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ConfigError;
    use crate::input::interaction::DragState;

    fn felt_center(session: &TableSession) -> Vec2 {
        session.layout().origin + session.layout().size / 2.0
    }

    #[test]
    fn new_session_renders_a_frame() {
        let session = TableSession::new(1000.0, 600.0);
        assert!(session.canvas().vertex_count() > 0);
        assert_eq!(session.table_size(), TableSize::NineFoot);
    }

    #[test]
    fn place_drag_and_pocket_full_gesture() {
        let mut session = TableSession::new(1000.0, 600.0);
        let center = felt_center(&session);

        session.arm_placement(BallKind::Cue);
        let out = session.on_pointer_down(center.x, center.y, 1);
        assert!(matches!(out, PointerOutcome::Placed(_)));
        session.on_pointer_up(1);
        assert_eq!(session.balls().len(), 1);

        // Pick it up and carry it into the top-left corner pocket.
        session.on_pointer_down(center.x, center.y, 1);
        assert_eq!(session.captured_pointer(), Some(PointerId(1)));
        let pocket = session.layout().pockets[0].center;
        session.on_pointer_move(pocket.x, pocket.y);
        let out = session.on_pointer_up(1);
        assert!(matches!(out, PointerOutcome::Pocketed(_)));
        assert!(session.balls().is_empty());
        assert_eq!(session.captured_pointer(), None);
        assert_eq!(session.interaction().state(), DragState::Idle);
    }

    #[test]
    fn invalid_size_code_leaves_geometry_unchanged() {
        let mut session = TableSession::new(1000.0, 600.0);
        let before = session.layout().clone();

        let err = TableSize::from_code(11).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTableSize(11));
        // The bridge never reaches set_table_size on a bad code, so the
        // session keeps its prior geometry bit for bit.
        assert_eq!(session.layout(), &before);

        session.set_table_size(TableSize::SevenFoot);
        assert_ne!(session.layout(), &before);
    }

    #[test]
    fn resize_keeps_invariants() {
        let mut session = TableSession::new(1600.0, 900.0);
        let center = felt_center(&session);
        session.arm_placement(BallKind::Solid(8));
        session.on_pointer_down(center.x, center.y, 1);
        session.on_pointer_up(1);

        session.resize(400.0, 300.0);
        let layout = session.layout().clone();
        assert_eq!(layout.size.y, layout.size.x * 2.0);
        for ball in session.balls().iter() {
            assert!(layout.contains_ball_center(ball.pos));
        }
    }

    #[test]
    fn style_sheet_round_trip() {
        let mut session = TableSession::new(1000.0, 600.0);
        assert!(session.load_style(r#"{"felt":{"r":0.2,"g":0.2,"b":0.6}}"#).is_ok());
        assert!(session.load_style("{{{").is_err());
        // A rejected sheet still leaves a renderable frame behind.
        assert!(session.canvas().vertex_count() > 0);
    }
}
