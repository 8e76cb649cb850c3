use baize_core::{BallKind, TableSession, TableSize};

/// Holds the table session behind the wasm boundary and translates the
/// bridge's raw numeric codes into typed core calls.
///
/// The session lives in a `thread_local!` and is reached through free
/// `#[wasm_bindgen]` functions, because wasm-bindgen cannot export the
/// session struct with its borrowed accessors directly.
pub struct SessionRunner {
    session: TableSession,
}

impl SessionRunner {
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            session: TableSession::new(viewport_w, viewport_h),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    /// Apply a table-size code from the host menu. Unknown codes are logged
    /// and dropped; the board keeps its current geometry.
    pub fn set_table_size(&mut self, code: u32) {
        match TableSize::from_code(code) {
            Ok(size) => self.session.set_table_size(size),
            Err(err) => log::warn!("{err}"),
        }
    }

    /// Arm the next placement with a ball-kind code. Unknown codes are
    /// logged and dropped.
    pub fn arm_placement(&mut self, code: u32) {
        match BallKind::from_code(code) {
            Ok(kind) => self.session.arm_placement(kind),
            Err(err) => log::warn!("{err}"),
        }
    }

    pub fn load_style(&mut self, json: &str) {
        if let Err(err) = self.session.load_style(json) {
            log::warn!("style sheet rejected: {err}");
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, pointer_id: i32) {
        self.session.on_pointer_down(x, y, pointer_id);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.session.on_pointer_move(x, y);
    }

    pub fn pointer_up(&mut self, pointer_id: i32) {
        self.session.on_pointer_up(pointer_id);
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) {
        self.session.on_pointer_cancel(pointer_id);
    }

    // ---- Pointer accessors for the host's buffer reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.session.canvas().buffer_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.session.canvas().vertex_count() as u32
    }

    /// Pointer id the host should mirror into setPointerCapture, or -1
    /// when no drag is active.
    pub fn captured_pointer(&self) -> i32 {
        self.session.captured_pointer().map_or(-1, |p| p.0)
    }

    pub fn ball_count(&self) -> u32 {
        self.session.balls().len() as u32
    }

    pub fn table_size(&self) -> u32 {
        self.session.table_size().code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_leave_state_untouched() {
        let mut runner = SessionRunner::new(1000.0, 600.0);
        runner.set_table_size(12);
        assert_eq!(runner.table_size(), 9);

        runner.arm_placement(99);
        runner.pointer_down(500.0, 300.0, 1);
        assert_eq!(runner.ball_count(), 0);
    }

    #[test]
    fn capture_mirrors_drag_lifetime() {
        let mut runner = SessionRunner::new(1000.0, 600.0);
        runner.arm_placement(0);
        runner.pointer_down(500.0, 300.0, 1);
        runner.pointer_up(1);
        assert_eq!(runner.ball_count(), 1);
        assert_eq!(runner.captured_pointer(), -1);

        runner.pointer_down(500.0, 300.0, 7);
        assert_eq!(runner.captured_pointer(), 7);
        runner.pointer_cancel(7);
        assert_eq!(runner.captured_pointer(), -1);
    }

    #[test]
    fn frame_buffer_is_readable_after_every_event() {
        let mut runner = SessionRunner::new(800.0, 600.0);
        assert!(runner.vertex_count() > 0);
        runner.resize(1200.0, 700.0);
        assert!(runner.vertex_count() > 0);
        assert!(!runner.vertices_ptr().is_null());
    }
}
