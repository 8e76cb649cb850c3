pub mod runner;

pub use runner::SessionRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Table not initialized. Call table_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn table_init(viewport_w: f32, viewport_h: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SessionRunner::new(viewport_w, viewport_h);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("table: initialized at {}x{}", viewport_w, viewport_h);
}

#[wasm_bindgen]
pub fn table_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn table_set_size(code: u32) {
    with_runner(|r| r.set_table_size(code));
}

#[wasm_bindgen]
pub fn table_arm_placement(kind_code: u32) {
    with_runner(|r| r.arm_placement(kind_code));
}

#[wasm_bindgen]
pub fn table_load_style(json: &str) {
    with_runner(|r| r.load_style(json));
}

#[wasm_bindgen]
pub fn table_pointer_down(x: f32, y: f32, pointer_id: i32) {
    with_runner(|r| r.pointer_down(x, y, pointer_id));
}

#[wasm_bindgen]
pub fn table_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.pointer_move(x, y));
}

#[wasm_bindgen]
pub fn table_pointer_up(pointer_id: i32) {
    with_runner(|r| r.pointer_up(pointer_id));
}

#[wasm_bindgen]
pub fn table_pointer_cancel(pointer_id: i32) {
    with_runner(|r| r.pointer_cancel(pointer_id));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vertices_ptr())
}

#[wasm_bindgen]
pub fn get_vertex_count() -> u32 {
    with_runner(|r| r.vertex_count())
}

#[wasm_bindgen]
pub fn get_captured_pointer() -> i32 {
    with_runner(|r| r.captured_pointer())
}

#[wasm_bindgen]
pub fn get_ball_count() -> u32 {
    with_runner(|r| r.ball_count())
}

#[wasm_bindgen]
pub fn get_table_size() -> u32 {
    with_runner(|r| r.table_size())
}
