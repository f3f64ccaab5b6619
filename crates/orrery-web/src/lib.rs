pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use js_sys::{Array, Uint32Array};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. Calls made before `orrery_init` return
/// `fallback` and log an error instead of panicking across the JS boundary.
fn with_runner<R>(fallback: R, f: impl FnOnce(&mut OrreryRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::error!("orrery not initialized; call orrery_init() first");
            fallback
        }
    })
}

/// Build the simulation. `config_json` is an optional system description;
/// when absent or invalid the default catalog is used.
#[wasm_bindgen]
pub fn orrery_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = OrreryRunner::from_json_or_default(config_json.as_deref());
    let bodies = runner.simulation().len();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized with {bodies} bodies");
}

/// Call from `requestAnimationFrame` with its timestamp (ms).
/// Returns true when the simulation advanced this frame.
#[wasm_bindgen]
pub fn orrery_frame(timestamp_ms: f64) -> bool {
    with_runner(false, |r| r.frame(timestamp_ms))
}

/// Set the global speed multiplier; returns the value actually applied.
#[wasm_bindgen]
pub fn orrery_set_speed(speed: f64) -> f64 {
    with_runner(0.0, |r| r.set_speed(speed))
}

#[wasm_bindgen]
pub fn orrery_toggle_pause() -> bool {
    with_runner(false, |r| r.toggle_pause())
}

#[wasm_bindgen]
pub fn orrery_reset_timing() {
    with_runner((), |r| r.reset_timing());
}

// ---- Data accessors ----

/// Number of orbiting bodies; index space for the per-body accessors.
#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(0, |r| r.body_count())
}

/// Number of instances (star + bodies).
#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(0, |r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_trace_vertices_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| r.trace_vertices_ptr())
}

#[wasm_bindgen]
pub fn get_trace_vertex_count() -> u32 {
    with_runner(0, |r| r.trace_vertex_count())
}

/// First trace vertex of body `index`, or -1 if out of range.
#[wasm_bindgen]
pub fn get_trace_offset(index: u32) -> i32 {
    with_runner(-1, |r| r.trace_offset(index as usize).map_or(-1, |o| o as i32))
}

/// Trace vertex count of body `index`, or 0 if out of range.
#[wasm_bindgen]
pub fn get_trace_len(index: u32) -> u32 {
    with_runner(0, |r| r.trace_len(index as usize).unwrap_or(0))
}

/// Orbit line colors (0xRRGGBB) in catalog order.
#[wasm_bindgen]
pub fn get_orbit_colors() -> Uint32Array {
    with_runner(Uint32Array::new_with_length(0), |r| Uint32Array::from(r.orbit_colors()))
}

/// Body names in catalog order, for label creation.
#[wasm_bindgen]
pub fn get_body_names() -> Array {
    with_runner(Array::new(), |r| {
        r.body_names().map(JsValue::from_str).collect()
    })
}

/// Speed slider settings as `[min, max, step, default, current]`.
#[wasm_bindgen]
pub fn get_speed_config() -> Array {
    with_runner(Array::new(), |r| {
        let clock = r.simulation().clock();
        let range = clock.range();
        [range.min, range.max, range.step, range.default_value, clock.speed_multiplier()]
            .into_iter()
            .map(JsValue::from_f64)
            .collect()
    })
}

#[wasm_bindgen]
pub fn get_protocol_version() -> f32 {
    orrery::PROTOCOL_VERSION
}
