pub mod plot;

use niche_core::field::sample_direction_field;
use niche_core::isocline::zero_growth_isoclines;
use niche_core::model::Parameters;
use niche_core::presets::preset;
use niche_core::trajectory::{simulate, Trajectory};
use js_sys::Float64Array;
use plot::{arrow_annotations, isocline_traces, phase_trace, time_series_traces, RenderPayload};
use wasm_bindgen::prelude::*;

/// Headroom factor for the phase-plane axes.
const BOUNDS_MARGIN: f64 = 1.15;

/// Visible-domain bound for one axis: the largest of the observed series,
/// the capacity, the initial population, and 1, widened by
/// `BOUNDS_MARGIN`. Orchestration concern: the core accepts any positive
/// bounds and never assumes this derivation.
fn plot_bound(observed: &[f64], capacity: f64, initial: f64) -> f64 {
    let mut max = 1.0_f64.max(capacity).max(initial);
    for &value in observed {
        if value > max {
            max = value;
        }
    }
    max * BOUNDS_MARGIN
}

/// Runs the full redraw pipeline: trajectory, bounds, isoclines, field.
/// One invocation recomputes everything from scratch; there is no cached
/// state between calls.
pub fn render_payload(params: &Parameters) -> RenderPayload {
    let trajectory = simulate(params);
    let max_n1 = plot_bound(&trajectory.n1, params.k1, params.n10);
    let max_n2 = plot_bound(&trajectory.n2, params.k2, params.n20);

    let isoclines = zero_growth_isoclines(params, max_n1);
    let arrows = sample_direction_field(params, max_n1, max_n2);

    RenderPayload {
        time_series: time_series_traces(&trajectory),
        phase: phase_trace(&trajectory),
        isoclines: isocline_traces(&isoclines),
        arrows: arrow_annotations(&arrows),
        max_n1,
        max_n2,
    }
}

#[wasm_bindgen]
pub struct WasmCompetition {
    params: Parameters,
}

#[wasm_bindgen]
impl WasmCompetition {
    /// Builds a model from a JS parameters object
    /// ({r1, r2, k1, k2, a12, a21, n10, n20, tMax, dt}).
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> Result<WasmCompetition, JsValue> {
        console_error_panic_hook::set_once();

        let params: Parameters = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {e}")))?;
        Ok(WasmCompetition { params })
    }

    /// Builds a model from a named preset scenario.
    pub fn from_preset(name: &str) -> Result<WasmCompetition, JsValue> {
        console_error_panic_hook::set_once();

        let params = preset(name).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmCompetition { params })
    }

    pub fn set_params(&mut self, params: JsValue) -> Result<(), JsValue> {
        self.params = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {e}")))?;
        Ok(())
    }

    pub fn params(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.params)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Integrates the model and returns {t, n1, n2}.
    pub fn simulate(&self) -> Result<JsValue, JsValue> {
        let trajectory: Trajectory = simulate(&self.params);
        serde_wasm_bindgen::to_value(&trajectory)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Derived axis bounds [max_n1, max_n2] for the phase-plane charts,
    /// recomputed from a fresh trajectory.
    pub fn phase_bounds(&self) -> Float64Array {
        let trajectory = simulate(&self.params);
        let max_n1 = plot_bound(&trajectory.n1, self.params.k1, self.params.n10);
        let max_n2 = plot_bound(&trajectory.n2, self.params.k2, self.params.n20);
        Float64Array::from(&[max_n1, max_n2][..])
    }

    /// Returns the full redraw payload: time-series traces, phase trace,
    /// isocline traces, arrow annotations, and the derived axis bounds.
    pub fn render(&self) -> Result<JsValue, JsValue> {
        let payload = render_payload(&self.params);
        serde_wasm_bindgen::to_value(&payload)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
