//! Mapping from core outputs to chart primitives.
//!
//! The structures here mirror the trace/annotation contract the UI hands
//! to its plotting library: plain arrays of numbers plus fixed stylistic
//! hints. Computation stays in `niche_core`; this module only reshapes.

use niche_core::field::FieldArrow;
use niche_core::isocline::Isocline;
use niche_core::trajectory::Trajectory;
use serde::Serialize;

/// A single 2-D line series.
#[derive(Debug, Clone, Serialize)]
pub struct LineTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineStyle {
    pub dash: &'static str,
}

/// An annotation-style directed segment. `(x, y)` is the arrow head,
/// `(ax, ay)` the tail, with the style constants the UI expects.
#[derive(Debug, Clone, Serialize)]
pub struct ArrowAnnotation {
    pub x: f64,
    pub y: f64,
    pub ax: f64,
    pub ay: f64,
    pub showarrow: bool,
    pub arrowhead: u32,
    pub arrowsize: u32,
    pub arrowwidth: u32,
    pub arrowcolor: &'static str,
}

/// Everything one redraw needs: the two chart overlays plus the derived
/// domain bounds.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPayload {
    pub time_series: Vec<LineTrace>,
    pub phase: LineTrace,
    pub isoclines: Vec<LineTrace>,
    pub arrows: Vec<ArrowAnnotation>,
    pub max_n1: f64,
    pub max_n2: f64,
}

/// Two time-series traces, one per species.
pub fn time_series_traces(trajectory: &Trajectory) -> Vec<LineTrace> {
    vec![
        LineTrace {
            x: trajectory.t.clone(),
            y: trajectory.n1.clone(),
            mode: "lines",
            name: "Species 1",
            line: None,
        },
        LineTrace {
            x: trajectory.t.clone(),
            y: trajectory.n2.clone(),
            mode: "lines",
            name: "Species 2",
            line: None,
        },
    ]
}

/// The trajectory replotted in the (N1, N2) plane.
pub fn phase_trace(trajectory: &Trajectory) -> LineTrace {
    LineTrace {
        x: trajectory.n1.clone(),
        y: trajectory.n2.clone(),
        mode: "lines",
        name: "Trajectory",
        line: None,
    }
}

/// The two isoclines with their display labels and dash styles.
pub fn isocline_traces(isoclines: &[Isocline; 2]) -> Vec<LineTrace> {
    vec![
        LineTrace {
            x: isoclines[0].x.to_vec(),
            y: isoclines[0].y.to_vec(),
            mode: "lines",
            name: "dN\u{2081}/dt = 0",
            line: Some(LineStyle { dash: "dash" }),
        },
        LineTrace {
            x: isoclines[1].x.to_vec(),
            y: isoclines[1].y.to_vec(),
            mode: "lines",
            name: "dN\u{2082}/dt = 0",
            line: Some(LineStyle { dash: "dot" }),
        },
    ]
}

/// Dresses field arrows with the fixed annotation style.
pub fn arrow_annotations(arrows: &[FieldArrow]) -> Vec<ArrowAnnotation> {
    arrows
        .iter()
        .map(|arrow| ArrowAnnotation {
            x: arrow.head_x,
            y: arrow.head_y,
            ax: arrow.tail_x,
            ay: arrow.tail_y,
            showarrow: true,
            arrowhead: 2,
            arrowsize: 1,
            arrowwidth: 1,
            arrowcolor: "#666",
        })
        .collect()
}
