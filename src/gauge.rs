use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::classifier::{categorize, ScoreCategory};

/// Gauge Geometry Engine - 半円ゲージの幾何計算
///
/// The gauge spans -90° (at `min`) to +90° (at `max`), 0° pointing straight
/// up. Angles go through `polar_point`, which rotates by -90° so that 0° maps
/// to the top of the circle in SVG's y-down space.
///
/// Arc paths are drawn from the band's end angle back to its start angle with
/// sweep flag 0 for every band, so adjacent segments meet without gaps.
pub const DEFAULT_MIN: i32 = 300;
pub const DEFAULT_MAX: i32 = 900;

/// A fixed display band; static config, not derived from the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeBand {
    pub from: i32,
    pub to: i32,
    pub color: &'static str,
}

pub const GAUGE_BANDS: [GaugeBand; 5] = [
    GaugeBand { from: 300, to: 579, color: "#ff4d4f" },
    GaugeBand { from: 580, to: 669, color: "#ff9f43" },
    GaugeBand { from: 670, to: 739, color: "#f5d442" },
    GaugeBand { from: 740, to: 799, color: "#7ed957" },
    GaugeBand { from: 800, to: 900, color: "#22c55e" },
];

/// SVG layout of the gauge
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct GaugeLayout {
    #[serde(default = "default_center")]
    pub center_x: f64,
    #[serde(default = "default_center")]
    pub center_y: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_needle_length")]
    pub needle_length: f64,
}

fn default_center() -> f64 { 120.0 }
fn default_radius() -> f64 { 85.0 }
fn default_needle_length() -> f64 { 90.0 }

impl Default for GaugeLayout {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            radius: default_radius(),
            needle_length: default_needle_length(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One rendered band segment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandArc {
    pub from: i32,
    pub to: i32,
    pub color: &'static str,
    /// "300-579"
    pub legend: String,
    pub category: ScoreCategory,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    /// SVG path `d` attribute
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeGeometry {
    pub min: i32,
    pub max: i32,
    pub clamped_score: i32,
    pub ratio: f64,
    pub needle_angle_deg: f64,
    pub needle_tip: Point,
    pub center: Point,
    /// Category and color follow the raw score, not the clamped one
    pub category: ScoreCategory,
    pub color: &'static str,
    pub bands: Vec<BandArc>,
}

/// Linear map from a score range onto [-90°, +90°]
#[derive(Debug, Clone, Copy)]
struct AngleScale {
    min: i32,
    max: i32,
}

impl AngleScale {
    fn degenerate(&self) -> bool {
        self.max <= self.min
    }

    fn ratio(&self, value: i32) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        let clamped = value.clamp(self.min, self.max);
        // widened: max - min can exceed i32
        (i64::from(clamped) - i64::from(self.min)) as f64
            / (i64::from(self.max) - i64::from(self.min)) as f64
    }

    fn angle(&self, value: i32) -> f64 {
        -90.0 + self.ratio(value) * 180.0
    }
}

/// Gauge angle (0° = up) to a point on the circle
pub fn polar_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    Point {
        x: center.x + radius * rad.cos(),
        y: center.y + radius * rad.sin(),
    }
}

/// SVG arc between two gauge angles
pub fn describe_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> (String, bool) {
    let start = polar_point(center, radius, end_angle);
    let end = polar_point(center, radius, start_angle);
    let large_arc = end_angle - start_angle > 180.0;
    let path = format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2}",
        start.x,
        start.y,
        radius,
        radius,
        if large_arc { 1 } else { 0 },
        end.x,
        end.y
    );
    (path, large_arc)
}

/// Needle angle for `score` on a [min, max] gauge
pub fn needle_angle(score: i32, min: i32, max: i32) -> f64 {
    AngleScale { min, max }.angle(score)
}

pub fn gauge_geometry(score: i32, min: i32, max: i32, layout: &GaugeLayout) -> GaugeGeometry {
    let scale = AngleScale { min, max };
    let center = Point { x: layout.center_x, y: layout.center_y };

    let clamped_score = if scale.degenerate() { min } else { score.clamp(min, max) };
    let ratio = scale.ratio(score);
    let needle_angle_deg = scale.angle(score);
    let category = categorize(score);

    let bands = GAUGE_BANDS
        .iter()
        .map(|band| {
            let start_angle = scale.angle(band.from);
            let end_angle = scale.angle(band.to);
            let (path, large_arc) = describe_arc(center, layout.radius, start_angle, end_angle);
            BandArc {
                from: band.from,
                to: band.to,
                color: band.color,
                legend: format!("{}-{}", band.from, band.to),
                category: categorize(band.to),
                start_angle,
                end_angle,
                large_arc,
                path,
            }
        })
        .collect();

    GaugeGeometry {
        min,
        max,
        clamped_score,
        ratio,
        needle_angle_deg,
        needle_tip: polar_point(center, layout.needle_length, needle_angle_deg),
        center,
        category,
        color: category.color(),
        bands,
    }
}
