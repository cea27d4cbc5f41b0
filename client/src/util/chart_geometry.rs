//! SVG geometry for the dashboard charts.
//!
//! Pure functions from chart data to SVG path strings so the chart components
//! stay declarative and the math is testable without a browser.

#[cfg(test)]
#[path = "chart_geometry_test.rs"]
mod chart_geometry_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

/// Drawing area inside an SVG viewBox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Plot {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Y-axis maximum: the data maximum rounded up to the next multiple of 10.
#[must_use]
pub fn axis_max(data: &[f64]) -> f64 {
    let max = data.iter().copied().filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max <= 0.0 { 10.0 } else { (max / 10.0).ceil() * 10.0 }
}

/// X position of category `i` of `count`, evenly spaced edge to edge.
#[must_use]
pub fn category_x(plot: &Plot, i: usize, count: usize) -> f64 {
    if count <= 1 {
        return plot.padding + plot.inner_width() / 2.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let step = plot.inner_width() / (count - 1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let offset = step * i as f64;
    plot.padding + offset
}

/// Map values to plot coordinates against `axis_max(data)`.
#[must_use]
pub fn scale_points(plot: &Plot, data: &[f64]) -> Vec<Point> {
    let max = axis_max(data);
    data.iter()
        .enumerate()
        .map(|(i, v)| {
            let v = if v.is_finite() { v.clamp(0.0, max) } else { 0.0 };
            Point { x: category_x(plot, i, data.len()), y: plot.bottom() - v / max * plot.inner_height() }
        })
        .collect()
}

/// Smoothed polyline through `points`.
///
/// Segments are cubic Béziers with Catmull-Rom control points scaled by
/// `tension`; a tension of 0 produces straight segments.
#[must_use]
pub fn line_path(points: &[Point], tension: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let mut path = format!("M{:.2},{:.2}", first.x, first.y);
    for i in 1..points.len() {
        let p0 = points[i.saturating_sub(2)];
        let p1 = points[i - 1];
        let p2 = points[i];
        let p3 = points[(i + 1).min(points.len() - 1)];
        if tension <= 0.0 {
            let _ = write!(path, " L{:.2},{:.2}", p2.x, p2.y);
            continue;
        }
        let k = tension / 2.0;
        let c1 = Point { x: p1.x + (p2.x - p0.x) * k, y: p1.y + (p2.y - p0.y) * k };
        let c2 = Point { x: p2.x - (p3.x - p1.x) * k, y: p2.y - (p3.y - p1.y) * k };
        let _ = write!(path, " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}", c1.x, c1.y, c2.x, c2.y, p2.x, p2.y);
    }
    path
}

/// [`line_path`] closed down to `baseline` for the filled area.
#[must_use]
pub fn area_path(points: &[Point], tension: f64, baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.2},{baseline:.2} L{:.2},{baseline:.2} Z",
        line_path(points, tension),
        last.x,
        first.x
    )
}

/// One ring segment of a doughnut.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    pub start: f64,
    pub end: f64,
    pub path: String,
}

/// Ring segments proportional to `values`, clockwise from 12 o'clock.
///
/// Negative or non-finite values count as zero; an all-zero input yields no
/// segments.
#[must_use]
pub fn doughnut_segments(values: &[f64], center: Point, outer: f64, inner: f64) -> Vec<ArcSegment> {
    let clean = values.iter().map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 }).collect::<Vec<_>>();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    clean
        .iter()
        .map(|v| {
            // A full-circle arc has coincident endpoints and would not draw.
            let sweep = (v / total * TAU).min(TAU - 1e-4);
            let end = start + sweep;
            let segment = ArcSegment { start, end, path: ring_path(center, outer, inner, start, end) };
            start = end;
            segment
        })
        .collect()
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point { x: center.x + radius * angle.cos(), y: center.y + radius * angle.sin() }
}

fn ring_path(center: Point, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large = u8::from(end - start > PI);
    let o1 = polar(center, outer, start);
    let o2 = polar(center, outer, end);
    let i2 = polar(center, inner, end);
    let i1 = polar(center, inner, start);
    format!(
        "M{:.2},{:.2} A{outer:.2},{outer:.2} 0 {large} 1 {:.2},{:.2} L{:.2},{:.2} A{inner:.2},{inner:.2} 0 {large} 0 {:.2},{:.2} Z",
        o1.x, o1.y, o2.x, o2.y, i2.x, i2.y, i1.x, i1.y
    )
}
