//! SVG geometry for the metrics charts.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. All outputs are
//! plain numbers or SVG path strings; nothing here touches the DOM.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

/// A full circle cannot be expressed as a single SVG arc, so a lone
/// segment stops just short of it.
const MAX_SWEEP_DEG: f64 = 359.99;

/// One donut slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Position of the slice's value in the input series.
    pub index: usize,
    pub start_deg: f64,
    pub end_deg: f64,
    /// Closed SVG path for the ring slice.
    pub path: String,
}

/// Point at `angle_deg` on a circle of `radius` around `center`.
pub fn polar_point(center: (f64, f64), radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (center.0 + radius * rad.sin(), center.1 - radius * rad.cos())
}

/// Ring slices proportional to `values`.
///
/// Zero values produce no slice; an all-zero series produces none at all.
pub fn donut_segments(values: &[u32], center: (f64, f64), outer: f64, inner: f64) -> Vec<ArcSegment> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(values.len());
    let mut cursor = 0.0_f64;
    for (index, &value) in values.iter().enumerate() {
        if value == 0 {
            continue;
        }
        let sweep = (f64::from(value) / f64::from(total) * 360.0).min(MAX_SWEEP_DEG);
        let start = cursor;
        let end = start + sweep;
        cursor = end;
        segments.push(ArcSegment {
            index,
            start_deg: start,
            end_deg: end,
            path: ring_path(center, outer, inner, start, end),
        });
    }
    segments
}

fn ring_path(center: (f64, f64), outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large_arc = u8::from(end - start > 180.0);
    let (ox0, oy0) = polar_point(center, outer, start);
    let (ox1, oy1) = polar_point(center, outer, end);
    let (ix1, iy1) = polar_point(center, inner, end);
    let (ix0, iy0) = polar_point(center, inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large_arc} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large_arc} 0 {ix0:.2} {iy0:.2} Z"
    )
}

/// Round `max` up to a readable axis bound: a multiple of 5 below 50,
/// of 10 below 500, and of 100 beyond. Zero maps to 5.
pub fn nice_axis_max(max: u32) -> u32 {
    let step = match max {
        0..50 => 5,
        50..500 => 10,
        _ => 100,
    };
    max.div_ceil(step).max(1) * step
}

/// `steps + 1` evenly spaced tick values from 0 to `axis_max`.
pub fn axis_ticks(axis_max: u32, steps: u32) -> Vec<u32> {
    if steps == 0 {
        return vec![0, axis_max];
    }
    (0..=steps).map(|i| axis_max * i / steps).collect()
}

/// Length of a bar for `value` on an axis of `axis_max` drawn over `span`
/// pixels. Values past the axis are clamped to the full span.
pub fn scaled_length(value: u32, axis_max: u32, span: f64) -> f64 {
    if axis_max == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(axis_max)).min(1.0) * span
}

/// Offset and width of band `index` when `span` is split into `count`
/// equal bands with `padding` (0..1) of each band left empty, centered.
pub fn band(index: usize, count: usize, span: f64, padding: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let slot = span / count as f64;
    let width = slot * (1.0 - padding.clamp(0.0, 1.0));
    #[allow(clippy::cast_precision_loss)]
    let offset = slot * index as f64 + (slot - width) / 2.0;
    (offset, width)
}
