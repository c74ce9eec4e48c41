use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================
// polar_point
// =============================================================

#[test]
fn polar_point_starts_at_twelve_oclock_and_runs_clockwise() {
    let (x, y) = polar_point((100.0, 100.0), 50.0, 0.0);
    assert!(approx(x, 100.0) && approx(y, 50.0));

    let (x, y) = polar_point((100.0, 100.0), 50.0, 90.0);
    assert!(approx(x, 150.0) && approx(y, 100.0));

    let (x, y) = polar_point((100.0, 100.0), 50.0, 180.0);
    assert!(approx(x, 100.0) && approx(y, 150.0));
}

// =============================================================
// donut_segments
// =============================================================

#[test]
fn donut_segments_are_proportional_and_contiguous() {
    let segments = donut_segments(&[1, 1, 2], (100.0, 100.0), 80.0, 50.0);
    assert_eq!(segments.len(), 3);
    assert!(approx(segments[0].start_deg, 0.0));
    assert!(approx(segments[0].end_deg, 90.0));
    assert!(approx(segments[1].start_deg, 90.0));
    assert!(approx(segments[1].end_deg, 180.0));
    assert!(approx(segments[2].end_deg, 360.0));
    assert!(segments[0].path.starts_with("M 100.00 20.00 A 80.00 80.00 0 0 1"));
    assert!(segments[0].path.ends_with('Z'));
}

#[test]
fn donut_segments_skip_zero_values_but_keep_indices() {
    let segments = donut_segments(&[0, 5, 0, 5], (0.0, 0.0), 10.0, 5.0);
    let indices = segments.iter().map(|s| s.index).collect::<Vec<_>>();
    assert_eq!(indices, [1, 3]);
}

#[test]
fn donut_segment_over_half_uses_large_arc_flag() {
    let segments = donut_segments(&[3, 1], (100.0, 100.0), 80.0, 50.0);
    assert!(segments[0].path.contains("A 80.00 80.00 0 1 1"));
    assert!(segments[1].path.contains("A 80.00 80.00 0 0 1"));
}

#[test]
fn single_value_donut_stops_short_of_full_circle() {
    let segments = donut_segments(&[0, 7], (100.0, 100.0), 80.0, 50.0);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].end_deg < 360.0);
    assert!(segments[0].end_deg > 359.0);
}

#[test]
fn empty_or_zero_series_has_no_segments() {
    assert!(donut_segments(&[], (0.0, 0.0), 10.0, 5.0).is_empty());
    assert!(donut_segments(&[0, 0], (0.0, 0.0), 10.0, 5.0).is_empty());
}

// =============================================================
// Axes and bars
// =============================================================

#[test]
fn nice_axis_max_rounds_up_by_magnitude() {
    assert_eq!(nice_axis_max(0), 5);
    assert_eq!(nice_axis_max(31), 35);
    assert_eq!(nice_axis_max(45), 45);
    assert_eq!(nice_axis_max(50), 50);
    assert_eq!(nice_axis_max(64), 70);
    assert_eq!(nice_axis_max(156), 160);
    assert_eq!(nice_axis_max(501), 600);
}

#[test]
fn axis_ticks_are_evenly_spaced() {
    assert_eq!(axis_ticks(40, 4), [0, 10, 20, 30, 40]);
    assert_eq!(axis_ticks(35, 5), [0, 7, 14, 21, 28, 35]);
    assert_eq!(axis_ticks(10, 0), [0, 10]);
}

#[test]
fn scaled_length_is_proportional_and_clamped() {
    assert!(approx(scaled_length(20, 40, 100.0), 50.0));
    assert!(approx(scaled_length(50, 40, 100.0), 100.0));
    assert!(approx(scaled_length(5, 0, 100.0), 0.0));
}

#[test]
fn band_centers_bars_inside_slots() {
    let (x0, w0) = band(0, 4, 400.0, 0.2);
    assert!(approx(x0, 10.0) && approx(w0, 80.0));
    let (x3, _) = band(3, 4, 400.0, 0.2);
    assert!(approx(x3, 310.0));
    assert_eq!(band(0, 0, 400.0, 0.2), (0.0, 0.0));
}
