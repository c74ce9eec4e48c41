//! Horizontal bars of issues per vulnerability type.

use leptos::prelude::*;
use secmetrics::metrics::{issue_tooltip, issues_by_type, report};

use crate::util::chart_math::{axis_ticks, band, nice_axis_max, scaled_length};

const WIDTH: f64 = 440.0;
const LABEL_WIDTH: f64 = 168.0;
const ROW_HEIGHT: f64 = 40.0;
const AXIS_HEIGHT: f64 = 20.0;
const BAR_SPAN: f64 = WIDTH - LABEL_WIDTH - 16.0;
const TICK_STEPS: u32 = 4;

#[component]
pub fn IssueTypeChart() -> impl IntoView {
    let rows = issues_by_type();
    let total = report().total_issues;
    let axis_max = nice_axis_max(rows.iter().map(|t| t.value).max().unwrap_or(0));
    #[allow(clippy::cast_precision_loss)]
    let plot_height = ROW_HEIGHT * rows.len() as f64;
    let height = plot_height + AXIS_HEIGHT;

    let hovered = RwSignal::new(None::<usize>);
    let tooltip = move || {
        hovered
            .get()
            .and_then(|i| rows.get(i))
            .map(|t| format!("{}: {}", t.label, issue_tooltip(t.value, total)))
    };

    let grid = axis_ticks(axis_max, TICK_STEPS)
        .into_iter()
        .map(|tick| {
            let x = LABEL_WIDTH + scaled_length(tick, axis_max, BAR_SPAN);
            let label_y = plot_height + 14.0;
            view! {
                <g class="bar-chart__tick">
                    <line x1=x y1=0 x2=x y2=plot_height></line>
                    <text x=x y=label_y text-anchor="middle">{tick}</text>
                </g>
            }
        })
        .collect_view();

    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, issue_type)| {
            let (offset, bar_height) = band(i, rows.len(), plot_height, 0.35);
            let width = scaled_length(issue_type.value, axis_max, BAR_SPAN);
            let text_y = offset + bar_height / 2.0 + 4.0;
            let label_x = LABEL_WIDTH - 8.0;
            view! {
                <g
                    class="bar-chart__row"
                    class:bar-chart__row--active=move || hovered.get() == Some(i)
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    <text class="bar-chart__label" x=label_x y=text_y text-anchor="end">
                        {issue_type.label}
                    </text>
                    <rect class="bar-chart__bar" x=LABEL_WIDTH y=offset width=width height=bar_height rx="4"></rect>
                </g>
            }
        })
        .collect_view();

    view! {
        <section class="chart-card">
            <h3 class="chart-card__title">"Issues por Tipo"</h3>
            <p class="chart-card__description">"Distribución de vulnerabilidades detectadas"</p>
            <svg
                class="bar-chart"
                viewBox=format!("0 0 {WIDTH} {height}")
                role="img"
                aria-label="Issues por tipo"
            >
                {grid}
                {bars}
            </svg>
            <p class="chart-card__tooltip" aria-live="polite">{move || tooltip().unwrap_or_default()}</p>
        </section>
    }
}
