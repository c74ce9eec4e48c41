//! Donut of this month's open vs closed issues.

use leptos::prelude::*;
use secmetrics::metrics::{issue_status, status_tooltip};

use crate::util::chart_math::donut_segments;

const CENTER: (f64, f64) = (100.0, 100.0);
const OUTER_RADIUS: f64 = 90.0;
const INNER_RADIUS: f64 = 50.0;

#[component]
pub fn StatusChart() -> impl IntoView {
    let shares = issue_status();
    let values = shares.iter().map(|s| s.value).collect::<Vec<_>>();
    let segments = donut_segments(&values, CENTER, OUTER_RADIUS, INNER_RADIUS);

    let hovered = RwSignal::new(None::<usize>);
    let tooltip = move || {
        hovered
            .get()
            .and_then(|i| shares.get(i))
            .map(|share| format!("{}: {}", share.state.label(), status_tooltip(share)))
    };

    view! {
        <section class="chart-card">
            <h3 class="chart-card__title">"Estado de Issues del Mes"</h3>
            <p class="chart-card__description">"Distribución de issues abiertas vs cerradas"</p>
            <svg class="donut-chart" viewBox="0 0 200 200" role="img" aria-label="Issues abiertas y cerradas">
                {segments
                    .into_iter()
                    .map(|segment| {
                        let index = segment.index;
                        let modifier = shares[index].state.css_modifier();
                        view! {
                            <path
                                class=format!("donut-chart__slice donut-chart__slice--{modifier}")
                                class:donut-chart__slice--active=move || hovered.get() == Some(index)
                                d=segment.path
                                on:mouseenter=move |_| hovered.set(Some(index))
                                on:mouseleave=move |_| hovered.set(None)
                            ></path>
                        }
                    })
                    .collect_view()}
            </svg>
            <p class="chart-card__tooltip" aria-live="polite">{move || tooltip().unwrap_or_default()}</p>
            <ul class="chart-legend">
                {shares
                    .iter()
                    .map(|share| {
                        view! {
                            <li class="chart-legend__item">
                                <span class=format!(
                                    "chart-legend__swatch chart-legend__swatch--{}",
                                    share.state.css_modifier(),
                                )></span>
                                <span class="chart-legend__label">{share.state.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
