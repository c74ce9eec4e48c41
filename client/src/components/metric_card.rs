use leptos::prelude::*;
use secmetrics::locale::format_count;
use secmetrics::metrics::MetricCard as MetricFigure;

/// Headline figure with its month-over-month trend.
#[component]
pub fn MetricCard(figure: MetricFigure) -> impl IntoView {
    let class = format!("metric-card metric-card--{}", figure.variant.css_modifier());
    let trend = figure.trend.map(|trend| {
        view! {
            <p class="metric-card__trend">
                <span class=format!("metric-card__change metric-card__change--{}", trend.direction.css_modifier())>
                    {trend.label()}
                </span>
                " vs mes anterior"
            </p>
        }
    });

    view! {
        <article class=class>
            <span class="metric-card__title">{figure.title}</span>
            <span class="metric-card__value">{format_count(figure.value)}</span>
            {trend}
        </article>
    }
}
