//! Monthly report overview: four headline cards and two charts.

use leptos::prelude::*;
use secmetrics::metrics::metric_cards;

use crate::components::issue_type_chart::IssueTypeChart;
use crate::components::metric_card::MetricCard;
use crate::components::status_chart::StatusChart;

#[component]
pub fn MetricsPanel() -> impl IntoView {
    view! {
        <section class="metrics-panel" aria-label="Resumen del mes">
            <div class="metrics-panel__cards">
                {metric_cards()
                    .into_iter()
                    .map(|figure| view! { <MetricCard figure=figure/> })
                    .collect_view()}
            </div>

            <div class="metrics-panel__charts">
                <StatusChart/>
                <IssueTypeChart/>
            </div>
        </section>
    }
}
