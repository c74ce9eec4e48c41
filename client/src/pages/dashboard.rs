//! Dashboard pages: metrics panel on top, collaborator table below.

use leptos::prelude::*;
use secmetrics::fixture::Dataset;

use crate::components::collaborator_table::CollaboratorTable;
use crate::components::header::Header;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::roster_alert::RosterAlert;

/// Dashboard over the current collaborator dataset.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardView dataset=Dataset::Primary/> }
}

/// Dashboard over the previous export, which fails id validation and
/// shows the validation alert in place of the table.
#[component]
pub fn LegacyDashboardPage() -> impl IntoView {
    view! { <DashboardView dataset=Dataset::Legacy/> }
}

#[component]
fn DashboardView(dataset: Dataset) -> impl IntoView {
    let collaborators = match dataset.roster() {
        Ok(roster) => view! { <CollaboratorTable roster=roster/> }.into_any(),
        Err(error) => {
            #[cfg(feature = "hydrate")]
            log::warn!("collaborator dataset rejected: {error}");
            view! { <RosterAlert error=error/> }.into_any()
        }
    };

    view! {
        <div class="dashboard-page">
            <Header dataset=dataset/>
            <main class="dashboard-page__content">
                <MetricsPanel/>
                {collaborators}
            </main>
        </div>
    }
}
