//! Page header with dataset navigation and the theme toggle.

use leptos::prelude::*;
use secmetrics::fixture::Dataset;
use secmetrics::metrics::{LAST_UPDATED, REPORT_PERIOD, REPORT_TITLE};

use crate::state::ui::UiState;

#[component]
pub fn Header(dataset: Dataset) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__heading">
                <h1 class="dashboard-header__title">{REPORT_TITLE}</h1>
                <p class="dashboard-header__subtitle">{REPORT_PERIOD}</p>
            </div>

            <span class="dashboard-header__updated">
                {format!("Última actualización: {LAST_UPDATED}")}
            </span>

            <nav class="dashboard-header__nav" aria-label="Conjunto de datos">
                <a
                    href="/"
                    class="dashboard-header__link"
                    class:dashboard-header__link--active={dataset == Dataset::Primary}
                >
                    {Dataset::Primary.label()}
                </a>
                <a
                    href="/legacy"
                    class="dashboard-header__link"
                    class:dashboard-header__link--active={dataset == Dataset::Legacy}
                >
                    {Dataset::Legacy.label()}
                </a>
            </nav>

            <button
                class="btn dashboard-header__theme"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Cambiar tema"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
