use leptos::prelude::*;
use secmetrics::RosterError;

use crate::state::table::validation_message;

/// Replaces the collaborator table when the dataset fails validation.
#[component]
pub fn RosterAlert(error: RosterError) -> impl IntoView {
    view! {
        <section class="roster-alert" role="alert">
            <h2 class="roster-alert__title">"Datos de colaboradores inválidos"</h2>
            <p class="roster-alert__detail">{validation_message(&error)}</p>
            <p class="roster-alert__hint">
                "La tabla no se muestra hasta que el conjunto de datos tenga identificadores únicos."
            </p>
        </section>
    }
}
