//! Sortable, filterable collaborator table with the top-performer banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page's only interactive state: one `RosterQuery` signal, edited
//! through `state::table::apply_event`. Visible rows are a `Memo` over that
//! signal alone, so they are re-derived exactly when the search text, the
//! department, or the sort column/direction changes.

use leptos::prelude::*;
use secmetrics::locale::{format_count, format_member_since};
use secmetrics::query::ALL_DEPARTMENTS;
use secmetrics::{Collaborator, Roster, RosterQuery, SortField, SortState, showing_label};

use crate::state::table::{TableEvent, apply_event, initials, severity_badges, top_performer_text};

const COLUMN_COUNT: usize = 6;

#[component]
pub fn CollaboratorTable(roster: Roster) -> impl IntoView {
    let total = roster.len();
    let departments = roster.departments();
    let roster = StoredValue::new(roster);
    let query = RwSignal::new(RosterQuery::default());

    let rows = Memo::new(move |_| {
        query.with(|q| roster.with_value(|r| r.derive(q).into_iter().cloned().collect::<Vec<_>>()))
    });

    let dispatch = move |event: TableEvent| {
        #[cfg(feature = "hydrate")]
        log::debug!("collaborator table: {event:?}");
        query.maybe_update(|q| apply_event(q, event));
    };

    let sort = Signal::derive(move || query.with(|q| q.sort));
    let on_sort = Callback::new(move |field: SortField| dispatch(TableEvent::SortBy(field)));
    let top_performer = move || rows.with(|r| r.first().map(top_performer_text));
    let summary = move || showing_label(rows.with(Vec::len), total);

    view! {
        <section class="collaborator-table" aria-labelledby="collaborator-table-title">
            <h2 id="collaborator-table-title" class="section-title">"Reporte de Colaboradores"</h2>
            <p class="section-description">"Issues reportadas por colaborador con métricas de rendimiento"</p>

            <div class="collaborator-table__controls">
                <input
                    class="collaborator-table__search"
                    type="search"
                    placeholder="Buscar por nombre o email..."
                    aria-label="Buscar colaboradores"
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| dispatch(TableEvent::Search(event_target_value(&ev)))
                />
                <select
                    class="collaborator-table__department"
                    aria-label="Filtrar por departamento"
                    prop:value=move || query.with(|q| q.department.as_select_value().to_owned())
                    on:change=move |ev| dispatch(TableEvent::Department(event_target_value(&ev)))
                >
                    <option value=ALL_DEPARTMENTS>"Todos los departamentos"</option>
                    {departments
                        .into_iter()
                        .map(|department| view! { <option value=department.clone()>{department.clone()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || rows.with(|r| !r.is_empty())>
                <div class="top-performer" role="status">
                    <span class="top-performer__badge">"🏆 Colaborador Destacado"</span>
                    <span class="top-performer__text">{top_performer}</span>
                </div>
            </Show>

            <div class="collaborator-table__wrap">
                <table class="collaborator-table__table">
                    <thead>
                        <tr>
                            <SortHeader field=SortField::Name sort=sort on_sort=on_sort/>
                            <th class="collaborator-table__th">"Contacto"</th>
                            <SortHeader field=SortField::Department sort=sort on_sort=on_sort/>
                            <SortHeader field=SortField::Commits sort=sort on_sort=on_sort/>
                            <SortHeader field=SortField::IssuesReported sort=sort on_sort=on_sort/>
                            <th class="collaborator-table__th">"Severidad"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .enumerate()
                                .map(|(rank, collaborator)| {
                                    view! { <CollaboratorRow collaborator=collaborator top={rank == 0}/> }
                                })
                                .collect_view()
                        }}
                        <Show when=move || rows.with(Vec::is_empty)>
                            <tr class="collaborator-table__empty">
                                <td colspan=COLUMN_COUNT>"Ningún colaborador coincide con los filtros."</td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>

            <p class="collaborator-table__summary">{summary}</p>
        </section>
    }
}

/// Clickable column header showing the current sort arrow.
#[component]
fn SortHeader(field: SortField, sort: Signal<SortState>, on_sort: Callback<SortField>) -> impl IntoView {
    view! {
        <th class="collaborator-table__th" aria-sort=move || sort.get().aria_sort(field)>
            <button
                type="button"
                class="collaborator-table__sort"
                class:collaborator-table__sort--active=move || sort.get().field == field
                on:click=move |_| on_sort.run(field)
            >
                {field.label()}
                <span class="collaborator-table__arrow" aria-hidden="true">
                    {move || sort.get().indicator(field)}
                </span>
            </button>
        </th>
    }
}

#[component]
fn CollaboratorRow(collaborator: Collaborator, top: bool) -> impl IntoView {
    let badges = severity_badges(&collaborator)
        .into_iter()
        .map(|(severity, text)| {
            view! {
                <span
                    class=format!("severity-badge severity-badge--{}", severity.css_modifier())
                    title=severity.label()
                >
                    {text}
                </span>
            }
        })
        .collect_view();

    view! {
        <tr class="collaborator-table__row" class:collaborator-table__row--top=top>
            <td>
                <div class="collaborator-table__person">
                    <span class="collaborator-table__avatar" aria-hidden="true">
                        {initials(&collaborator.name)}
                    </span>
                    <div>
                        <div class="collaborator-table__name">
                            {collaborator.name.clone()}
                            <Show when=move || top>
                                <span class="collaborator-table__trophy" title="Colaborador Destacado">" 🏆"</span>
                            </Show>
                        </div>
                        <div class="collaborator-table__since">{format_member_since(collaborator.joined)}</div>
                    </div>
                </div>
            </td>
            <td class="collaborator-table__email">{collaborator.email.clone()}</td>
            <td>
                <span class="collaborator-table__dept">{collaborator.department.clone()}</span>
            </td>
            <td class="collaborator-table__num">{format_count(collaborator.commits)}</td>
            <td class="collaborator-table__num collaborator-table__issues">{collaborator.issues_reported}</td>
            <td>
                <div class="collaborator-table__severity">{badges}</div>
            </td>
        </tr>
    }
}
