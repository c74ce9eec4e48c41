//! Interactive state of the collaborator table.
//!
//! DESIGN
//! ======
//! The table keeps a single `RwSignal<RosterQuery>`; its rows are a `Memo`
//! over that signal. User input is funnelled through [`apply_event`], which
//! reports whether the query actually changed so unchanged input never wakes
//! the memo.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use secmetrics::{Collaborator, DepartmentFilter, RosterError, RosterQuery, Severity, SortField};

/// Discrete user inputs the table reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// Search box contents.
    Search(String),
    /// Department `<select>` value.
    Department(String),
    /// Column header click.
    SortBy(SortField),
}

/// Fold `event` into `query`. Returns `true` when the query changed.
pub fn apply_event(query: &mut RosterQuery, event: TableEvent) -> bool {
    match event {
        TableEvent::Search(text) => {
            if query.search == text {
                return false;
            }
            query.search = text;
        }
        TableEvent::Department(value) => {
            let department = DepartmentFilter::from_select_value(&value);
            if query.department == department {
                return false;
            }
            query.department = department;
        }
        TableEvent::SortBy(field) => {
            query.sort = query.sort.toggle(field);
        }
    }
    true
}

/// Banner text for the first row of the derived list.
pub fn top_performer_text(collaborator: &Collaborator) -> String {
    format!(
        "{} lidera con {} issues reportadas",
        collaborator.name, collaborator.issues_reported
    )
}

/// Avatar initials: the first letter of every word, e.g. `MG` for
/// "María González".
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|part| part.chars().next()).collect()
}

/// Severity badges for a row, zero counts omitted, e.g. `["C: 5", "H: 8"]`.
pub fn severity_badges(collaborator: &Collaborator) -> Vec<(Severity, String)> {
    collaborator
        .severity
        .nonzero()
        .map(|(severity, count)| (severity, format!("{}: {count}", severity.badge_prefix())))
        .collect()
}

/// User-facing explanation shown instead of the table for invalid data.
pub fn validation_message(error: &RosterError) -> String {
    match error {
        RosterError::DuplicateId { id, first, second } => {
            format!("El identificador {id} se repite en «{first}» y «{second}».")
        }
    }
}
