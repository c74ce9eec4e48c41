use super::*;
use secmetrics::fixture;
use secmetrics::{SeverityBreakdown, SortDirection, SortState};

// =============================================================
// apply_event
// =============================================================

#[test]
fn search_event_updates_text() {
    let mut query = RosterQuery::default();
    assert!(apply_event(&mut query, TableEvent::Search("ana".to_owned())));
    assert_eq!(query.search, "ana");
}

#[test]
fn repeated_search_event_reports_no_change() {
    let mut query = RosterQuery::default();
    apply_event(&mut query, TableEvent::Search("ana".to_owned()));
    assert!(!apply_event(&mut query, TableEvent::Search("ana".to_owned())));
}

#[test]
fn department_event_parses_select_value() {
    let mut query = RosterQuery::default();
    assert!(apply_event(&mut query, TableEvent::Department("QA".to_owned())));
    assert_eq!(query.department, DepartmentFilter::Only("QA".to_owned()));

    assert!(apply_event(&mut query, TableEvent::Department("all".to_owned())));
    assert_eq!(query.department, DepartmentFilter::All);
    assert!(!apply_event(&mut query, TableEvent::Department("all".to_owned())));
}

#[test]
fn sort_events_follow_toggle_rules() {
    let mut query = RosterQuery::default();

    assert!(apply_event(&mut query, TableEvent::SortBy(SortField::IssuesReported)));
    assert_eq!(
        query.sort,
        SortState {
            field: SortField::IssuesReported,
            direction: SortDirection::Asc
        }
    );

    assert!(apply_event(&mut query, TableEvent::SortBy(SortField::Name)));
    assert_eq!(
        query.sort,
        SortState {
            field: SortField::Name,
            direction: SortDirection::Desc
        }
    );
}

#[test]
fn events_leave_other_inputs_untouched() {
    let mut query = RosterQuery::default();
    apply_event(&mut query, TableEvent::Search("ro".to_owned()));
    apply_event(&mut query, TableEvent::SortBy(SortField::Commits));
    assert_eq!(query.search, "ro");
    assert_eq!(query.department, DepartmentFilter::All);
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn top_performer_text_names_first_row() {
    let roster = fixture::Dataset::Primary.roster().unwrap();
    let rows = roster.derive(&RosterQuery::default());
    let first = rows.first().unwrap();
    assert_eq!(top_performer_text(first), "María González lidera con 23 issues reportadas");
}

#[test]
fn qa_filter_banner_targets_sole_member() {
    let roster = fixture::Dataset::Primary.roster().unwrap();
    let mut query = RosterQuery::default();
    apply_event(&mut query, TableEvent::Department("QA".to_owned()));
    let rows = roster.derive(&query);
    assert_eq!(rows.len(), 1);
    assert_eq!(top_performer_text(rows[0]), "Sandra López lidera con 18 issues reportadas");
}

#[test]
fn initials_take_first_letter_of_every_word() {
    assert_eq!(initials("María González"), "MG");
    assert_eq!(initials("Luis Chen"), "LC");
    assert_eq!(initials("Ana Sofía Díaz"), "ASD");
    assert_eq!(initials("ana"), "a");
    assert_eq!(initials(""), "");
}

#[test]
fn severity_badges_label_each_level() {
    let roster = fixture::Dataset::Primary.roster().unwrap();
    let maria = roster.get(1).unwrap();
    let labels = severity_badges(maria).into_iter().map(|(_, text)| text).collect::<Vec<_>>();
    assert_eq!(labels, ["C: 5", "H: 8", "M: 7", "L: 3"]);
}

#[test]
fn severity_badges_omit_zero_counts() {
    let roster = fixture::Dataset::Primary.roster().unwrap();
    let mut luis = roster.get(4).unwrap().clone();
    luis.severity = SeverityBreakdown::new(0, 3, 0, 2);
    let badges = severity_badges(&luis);
    assert_eq!(
        badges,
        [(Severity::High, "H: 3".to_owned()), (Severity::Low, "L: 2".to_owned())]
    );
}

#[test]
fn validation_message_names_duplicate_entries() {
    let Err(error) = fixture::Dataset::Legacy.roster() else {
        panic!("legacy dataset should fail validation");
    };
    assert_eq!(
        validation_message(&error),
        "El identificador 2 se repite en «Carlos Rodriguez» y «Ana Martínez»."
    );
}
