use contacts_core::db::open_db_in_memory;
use contacts_core::{Contact, ContactListQuery, ContactRepository, SqliteContactRepository};
use rusqlite::Connection;

fn seed(conn: &Connection, names: &[(&str, &str)]) {
    let repo = SqliteContactRepository::new(conn);
    for (first, last) in names {
        let mut contact = Contact::empty();
        contact.first = (*first).to_string();
        contact.last = (*last).to_string();
        repo.create_contact(&contact).unwrap();
    }
}

fn search(conn: &Connection, filter: Option<&str>) -> Vec<String> {
    SqliteContactRepository::new(conn)
        .list_contacts(&ContactListQuery::filtered(filter))
        .unwrap()
        .into_iter()
        .map(|contact| format!("{} {}", contact.first, contact.last))
        .collect()
}

#[test]
fn filter_matches_substring_of_either_name() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[("Alice", "Smith"), ("Bob", "Jones")]);

    assert_eq!(search(&conn, Some("al")), vec!["Alice Smith"]);
    assert_eq!(search(&conn, Some("ONE")), vec!["Bob Jones"]);
}

#[test]
fn absent_and_blank_filters_list_everything() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[("Alice", "Smith"), ("Bob", "Jones")]);

    assert_eq!(search(&conn, None).len(), 2);
    assert_eq!(search(&conn, Some("")).len(), 2);
    assert_eq!(search(&conn, Some("   ")).len(), 2);
}

#[test]
fn every_term_must_match() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[("Alice", "Smith"), ("Alice", "Jones"), ("Bob", "Smith")]);

    assert_eq!(search(&conn, Some("alice smith")), vec!["Alice Smith"]);
    assert_eq!(search(&conn, Some("ce sm")), vec!["Alice Smith"]);
}

#[test]
fn wildcards_in_user_text_match_literally() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[("100%", "Sure"), ("Plain", "Name"), ("under_score", "Guy")]);

    assert_eq!(search(&conn, Some("%")), vec!["100% Sure"]);
    assert_eq!(search(&conn, Some("_")), vec!["under_score Guy"]);
}

#[test]
fn no_match_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[("Alice", "Smith")]);

    assert!(search(&conn, Some("zzz")).is_empty());
}
