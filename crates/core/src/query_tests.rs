//! Tests for the customer query pipeline and sort toggling.

use crate::sample_data::customers;
use crate::{
    filter_customers, CustomerQuery, CustomerRecord, CustomerStatus, SortDirection, SortKey,
    SortState,
};
use chrono::NaiveDate;

fn record(id: u32, name: &str, email: &str, amount: f64, day: u32) -> CustomerRecord {
    CustomerRecord {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        amount,
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        status: CustomerStatus::Pending,
    }
}

fn ids(records: &[&CustomerRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn test_empty_search_returns_all_in_source_order() {
    let data = customers();
    let result = filter_customers(&data, "");
    assert_eq!(ids(&result), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_search_matches_name_case_insensitively() {
    let data = customers();
    let result = filter_customers(&data, "JOHN");
    // "John Doe" by name, "Robert Johnson" by name
    assert_eq!(ids(&result), vec![1, 3]);
}

#[test]
fn test_search_matches_email() {
    let data = customers();
    let result = filter_customers(&data, "sarah@");
    assert_eq!(ids(&result), vec![6]);
}

#[test]
fn test_search_is_exact_set() {
    let data = customers();
    let term = "an";
    let result = filter_customers(&data, term);
    let expected: Vec<u32> = data
        .iter()
        .filter(|r| r.name.to_lowercase().contains(term) || r.email.to_lowercase().contains(term))
        .map(|r| r.id)
        .collect();
    assert_eq!(ids(&result), expected);
}

#[test]
fn test_search_no_match() {
    let data = customers();
    assert!(filter_customers(&data, "zzz").is_empty());
}

#[test]
fn test_default_query_is_newest_first() {
    let data = customers();
    let result = CustomerQuery::default().apply(&data);
    assert_eq!(ids(&result), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_sort_by_amount_ascending() {
    let data = customers();
    let query = CustomerQuery::new("", SortState::new(SortKey::Amount, SortDirection::Ascending));
    let result = query.apply(&data);
    let amounts: Vec<f64> = result.iter().map(|r| r.amount).collect();
    assert_eq!(amounts.first().copied(), Some(680.0));
    assert_eq!(amounts.last().copied(), Some(3100.0));
    assert!(amounts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_opposite_direction_is_exact_reverse_for_amount_and_date() {
    let data = customers();
    for key in [SortKey::Amount, SortKey::Date] {
        let asc = CustomerQuery::new("", SortState::new(key, SortDirection::Ascending)).apply(&data);
        let mut desc =
            CustomerQuery::new("", SortState::new(key, SortDirection::Descending)).apply(&data);
        desc.reverse();
        assert_eq!(ids(&asc), ids(&desc), "key {key:?}");
    }
}

#[test]
fn test_sort_by_name_ignores_case() {
    let data = vec![
        record(1, "bob", "b@x.io", 1.0, 1),
        record(2, "Alice", "a@x.io", 1.0, 2),
        record(3, "carol", "c@x.io", 1.0, 3),
    ];
    let asc = CustomerQuery::new("", SortState::new(SortKey::Name, SortDirection::Ascending))
        .apply(&data);
    assert_eq!(ids(&asc), vec![2, 1, 3]);
    let desc = CustomerQuery::new("", SortState::new(SortKey::Name, SortDirection::Descending))
        .apply(&data);
    assert_eq!(ids(&desc), vec![3, 1, 2]);
}

#[test]
fn test_equal_keys_keep_source_order() {
    let data = vec![
        record(1, "A", "a@x.io", 500.0, 1),
        record(2, "B", "b@x.io", 100.0, 2),
        record(3, "C", "c@x.io", 500.0, 3),
    ];
    let asc = CustomerQuery::new("", SortState::new(SortKey::Amount, SortDirection::Ascending))
        .apply(&data);
    assert_eq!(ids(&asc), vec![2, 1, 3]);
    let desc = CustomerQuery::new("", SortState::new(SortKey::Amount, SortDirection::Descending))
        .apply(&data);
    assert_eq!(ids(&desc), vec![1, 3, 2]);
}

#[test]
fn test_result_is_permutation_of_filtered_set() {
    let data = customers();
    let filtered = filter_customers(&data, "e");
    let query = CustomerQuery::new("e", SortState::new(SortKey::Name, SortDirection::Descending));
    let mut sorted = ids(&query.apply(&data));
    let mut expected = ids(&filtered);
    sorted.sort_unstable();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
}

#[test]
fn test_apply_does_not_mutate_source() {
    let data = customers();
    let before = data.clone();
    let _ = CustomerQuery::new("", SortState::new(SortKey::Amount, SortDirection::Ascending))
        .apply(&data);
    assert_eq!(data, before);
}

#[test]
fn test_toggle_same_key_flips_direction() {
    let state = SortState::new(SortKey::Name, SortDirection::Ascending);
    let once = state.toggle(SortKey::Name);
    assert_eq!(once.direction, SortDirection::Descending);
    let twice = once.toggle(SortKey::Name);
    assert_eq!(twice, state);
}

#[test]
fn test_toggle_new_key_resets_to_ascending() {
    let state = SortState::default();
    assert_eq!(state.direction, SortDirection::Descending);
    let next = state.toggle(SortKey::Amount);
    assert_eq!(next, SortState::new(SortKey::Amount, SortDirection::Ascending));

    let from_desc = SortState::new(SortKey::Amount, SortDirection::Descending).toggle(SortKey::Name);
    assert_eq!(from_desc.direction, SortDirection::Ascending);
}

#[test]
fn test_default_state_toggle_on_date_goes_ascending() {
    let next = SortState::default().toggle(SortKey::Date);
    assert_eq!(next, SortState::new(SortKey::Date, SortDirection::Ascending));
}

#[test]
fn test_sort_key_and_direction_parse() {
    assert_eq!("Amount".parse::<SortKey>().unwrap(), SortKey::Amount);
    assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
    assert!("status".parse::<SortKey>().is_err());
    assert!("sideways".parse::<SortDirection>().is_err());
}
