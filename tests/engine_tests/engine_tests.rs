//! Tests for Engine
//!
//! These tests verify:
//! - Construction and config validation
//! - Dataset assignment and derived outputs
//! - Debounced search, filter field changes and clearing
//! - Navigation, token activation and page-size changes
//! - Sorting through the engine
//! - Event routing

use std::time::{Duration, Instant};

use tableview::config::{Column, Config, SortScope};
use tableview::event::Event;
use tableview::filter::FieldSelector;
use tableview::pagination::PaginationToken;
use tableview::sort::SortDirection;
use tableview::{Engine, Record, ViewError};

// =============================================================================
// Helper Functions
// =============================================================================

fn people() -> Vec<Record> {
    vec![
        Record::new().with("id", 1).with("name", "Alice").with("city", "Paris"),
        Record::new().with("id", 2).with("name", "bob").with("city", "Oslo"),
        Record::new().with("id", 3).with("name", "Carol").with("city", "Lisbon"),
    ]
}

/// Records with `id` = 1..=count and `name` = "row{id}"
fn numbered(count: i32) -> Vec<Record> {
    (1..=count)
        .map(|i| Record::new().with("id", i).with("name", format!("row{i}")))
        .collect()
}

fn config() -> Config {
    Config::builder()
        .column("Id", "id")
        .column("Name", "name")
        .column("City", "city")
        .searchable(true)
        .show_filter_column(true)
        .show_page_entries(true)
        .show_pagination(true)
        .build()
}

fn setup_engine(records: Vec<Record>) -> Engine {
    Engine::with_records(config(), records).unwrap()
}

fn ids(engine: &Engine) -> Vec<String> {
    engine.visible_records().iter().map(|r| r.display("id")).collect()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_engine_rejects_invalid_config() {
    let config = Config::builder().page_size_options(vec![0]).build();
    assert!(matches!(Engine::new(config), Err(ViewError::Config(_))));

    let config = Config::builder().key_field("  ").build();
    assert!(matches!(Engine::new(config), Err(ViewError::Config(_))));

    let config = Config::builder().pagination_step(0).build();
    assert!(matches!(Engine::new(config), Err(ViewError::Config(_))));
}

#[test]
fn test_engine_rejects_settings_that_cannot_render() {
    let config = Config::builder()
        .show_pagination(true)
        .pagination_step(usize::MAX / 2)
        .build();
    assert!(matches!(
        Engine::with_records(config, numbered(50)),
        Err(ViewError::Config(_))
    ));

    let config = Config::builder().search_delay(Duration::MAX).build();
    assert!(matches!(Engine::new(config), Err(ViewError::Config(_))));
}

#[test]
fn test_new_engine_is_empty() {
    let engine = Engine::new(config()).unwrap();

    assert!(!engine.has_records());
    assert!(!engine.has_rendered_rows());
    assert_eq!(engine.total_pages(), 0);
    assert_eq!(engine.page_number(), 1);
    assert_eq!(engine.page_size(), 10);
    assert_eq!(engine.summary_message(), "Showing 0 to 0 of 0 entries");
}

#[test]
fn test_default_page_size_is_first_option() {
    let config = Config::builder().page_size_options(vec![5, 20]).build();
    let engine = Engine::new(config).unwrap();
    assert_eq!(engine.page_size(), 5);
}

// =============================================================================
// Dataset Tests
// =============================================================================

#[test]
fn test_set_records_renders_first_page() {
    let engine = setup_engine(numbered(7));

    assert_eq!(engine.visible_records().len(), 7);
    assert_eq!(engine.total_pages(), 1);
    assert_eq!(engine.summary_message(), "Showing 1 to 7 of 7 entries");
    assert!(engine.has_records());
    assert!(engine.has_rendered_rows());
}

#[test]
fn test_set_records_replaces_and_clears_filter() {
    let mut engine = setup_engine(people());
    engine.search("ali");
    assert!(engine.filter_active());

    engine.set_records(numbered(15));

    assert!(!engine.filter_active());
    assert_eq!(engine.total_rows(), 15);
    assert_eq!(engine.effective_count(), 15);
}

#[test]
fn test_empty_records_degrade_to_zero() {
    let mut engine = setup_engine(people());
    engine.set_records(Vec::new());

    assert!(engine.visible_records().is_empty());
    assert_eq!(engine.total_pages(), 0);
    assert_eq!(engine.summary_message(), "Showing 0 to 0 of 0 entries");
    assert_eq!(
        engine.pagination_tokens(),
        &[PaginationToken::Previous, PaginationToken::Next]
    );
}

#[test]
fn test_column_filter_options() {
    let engine = setup_engine(people());
    let values: Vec<String> = engine
        .column_filter_options()
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(values, vec!["all", "id", "name", "city"]);
    assert!(engine.has_header());
}

#[test]
fn test_page_length_options() {
    let engine = setup_engine(people());
    let labels: Vec<String> = engine
        .page_length_options()
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["10", "25", "50", "100"]);
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_apply_filter_on_named_field() {
    let mut engine = setup_engine(people());

    engine.apply_filter(FieldSelector::Field("name".to_string()), "al");

    assert_eq!(ids(&engine), vec!["1"]);
    assert_eq!(
        engine.summary_message(),
        "Showing 1 to 1 of 1 entries (filtered from 3 total entries)"
    );
}

#[test]
fn test_apply_filter_twice_is_identical() {
    let mut engine = setup_engine(people());

    engine.apply_filter(FieldSelector::All, "o");
    let first = engine.visible_records().to_vec();
    engine.apply_filter(FieldSelector::All, "o");

    assert_eq!(engine.visible_records(), first.as_slice());
}

#[test]
fn test_apply_filter_with_empty_term_matches_nothing() {
    let mut engine = setup_engine(people());

    engine.apply_filter(FieldSelector::All, "  ");

    assert!(engine.filter_active());
    assert!(engine.visible_records().is_empty());
}

#[test]
fn test_search_with_empty_text_clears_filter() {
    let mut engine = setup_engine(people());
    engine.search("bob");
    assert_eq!(engine.effective_count(), 1);

    engine.search(" * ");

    assert!(!engine.filter_active());
    assert_eq!(engine.effective_count(), 3);
}

#[test]
fn test_clear_filter_resets_page_and_count() {
    let mut engine = setup_engine(numbered(100));
    engine.search("row");
    engine.go_to_page(4);
    assert_eq!(engine.page_number(), 4);

    engine.clear_filter();

    assert_eq!(engine.effective_count(), 100);
    assert_eq!(engine.page_number(), 1);
}

#[test]
fn test_filter_field_change_reapplies_search() {
    let mut engine = setup_engine(people());
    engine.search("o");
    // bob, Oslo, Carol, Lisbon
    assert_eq!(ids(&engine), vec!["2", "3"]);

    engine.set_filter_field(FieldSelector::Field("city".to_string()));

    assert_eq!(ids(&engine), vec!["2", "3"]);

    engine.set_filter_field(FieldSelector::Field("name".to_string()));
    assert_eq!(ids(&engine), vec!["2", "3"]);

    engine.search("a");
    assert_eq!(ids(&engine), vec!["1", "3"]);
    engine.set_filter_field(FieldSelector::Field("city".to_string()));
    assert_eq!(ids(&engine), vec!["1"]);
}

#[test]
fn test_set_columns_reverts_stale_filter_field() {
    let mut engine = setup_engine(people());
    engine.set_filter_field(FieldSelector::Field("city".to_string()));
    engine.search("o");
    assert_eq!(ids(&engine), vec!["2", "3"]);

    engine.set_columns(vec![Column::new("Name", "name")]);

    assert_eq!(engine.state().selector(), &FieldSelector::All);
    assert!(engine.filter_active());
    assert_eq!(ids(&engine), vec!["2", "3"]);
}

// =============================================================================
// Debounce Tests
// =============================================================================

#[test]
fn test_search_input_waits_for_quiet_period() {
    let mut engine = setup_engine(people());
    let start = Instant::now();

    engine.input_search("a", start);
    engine.input_search("al", start + Duration::from_millis(100));

    assert!(!engine.poll(start + Duration::from_millis(300)));
    assert!(!engine.filter_active());
    assert!(engine.search_pending());

    assert!(engine.poll(start + Duration::from_millis(400)));
    assert_eq!(ids(&engine), vec!["1"]);
    assert!(!engine.search_pending());
}

#[test]
fn test_search_input_of_nothing_clears_filter() {
    let mut engine = setup_engine(people());
    engine.search("bob");
    let start = Instant::now();

    engine.input_search("", start);
    assert!(engine.poll(start + Duration::from_millis(300)));

    assert!(!engine.filter_active());
    assert_eq!(engine.visible_records().len(), 3);
}

#[test]
fn test_flush_and_cancel_search() {
    let mut engine = setup_engine(people());
    let start = Instant::now();

    engine.input_search("carol", start);
    assert!(engine.search_due_at().is_some());
    assert!(engine.flush_search());
    assert_eq!(ids(&engine), vec!["3"]);

    engine.input_search("bob", start);
    engine.cancel_search();
    assert!(!engine.flush_search());
    assert_eq!(ids(&engine), vec!["3"]);
}

#[test]
fn test_custom_search_delay() {
    let config = Config::builder()
        .search_delay(Duration::from_millis(50))
        .build();
    let mut engine = Engine::with_records(config, people()).unwrap();
    let start = Instant::now();

    engine.input_search("bob", start);
    assert!(engine.poll(start + Duration::from_millis(50)));
    assert_eq!(engine.effective_count(), 1);
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[test]
fn test_next_and_previous_clamp() {
    let mut engine = setup_engine(numbered(35));

    engine.previous_page();
    assert_eq!(engine.page_number(), 1);

    for _ in 0..10 {
        engine.next_page();
    }
    assert_eq!(engine.page_number(), 4);
    assert_eq!(ids(&engine), vec!["31", "32", "33", "34", "35"]);
    assert_eq!(engine.summary_message(), "Showing 31 to 35 of 35 entries");
}

#[test]
fn test_navigation_is_noop_when_nothing_visible() {
    let mut engine = setup_engine(numbered(35));
    engine.search("nothing");

    engine.next_page();
    engine.previous_page();

    assert_eq!(engine.page_number(), 1);
    assert_eq!(engine.total_pages(), 0);
}

#[test]
fn test_go_to_page_out_of_range_is_clamped() {
    let mut engine = setup_engine(numbered(35));

    engine.go_to_page(99);
    assert_eq!(engine.page_number(), 4);

    engine.go_to_page(0);
    assert_eq!(engine.page_number(), 1);
}

#[test]
fn test_activate_tokens() {
    let mut engine = setup_engine(numbered(200));
    assert_eq!(engine.total_pages(), 20);

    engine.activate(PaginationToken::Page { number: 9, active: false });
    assert_eq!(engine.page_number(), 9);

    engine.activate(PaginationToken::Ellipsis);
    assert_eq!(engine.page_number(), 9);

    engine.activate(PaginationToken::Next);
    assert_eq!(engine.page_number(), 10);

    engine.activate(PaginationToken::Previous);
    engine.activate(PaginationToken::Previous);
    assert_eq!(engine.page_number(), 8);
}

#[test]
fn test_tokens_follow_current_page() {
    let mut engine = setup_engine(numbered(1000));
    engine.go_to_page(50);

    let tokens = engine.pagination_tokens();
    assert_eq!(tokens.len(), 13);
    assert_eq!(tokens[1].page_number(), Some(1));
    assert_eq!(tokens[2], PaginationToken::Ellipsis);
    assert_eq!(tokens[3].page_number(), Some(47));
    assert!(tokens[6].is_active());
    assert_eq!(tokens[11].page_number(), Some(100));
}

#[test]
fn test_tokens_hidden_without_pagination_controls() {
    let config = Config::builder().show_page_entries(true).build();
    let engine = Engine::with_records(config, numbered(50)).unwrap();

    assert!(engine.pagination_tokens().is_empty());
    assert_eq!(engine.visible_records().len(), 10);
}

#[test]
fn test_page_size_change_resets_page() {
    let mut engine = setup_engine(numbered(100));
    engine.go_to_page(5);
    assert_eq!(engine.page_number(), 5);

    engine.set_page_size(25);

    assert_eq!(engine.page_number(), 1);
    assert_eq!(engine.total_pages(), 4);
    assert_eq!(engine.visible_records().len(), 25);
    assert_eq!(engine.summary_message(), "Showing 1 to 25 of 100 entries");
}

#[test]
fn test_zero_page_size_is_ignored() {
    let mut engine = setup_engine(numbered(100));
    engine.go_to_page(3);

    engine.set_page_size(0);

    assert_eq!(engine.page_size(), 10);
    assert_eq!(engine.page_number(), 3);
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_visible_page() {
    let mut engine = setup_engine(people());

    engine.apply_sort("name", SortDirection::Asc);
    // Uppercase sorts first
    assert_eq!(ids(&engine), vec!["1", "3", "2"]);

    engine.apply_sort("id", SortDirection::Desc);
    assert_eq!(ids(&engine), vec!["3", "2", "1"]);

    engine.clear_sort();
    assert_eq!(ids(&engine), vec!["1", "2", "3"]);
}

#[test]
fn test_source_scope_sort_through_engine() {
    let config = Config::builder()
        .show_pagination(true)
        .sort_scope(SortScope::Source)
        .build();
    let mut engine = Engine::with_records(config, numbered(25)).unwrap();

    engine.apply_sort("id", SortDirection::Desc);
    engine.next_page();

    assert_eq!(ids(&engine).first().map(String::as_str), Some("15"));
    assert_eq!(engine.snapshot().sort.as_ref().map(|s| s.field.as_str()), Some("id"));
}

#[test]
fn test_source_sort_survives_page_round_trip() {
    let config = Config::builder()
        .show_pagination(true)
        .sort_scope(SortScope::Source)
        .build();
    let mut engine = Engine::with_records(config, numbered(25)).unwrap();
    engine.apply_sort("id", SortDirection::Desc);

    engine.next_page();
    assert_eq!(engine.page_number(), 2);
    engine.previous_page();
    assert_eq!(engine.page_number(), 1);

    assert_eq!(ids(&engine).first().map(String::as_str), Some("25"));
    assert!(engine.snapshot().sort.is_some());
}

// =============================================================================
// Event Routing Tests
// =============================================================================

#[test]
fn test_execute_routes_events() {
    let mut engine = Engine::new(config()).unwrap();
    let start = Instant::now();

    engine.execute(Event::SetRecords(numbered(60)));
    engine.execute(Event::PageSize(25));
    engine.execute(Event::NextPage);
    assert_eq!(engine.page_number(), 2);

    engine.execute_at(Event::SearchInput("row1".to_string()), start);
    assert!(engine.search_pending());
    assert!(engine.poll(start + Duration::from_millis(300)));
    // row1, row10..row19
    assert_eq!(engine.effective_count(), 11);
    assert_eq!(engine.page_number(), 1);

    engine.execute(Event::Sort {
        field: "id".to_string(),
        direction: SortDirection::Desc,
    });
    assert_eq!(ids(&engine).first().map(String::as_str), Some("19"));

    engine.execute(Event::ClearFilter);
    engine.execute(Event::GoToPage(3));
    assert_eq!(engine.page_number(), 3);
    assert_eq!(engine.summary_message(), "Showing 51 to 60 of 60 entries");

    engine.execute(Event::Activate(PaginationToken::Previous));
    engine.execute(Event::PreviousPage);
    assert_eq!(engine.page_number(), 1);

    engine.execute(Event::Search("row6".to_string()));
    engine.execute(Event::FilterField(FieldSelector::Field("id".to_string())));
    assert_eq!(engine.effective_count(), 0);

    engine.execute(Event::SetColumns(vec![Column::new("Name", "name")]));
    assert_eq!(engine.state().selector(), &FieldSelector::All);
    // row6, row60
    assert_eq!(engine.effective_count(), 2);
}
