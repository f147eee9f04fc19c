mod common;

use common::{id, layout};
use pagerline::pager::{Pager, PaginationState};

fn parse(json: &str) -> PaginationState {
    serde_json::from_str(json).expect("state should deserialize")
}

#[test]
fn deserialized_page_below_range_is_clamped() {
    let state = parse(r#"{"current_page":0,"total_pages":5}"#);
    assert_eq!(state, PaginationState::new(1, 5));
}

#[test]
fn deserialized_page_above_range_is_clamped() {
    let state = parse(r#"{"current_page":9,"total_pages":5}"#);
    assert_eq!(state.current_page(), 5);
    assert_eq!(state.total_pages(), 5);
}

#[test]
fn deserialized_state_renders_without_tripping_range_check() {
    let pager = Pager::new(id("results"), parse(r#"{"current_page":9,"total_pages":5}"#));
    let plan = pager.render_plan();
    assert_eq!(plan.current_page(), Some(5));
    assert_eq!(layout(&plan), vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    assert_eq!(parse("{}"), PaginationState::default());
    assert_eq!(parse(r#"{"total_pages":12}"#), PaginationState::new(1, 12));
}

#[test]
fn serialized_state_reads_back_unchanged() {
    let state = PaginationState::new(7, 40);
    let json = serde_json::to_string(&state).expect("state should serialize");
    assert_eq!(parse(&json), state);
}
