use pagerline::pager::{PagerIntent, PagerReducer, PagerSignal, PaginationState};
use pagerline::ui::mvi::Reducer;

#[test]
fn page_click_sets_current_page() {
    let state = PaginationState::new(1, 20);
    let (next, signal) = PagerReducer::transition(state, PagerIntent::PageNumberClicked(7));
    assert_eq!(next.current_page(), 7);
    assert_eq!(signal, Some(PagerSignal::CurrentPageChanged { from: 1, to: 7 }));
}

#[test]
fn clicking_current_page_still_signals() {
    let state = PaginationState::new(4, 20);
    let (next, signal) = PagerReducer::transition(state, PagerIntent::PageNumberClicked(4));
    assert_eq!(next, state);
    assert_eq!(signal, Some(PagerSignal::CurrentPageChanged { from: 4, to: 4 }));
}

#[test]
fn page_click_is_clamped_into_range() {
    let state = PaginationState::new(1, 20);
    assert_eq!(
        PagerReducer::reduce(state, PagerIntent::PageNumberClicked(99)).current_page(),
        20
    );
    assert_eq!(
        PagerReducer::reduce(state, PagerIntent::PageNumberClicked(0)).current_page(),
        1
    );
}

#[test]
fn previous_at_first_page_is_noop() {
    let state = PaginationState::new(1, 50);
    let (next, signal) = PagerReducer::transition(state, PagerIntent::PreviousClicked);
    assert_eq!(next, state);
    assert_eq!(signal, None);
}

#[test]
fn next_at_last_page_is_noop() {
    let state = PaginationState::new(50, 50);
    let (next, signal) = PagerReducer::transition(state, PagerIntent::NextClicked);
    assert_eq!(next, state);
    assert_eq!(signal, None);
}

#[test]
fn previous_and_next_step_by_one() {
    let state = PaginationState::new(10, 50);
    assert_eq!(
        PagerReducer::reduce(state, PagerIntent::PreviousClicked).current_page(),
        9
    );
    assert_eq!(
        PagerReducer::reduce(state, PagerIntent::NextClicked).current_page(),
        11
    );
}

#[test]
fn next_with_no_pages_is_noop() {
    let state = PaginationState::default();
    let (next, signal) = PagerReducer::transition(state, PagerIntent::NextClicked);
    assert_eq!(next, state);
    assert_eq!(signal, None);
}

#[test]
fn external_page_write_signals_only_on_change() {
    let state = PaginationState::new(5, 50);
    let (_, same) = PagerReducer::transition(state, PagerIntent::SetCurrentPage(5));
    assert_eq!(same, None);

    let (next, changed) = PagerReducer::transition(state, PagerIntent::SetCurrentPage(30));
    assert_eq!(next.current_page(), 30);
    assert_eq!(changed, Some(PagerSignal::CurrentPageChanged { from: 5, to: 30 }));
}

#[test]
fn shrinking_total_reclamps_and_signals_once() {
    let state = PaginationState::new(40, 50);
    let (next, signal) = PagerReducer::transition(state, PagerIntent::SetTotalPages(12));
    assert_eq!(next.total_pages(), 12);
    assert_eq!(next.current_page(), 12);
    assert_eq!(signal, Some(PagerSignal::TotalsChanged { from: 50, to: 12 }));
}

#[test]
fn unchanged_total_does_not_signal() {
    let state = PaginationState::new(3, 8);
    let (_, signal) = PagerReducer::transition(state, PagerIntent::SetTotalPages(8));
    assert_eq!(signal, None);
}

#[test]
fn total_of_zero_resets_current_page_to_one() {
    let state = PaginationState::new(3, 8);
    let next = PagerReducer::reduce(state, PagerIntent::SetTotalPages(0));
    assert_eq!(next.current_page(), 1);
    assert!(!next.has_pages());
}
