mod common;

use common::{id, recorder};
use pagerline::pager::{PagerError, PagerId, PagerIntent, PagerRegistry, PaginationState};

#[test]
fn resolve_accepts_bare_id_and_selector() {
    let mut registry = PagerRegistry::new();
    let handle = registry
        .create(id("results"), PaginationState::new(1, 10))
        .unwrap();

    assert_eq!(registry.resolve("results").unwrap(), handle);
    assert_eq!(registry.resolve("#results").unwrap(), handle);
}

#[test]
fn resolve_unknown_pager_fails() {
    let registry = PagerRegistry::new();
    assert_eq!(
        registry.resolve("#missing"),
        Err(PagerError::UnknownPager { id: id("missing") })
    );
    assert!(matches!(
        registry.resolve("#bad id"),
        Err(PagerError::InvalidId { .. })
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut registry = PagerRegistry::new();
    registry
        .create(id("results"), PaginationState::new(1, 10))
        .unwrap();
    let err = registry
        .create(id("results"), PaginationState::new(1, 3))
        .unwrap_err();
    assert_eq!(err, PagerError::DuplicateId { id: id("results") });
    assert_eq!(registry.len(), 1);
}

#[test]
fn instances_do_not_cross_talk() {
    let mut registry = PagerRegistry::new();
    let left = registry
        .create(id("left"), PaginationState::new(1, 40))
        .unwrap();
    let right = registry
        .create(id("right"), PaginationState::new(1, 40))
        .unwrap();
    let (left_log, left_subscriber) = recorder();
    let (right_log, right_subscriber) = recorder();
    let _l = registry.subscribe(&left, left_subscriber).unwrap();
    let _r = registry.subscribe(&right, right_subscriber).unwrap();

    registry
        .dispatch(&left, PagerIntent::PageNumberClicked(20))
        .unwrap();
    registry.dispatch(&right, PagerIntent::NextClicked).unwrap();
    registry
        .dispatch(&left, PagerIntent::PreviousClicked)
        .unwrap();

    assert_eq!(registry.get(&left).unwrap().state().current_page(), 19);
    assert_eq!(registry.get(&right).unwrap().state().current_page(), 2);
    assert_eq!(left_log.lock().len(), 2);
    assert_eq!(right_log.lock().len(), 1);
    assert!(left_log.lock().iter().all(|e| e.pager == id("left")));
}

#[test]
fn removed_pager_is_unreachable() {
    let mut registry = PagerRegistry::new();
    let handle = registry
        .create(id("results"), PaginationState::new(1, 10))
        .unwrap();
    let (log, subscriber) = recorder();
    let subscription = registry.subscribe(&handle, subscriber).unwrap();

    let removed = registry.remove(&handle).unwrap();
    assert_eq!(removed.id(), &id("results"));
    drop(removed);
    drop(subscription);

    assert!(registry.is_empty());
    assert!(matches!(
        registry.dispatch(&handle, PagerIntent::NextClicked),
        Err(PagerError::UnknownPager { .. })
    ));
    assert!(log.lock().is_empty());
}

#[test]
fn draw_page_buttons_through_registry() {
    let mut registry = PagerRegistry::new();
    let handle = registry
        .create(id("results"), PaginationState::new(50, 100))
        .unwrap();

    let pulled = registry.draw_page_buttons(&handle, None, None).unwrap();
    assert_eq!(pulled.page_numbers(), vec![1, 49, 50, 51, 100]);

    let pushed = registry
        .draw_page_buttons(&handle, Some(1), Some(0))
        .unwrap();
    assert!(pushed.is_empty());
}

#[test]
fn handles_are_listed_in_id_order() {
    let mut registry = PagerRegistry::new();
    for raw in ["zeta", "alpha", "mid"] {
        registry
            .create(id(raw), PaginationState::new(1, 1))
            .unwrap();
    }
    let ids: Vec<PagerId> = registry.handles().iter().map(|h| h.id().clone()).collect();
    assert_eq!(ids, vec![id("alpha"), id("mid"), id("zeta")]);
}
