use crate::pager::intent::PagerIntent;
use crate::pager::signal::PagerSignal;
use crate::pager::state::PaginationState;
use crate::ui::mvi::Reducer;

pub struct PagerReducer;

impl Reducer for PagerReducer {
    type State = PaginationState;
    type Intent = PagerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PagerIntent::PageNumberClicked(page) | PagerIntent::SetCurrentPage(page) => {
                state.with_current_page(page)
            }
            PagerIntent::PreviousClicked if state.has_previous() => {
                state.with_current_page(state.current_page() - 1)
            }
            PagerIntent::NextClicked if state.has_next() => {
                state.with_current_page(state.current_page() + 1)
            }
            PagerIntent::PreviousClicked | PagerIntent::NextClicked => state,
            PagerIntent::SetTotalPages(total) => state.with_total_pages(total),
        }
    }
}

impl PagerReducer {
    /// Signal owed for a transition, if any.
    ///
    /// Numbered clicks always signal. Everything else signals only when the
    /// field it writes actually changed; a total change that also re-clamps
    /// the current page still produces a single `TotalsChanged`.
    pub fn signal_for(
        intent: PagerIntent,
        before: PaginationState,
        after: PaginationState,
    ) -> Option<PagerSignal> {
        let page_changed = PagerSignal::CurrentPageChanged {
            from: before.current_page(),
            to: after.current_page(),
        };

        match intent {
            PagerIntent::PageNumberClicked(_) => Some(page_changed),
            PagerIntent::PreviousClicked
            | PagerIntent::NextClicked
            | PagerIntent::SetCurrentPage(_) => {
                (before.current_page() != after.current_page()).then_some(page_changed)
            }
            PagerIntent::SetTotalPages(_) => (before.total_pages() != after.total_pages())
                .then_some(PagerSignal::TotalsChanged {
                    from: before.total_pages(),
                    to: after.total_pages(),
                }),
        }
    }

    /// Reduce and derive the signal in one step.
    pub fn transition(
        state: PaginationState,
        intent: PagerIntent,
    ) -> (PaginationState, Option<PagerSignal>) {
        let next = Self::reduce(state, intent);
        (next, Self::signal_for(intent, state, next))
    }
}
