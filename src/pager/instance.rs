use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::handle::{PagerHandle, PagerId};
use super::intent::PagerIntent;
use super::plan::{compute_render_plan, RenderPlan};
use super::reducer::PagerReducer;
use super::signal::{PagerEvent, PagerSignal};
use super::state::{clamp_page, PaginationState};

/// Observer of one pager instance.
///
/// Called synchronously from [`Pager::dispatch`] after the state has been
/// updated and the plan re-rendered.
pub trait PagerSubscriber: Send + Sync {
    fn on_pager_change(&self, event: &PagerEvent);
}

impl<F> PagerSubscriber for F
where
    F: Fn(&PagerEvent) + Send + Sync,
{
    fn on_pager_change(&self, event: &PagerEvent) {
        self(event)
    }
}

#[derive(Default)]
struct SubscriberList {
    next_id: u64,
    entries: Vec<(u64, Arc<dyn PagerSubscriber>)>,
}

/// Registration returned by [`Pager::subscribe`].
///
/// Dropping it releases the slot. Outliving the pager is harmless.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    list: Weak<Mutex<SubscriberList>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(list) = self.list.upgrade() {
            list.lock().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

/// One pagination control: its state and the observers re-rendering it.
pub struct Pager {
    id: PagerId,
    state: PaginationState,
    subscribers: Arc<Mutex<SubscriberList>>,
}

impl Pager {
    pub fn new(id: PagerId, state: PaginationState) -> Self {
        Self {
            id,
            state,
            subscribers: Arc::new(Mutex::new(SubscriberList::default())),
        }
    }

    pub fn id(&self) -> &PagerId {
        &self.id
    }

    pub fn handle(&self) -> PagerHandle {
        PagerHandle::new(self.id.clone())
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Plan for the current state.
    pub fn render_plan(&self) -> RenderPlan {
        compute_render_plan(self.state.current_page(), self.state.total_pages())
    }

    pub fn subscribe(&self, subscriber: impl PagerSubscriber + 'static) -> Subscription {
        let mut list = self.subscribers.lock();
        let id = list.next_id;
        list.next_id += 1;
        list.entries.push((id, Arc::new(subscriber)));
        Subscription {
            id,
            list: Arc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().entries.len()
    }

    /// Apply an intent, then re-render and notify if it produced a signal.
    pub fn dispatch(&mut self, intent: PagerIntent) -> Option<PagerSignal> {
        let (next, signal) = PagerReducer::transition(self.state, intent);
        self.state = next;

        let Some(signal) = signal else {
            tracing::debug!(pager = %self.id, ?intent, "intent left pager unchanged");
            return None;
        };

        tracing::debug!(
            pager = %self.id,
            ?intent,
            ?signal,
            current_page = next.current_page(),
            total_pages = next.total_pages(),
            "pager state changed"
        );
        self.notify(signal);
        Some(signal)
    }

    /// External write of the current page.
    pub fn set_current_page(&mut self, page: u32) -> Option<PagerSignal> {
        self.dispatch(PagerIntent::SetCurrentPage(page))
    }

    /// External write of the page count.
    pub fn set_total_pages(&mut self, total: u32) -> Option<PagerSignal> {
        self.dispatch(PagerIntent::SetTotalPages(total))
    }

    /// Render without touching state.
    ///
    /// Omitted values are read from the pager's own fields. Explicit values
    /// are clamped into range before rendering.
    pub fn draw_page_buttons(
        &self,
        current_page: Option<u32>,
        total_pages: Option<u32>,
    ) -> RenderPlan {
        let total = total_pages.unwrap_or(self.state.total_pages());
        let requested = current_page.unwrap_or(self.state.current_page());
        let current = clamp_page(requested, total);
        if current != requested && total > 0 {
            tracing::warn!(
                pager = %self.id,
                requested,
                total,
                current,
                "clamped out-of-range page before rendering"
            );
        }
        compute_render_plan(current, total)
    }

    fn notify(&self, signal: PagerSignal) {
        let event = PagerEvent {
            pager: self.id.clone(),
            signal,
            state: self.state,
            plan: self.render_plan(),
        };

        // Snapshot so a subscriber may drop its own Subscription mid-notify.
        let subscribers: Vec<Arc<dyn PagerSubscriber>> = self
            .subscribers
            .lock()
            .entries
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();

        tracing::trace!(pager = %self.id, count = subscribers.len(), "notifying subscribers");
        for subscriber in subscribers {
            subscriber.on_pager_change(&event);
        }
    }
}
