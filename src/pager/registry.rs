use std::collections::BTreeMap;

use super::error::PagerError;
use super::handle::{PagerHandle, PagerId};
use super::instance::{Pager, PagerSubscriber, Subscription};
use super::intent::PagerIntent;
use super::plan::RenderPlan;
use super::signal::PagerSignal;
use super::state::PaginationState;

/// All pager instances on one host surface, keyed by id.
///
/// Ids are unique, so events for one pager can never reach another.
#[derive(Default)]
pub struct PagerRegistry {
    pagers: BTreeMap<PagerId, Pager>,
}

impl PagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        id: PagerId,
        state: PaginationState,
    ) -> Result<PagerHandle, PagerError> {
        if self.pagers.contains_key(&id) {
            return Err(PagerError::DuplicateId { id });
        }

        tracing::info!(
            pager = %id,
            current_page = state.current_page(),
            total_pages = state.total_pages(),
            "pager created"
        );
        let pager = Pager::new(id.clone(), state);
        let handle = pager.handle();
        self.pagers.insert(id, pager);
        Ok(handle)
    }

    /// Turn a host locator (`results` or `#results`) into a handle.
    pub fn resolve(&self, locator: &str) -> Result<PagerHandle, PagerError> {
        let id = PagerId::from_locator(locator)?;
        if self.pagers.contains_key(&id) {
            Ok(PagerHandle::new(id))
        } else {
            Err(PagerError::UnknownPager { id })
        }
    }

    pub fn get(&self, handle: &PagerHandle) -> Result<&Pager, PagerError> {
        self.pagers
            .get(handle.id())
            .ok_or_else(|| PagerError::UnknownPager {
                id: handle.id().clone(),
            })
    }

    pub fn get_mut(&mut self, handle: &PagerHandle) -> Result<&mut Pager, PagerError> {
        self.pagers
            .get_mut(handle.id())
            .ok_or_else(|| PagerError::UnknownPager {
                id: handle.id().clone(),
            })
    }

    /// Tear down a pager. Its subscriber list goes with it; outstanding
    /// [`Subscription`] guards become no-ops.
    pub fn remove(&mut self, handle: &PagerHandle) -> Result<Pager, PagerError> {
        let pager = self
            .pagers
            .remove(handle.id())
            .ok_or_else(|| PagerError::UnknownPager {
                id: handle.id().clone(),
            })?;
        tracing::info!(pager = %handle.id(), "pager removed");
        Ok(pager)
    }

    pub fn subscribe(
        &self,
        handle: &PagerHandle,
        subscriber: impl PagerSubscriber + 'static,
    ) -> Result<Subscription, PagerError> {
        Ok(self.get(handle)?.subscribe(subscriber))
    }

    pub fn dispatch(
        &mut self,
        handle: &PagerHandle,
        intent: PagerIntent,
    ) -> Result<Option<PagerSignal>, PagerError> {
        Ok(self.get_mut(handle)?.dispatch(intent))
    }

    /// Render entry point for hosts. See [`Pager::draw_page_buttons`].
    pub fn draw_page_buttons(
        &self,
        handle: &PagerHandle,
        current_page: Option<u32>,
        total_pages: Option<u32>,
    ) -> Result<RenderPlan, PagerError> {
        Ok(self.get(handle)?.draw_page_buttons(current_page, total_pages))
    }

    /// Handles in id order.
    pub fn handles(&self) -> Vec<PagerHandle> {
        self.pagers.values().map(Pager::handle).collect()
    }

    pub fn len(&self) -> usize {
        self.pagers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pagers.is_empty()
    }
}
