use serde::Serialize;

use super::handle::PagerId;
use super::plan::RenderPlan;
use super::state::PaginationState;

/// Change notification emitted after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PagerSignal {
    CurrentPageChanged { from: u32, to: u32 },
    TotalsChanged { from: u32, to: u32 },
}

/// Payload delivered to subscribers: what changed, the resulting state and
/// the plan rendered from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerEvent {
    pub pager: PagerId,
    pub signal: PagerSignal,
    pub state: PaginationState,
    pub plan: RenderPlan,
}
