//! Pagination control core.
//!
//! A [`Pager`] owns a [`PaginationState`]. Clicks and host writes arrive as
//! [`PagerIntent`]s, go through [`PagerReducer`], and every resulting
//! [`PagerSignal`] re-renders a fresh [`RenderPlan`] for the subscribers.

mod error;
mod handle;
mod instance;
mod intent;
mod plan;
mod reducer;
mod registry;
mod signal;
mod state;

pub use error::PagerError;
pub use handle::{PagerHandle, PagerId};
pub use instance::{Pager, PagerSubscriber, Subscription};
pub use intent::PagerIntent;
pub use plan::{
    classify_zone, compute_render_plan, ControlDescriptor, RenderPlan, Zone, EDGE_SPAN,
    FULL_RANGE_LIMIT,
};
pub use reducer::PagerReducer;
pub use registry::PagerRegistry;
pub use signal::{PagerEvent, PagerSignal};
pub use state::{clamp_page, PaginationState};
