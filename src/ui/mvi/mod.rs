//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between pager controls and the state they display.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ RenderPlan
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Plain value describing what is displayed
//! - **Intent**: Clicks and external writes
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
