//! Pagination controls for terminal hosts.
//!
//! [`pager`] holds the page-selection algorithm and the state/signal
//! protocol; [`ui`] materializes render plans with ratatui and hosts pagers
//! in a terminal application.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pager;
pub mod ui;
