//! reddix
//!
//! Terminal feed browser: a three-pane TUI over a list of posts with
//! search, voting, and a settings modal.
//!
//! The crate follows a Pure Core / Impure Shell split: everything in
//! `model` and `state` is pure and synchronously testable, while
//! `view` owns the terminal and the event loop.

pub mod config;
pub mod data;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
