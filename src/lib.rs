//! A library simulating a small regional emergency-dispatch network.
//!
//! A fixed set of cities is connected by weighted roads; each city hosts
//! a hospital facility with a severity-ordered patient queue. The
//! [`dispatch::directory::DispatchDirectory`] routes each emergency to
//! the nearest open facility using shortest distances precomputed over
//! the road graph, and merges a closing facility's queue into its
//! nearest open neighbor in O(n).
//!
//! Command parsing and console output are left to callers; see
//! `demos/dispatch_repl.rs` for a line-command driver.

pub mod core;
pub mod dispatch;
