//! # Scenario tests that require a look inside the crate.
//!
//! Every module describes a single worked problem. Convention for function names:
//!
//! * `fn solver()`: a `Solver` with all costs set, not yet solved
//! * `fn costs()`: the cost grid
//! * `fn initial_allocation()`: allocation created by the least cost queue
//! * `fn optimal_allocation()`
pub mod problem_3;
