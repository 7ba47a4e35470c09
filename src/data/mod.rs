//! # Storing of transportation problems in memory
//!
//! This module provides the data structures used to represent transportation problems and their
//! allocations in memory. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.

pub mod allocation;
pub mod grid;
pub mod number_types;
pub mod transportation;
