//! # A transportation problem solver
//!
//! Balanced transportation problems are solved with the stepping-stone method: a greedy least-cost
//! initial allocation is improved by shifting quantities around closed loops of basic cells until
//! no loop lowers the total cost anymore.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
