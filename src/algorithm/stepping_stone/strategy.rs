//! # Loop selection rules
//!
//! Strategies for deciding which loop to shift quantity along, once all loops of a round are
//! known. Only loops that lower the total cost are ever selected, so every rule terminates.
use crate::algorithm::stepping_stone::cycle::LoopRecord;
use crate::data::number_types::OrderedRing;

/// Deciding which loop to improve along.
///
/// The rule is consulted once per round. Returning `None` means that no loop lowers the total cost
/// and the current allocation is optimal.
pub trait LoopSelection {
    /// Index of the loop to shift quantity along.
    ///
    /// # Arguments
    ///
    /// * `loops`: All loops of the round, ordered by their base cell, row by row.
    fn select<F: OrderedRing>(&mut self, loops: &[LoopRecord<F>]) -> Option<usize>;
}

/// Select the loop with the largest cost reduction per unit.
///
/// Among equally good loops, the one found first wins.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SteepestDescent;
impl LoopSelection for SteepestDescent {
    fn select<F: OrderedRing>(&mut self, loops: &[LoopRecord<F>]) -> Option<usize> {
        let mut best: Option<(usize, &F)> = None;
        for (index, record) in loops.iter().enumerate() {
            let threshold = best.map_or_else(F::zero, |(_, value)| value.clone());
            if record.value < threshold {
                best = Some((index, &record.value));
            }
        }

        best.map(|(index, _)| index)
    }
}

/// Simply select the first loop which lowers the total cost.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct FirstImproving;
impl LoopSelection for FirstImproving {
    fn select<F: OrderedRing>(&mut self, loops: &[LoopRecord<F>]) -> Option<usize> {
        loops.iter().position(LoopRecord::is_improving)
    }
}
