//!
//! Processing of many independent commits at once.
//!
use crate::api::DataProcessor;
use crate::ledger::ArgsSaveBlockData;
use crate::process::errors::ProcessResult;
use crate::schema::BlockResult;
use rayon::prelude::*;

impl DataProcessor {
    ///
    /// Process a batch of commits on the rayon thread pool.
    ///
    /// Every commit is still processed by a single synchronous call,
    /// results come back in the order of `batch`. A failed commit does
    /// not affect the others.
    ///
    /// The caller remains responsible for ordering these results against
    /// any later revert or finalization of the same chain history.
    ///
    pub fn process_batch(&self, batch: &[ArgsSaveBlockData]) -> Vec<ProcessResult<BlockResult>> {
        batch.par_iter().map(|args| self.process_data(args)).collect()
    }
}
