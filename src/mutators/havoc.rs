// havoc-mutation/src/mutators/havoc.rs
//! Stacked application of randomly chosen mutation operators

use log::{debug, trace};
use rand::Rng;

use crate::constants::{HAVOC_STACK_POWER, MAX_FAILED_MUTATIONS};
use crate::error::MutationError;

use super::{MutationOp, HAVOC_MUTATIONS};

/// Applies a random stack of mutations to the first `size` bytes of
/// `buffer` and returns the new value size.
///
/// The buffer's length is the capacity ceiling: the value may grow into
/// the spare tail but never past it. Each iteration re-filters the
/// operator set against the current value size, picks one operator
/// uniformly and applies it. An operator that fails its own precondition
/// does not consume an iteration; it is retried with a fresh draw, and the
/// call aborts after [`MAX_FAILED_MUTATIONS`] consecutive failures so a
/// defective operator/filter pairing cannot hang the caller.
pub fn havoc<R: Rng>(buffer: &mut [u8], size: usize, rng: &mut R) -> Result<usize, MutationError> {
    let capacity = buffer.len();
    if size > capacity || (size == 0 && capacity == 0) {
        return Err(MutationError::InvalidBufferSize { size, capacity });
    }

    let rounds = stacked_mutation_count(rng);
    trace!(
        "havoc: {} stacked mutations over a {}-byte value ({} capacity)",
        rounds,
        size,
        capacity
    );

    let mut current = size;
    let mut completed = 0u32;
    let mut failures = 0u32;
    while completed < rounds {
        let mut eligible = [MutationOp::FlipBit; HAVOC_MUTATIONS.len()];
        let mut count = 0;
        for op in HAVOC_MUTATIONS {
            if op.is_eligible(current, capacity) {
                eligible[count] = op;
                count += 1;
            }
        }
        if count == 0 {
            // With validated sizes some class is always eligible; bail out
            // rather than burning the whole retry budget on an empty set.
            return Err(MutationError::StalledMutations { failures });
        }

        let op = eligible[rng.gen_range(0..count)];
        match op.apply(buffer, current, rng) {
            Some(new_size) => {
                trace!("havoc: {:?} resized {} -> {}", op, current, new_size);
                current = new_size;
                completed += 1;
                failures = 0;
            }
            None => {
                failures += 1;
                debug!(
                    "havoc: {:?} failed at size {} ({} consecutive failures)",
                    op, current, failures
                );
                if failures >= MAX_FAILED_MUTATIONS {
                    return Err(MutationError::StalledMutations { failures });
                }
            }
        }
    }

    Ok(current)
}

// round(2^u) with u uniform in [0, 5) lands in {1, ..., 32}, heavily
// biased toward short stacks.
fn stacked_mutation_count<R: Rng>(rng: &mut R) -> u32 {
    2f64.powf(rng.gen_range(0.0..HAVOC_STACK_POWER)).round() as u32
}
