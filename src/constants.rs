// havoc-mutation/src/constants.rs
//! Shared constants for the mutation engine

/// Maximum magnitude added to or subtracted from an integer by the
/// arithmetic mutations
pub const ARITHMETIC_MAX: u64 = 35;

/// Consecutive failed mutations after which a havoc call aborts
pub const MAX_FAILED_MUTATIONS: u32 = 128;

/// Exponent bound for the stacked-mutation count: a havoc call applies
/// `round(2^u)` mutations with `u` drawn uniformly from `[0, HAVOC_STACK_POWER)`
pub const HAVOC_STACK_POWER: f64 = 5.0;

/// Widest integer the word-sized mutations operate on, in bytes
pub const MAX_WORD_WIDTH: usize = 8;

/// Probability that a block fill clones existing value bytes instead of
/// repeating a single byte
pub const CLONE_PROBABILITY: f64 = 0.75;
