// havoc-mutation/src/mutators/mod.rs
//! Mutation operators and their havoc orchestration
//!
//! Operators have heterogeneous shapes (size-constant, size-reducing,
//! size-increasing), so [`MutationOp`] normalizes them behind one uniform
//! `(buffer, size, rng) -> Option<new size>` dispatch and carries the
//! [`SizeClass`] tag the eligibility filter works with.

pub mod havoc;
pub mod ops;

pub use havoc::havoc;

use rand::Rng;

/// Effect of a mutation on the value size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// The value size is unchanged; only bytes within the value span change
    Constant,
    /// The value size strictly decreases; the vacated tail is zero-filled
    Reducing,
    /// The value size strictly increases; requires spare buffer capacity
    Increasing,
}

impl SizeClass {
    /// Whether a mutation of this class may run against a value of
    /// `value_size` bytes in a `capacity`-byte buffer.
    ///
    /// Recomputed every havoc iteration, since the value size changes
    /// between iterations.
    pub fn is_eligible(self, value_size: usize, capacity: usize) -> bool {
        // An empty value can only grow.
        let must_increase = value_size == 0;
        // An oversized value can only shrink. Unreachable through havoc(),
        // which rejects value_size > capacity up front.
        let must_reduce = value_size > capacity;
        let can_increase = capacity > value_size;

        if must_increase && self != SizeClass::Increasing {
            return false;
        }
        if must_reduce && self != SizeClass::Reducing {
            return false;
        }
        if !can_increase && self == SizeClass::Increasing {
            return false;
        }
        true
    }
}

/// One mutation operator, tagged by word width where it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    FlipBit,
    Interesting8,
    Interesting16,
    Interesting32,
    Interesting64,
    ArithAdd8,
    ArithAdd16,
    ArithAdd32,
    ArithAdd64,
    ArithSub8,
    ArithSub16,
    ArithSub32,
    ArithSub64,
    ByteReplace,
    RemoveBlock,
    InsertBlock,
    ChunkOverwrite,
}

/// The operator set a havoc call draws from.
///
/// `RemoveBlock` is listed twice: with deletion weighted above insertion,
/// stacked runs trend toward smaller test cases.
pub const HAVOC_MUTATIONS: [MutationOp; 18] = [
    MutationOp::FlipBit,
    MutationOp::Interesting8,
    MutationOp::Interesting16,
    MutationOp::Interesting32,
    MutationOp::Interesting64,
    MutationOp::ArithSub8,
    MutationOp::ArithSub16,
    MutationOp::ArithSub32,
    MutationOp::ArithSub64,
    MutationOp::ArithAdd8,
    MutationOp::ArithAdd16,
    MutationOp::ArithAdd32,
    MutationOp::ArithAdd64,
    MutationOp::ByteReplace,
    MutationOp::RemoveBlock,
    MutationOp::RemoveBlock,
    MutationOp::ChunkOverwrite,
    MutationOp::InsertBlock,
];

impl MutationOp {
    /// The operator's effect on value size.
    pub const fn size_class(self) -> SizeClass {
        match self {
            MutationOp::RemoveBlock => SizeClass::Reducing,
            MutationOp::InsertBlock => SizeClass::Increasing,
            _ => SizeClass::Constant,
        }
    }

    /// Whether the operator may run for the given sizes; see
    /// [`SizeClass::is_eligible`].
    pub fn is_eligible(self, value_size: usize, capacity: usize) -> bool {
        self.size_class().is_eligible(value_size, capacity)
    }

    /// Applies the operator to the first `size` bytes of `buffer`.
    ///
    /// Returns the new value size, or `None` without mutating anything if
    /// the operator's precondition does not hold. The size-class tag is a
    /// coarse approximation of the true precondition (a word-sized
    /// operator needs `size >= width`, not just `size > 0`), which is why
    /// a filtered operator can still fail here.
    pub fn apply<R: Rng>(self, buffer: &mut [u8], size: usize, rng: &mut R) -> Option<usize> {
        if size > buffer.len() {
            return None;
        }
        let value = &mut buffer[..size];
        match self {
            MutationOp::FlipBit => ops::flip_bit(value, rng),
            MutationOp::Interesting8 => ops::interesting_value::<u8, R>(value, rng),
            MutationOp::Interesting16 => ops::interesting_value::<u16, R>(value, rng),
            MutationOp::Interesting32 => ops::interesting_value::<u32, R>(value, rng),
            MutationOp::Interesting64 => ops::interesting_value::<u64, R>(value, rng),
            MutationOp::ArithAdd8 => ops::arithmetic_add::<u8, R>(value, rng),
            MutationOp::ArithAdd16 => ops::arithmetic_add::<u16, R>(value, rng),
            MutationOp::ArithAdd32 => ops::arithmetic_add::<u32, R>(value, rng),
            MutationOp::ArithAdd64 => ops::arithmetic_add::<u64, R>(value, rng),
            MutationOp::ArithSub8 => ops::arithmetic_sub::<u8, R>(value, rng),
            MutationOp::ArithSub16 => ops::arithmetic_sub::<u16, R>(value, rng),
            MutationOp::ArithSub32 => ops::arithmetic_sub::<u32, R>(value, rng),
            MutationOp::ArithSub64 => ops::arithmetic_sub::<u64, R>(value, rng),
            MutationOp::ByteReplace => ops::random_byte_replace(value, rng),
            MutationOp::RemoveBlock => ops::remove_random_block(value, rng),
            MutationOp::InsertBlock => ops::random_block_insert(buffer, size, rng),
            MutationOp::ChunkOverwrite => ops::random_chunk_overwrite(value, rng),
        }
    }
}

/// The subset of [`HAVOC_MUTATIONS`] legal for the given sizes.
pub fn eligible_mutations(
    value_size: usize,
    capacity: usize,
) -> impl Iterator<Item = MutationOp> {
    HAVOC_MUTATIONS
        .into_iter()
        .filter(move |op| op.is_eligible(value_size, capacity))
}
