// havoc-mutation/src/mutators/ops.rs
//! The individual mutation operators
//!
//! Every operator is all-or-nothing: it either mutates the buffer and
//! returns the new value size, or returns `None` without touching a byte
//! when its precondition is not met. Size-constant and size-reducing
//! operators take the value span (the first `size` bytes of the buffer);
//! the size-increasing insert additionally needs the spare capacity and so
//! takes the whole buffer plus the current size.

use rand::Rng;

use crate::access::BufferWord;
use crate::constants::{ARITHMETIC_MAX, CLONE_PROBABILITY, MAX_WORD_WIDTH};
use crate::interesting;

/// Flips one random bit of one random byte.
pub fn flip_bit<R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    if value.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..value.len());
    let bit = rng.gen_range(0..8);
    value[index] ^= 1 << bit;
    Some(value.len())
}

/// Overwrites a random word-sized span with an interesting constant.
///
/// The constant is drawn from the width's prefix of the interesting table
/// and byte-swapped with probability 0.5 for widths above one byte, so
/// both endiannesses of every constant are produced.
pub fn interesting_value<T: BufferWord, R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    if value.len() < T::WIDTH {
        return None;
    }
    let candidates = interesting::for_width(T::WIDTH);
    let mut chosen = T::from_u64(candidates[rng.gen_range(0..candidates.len())]);
    if T::WIDTH >= 2 && rng.gen_bool(0.5) {
        chosen = chosen.swap_bytes();
    }
    let offset = block_offset(value.len(), T::WIDTH, rng);
    chosen.store(value, offset);
    Some(value.len())
}

/// [`interesting_value`] with a random word width that fits the value.
///
/// Convenience for callers running their own mutation schedule; the havoc
/// set instead carries one entry per fixed width.
pub fn interesting_value_random_width<R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    if value.is_empty() {
        return None;
    }
    const WIDTHS: [usize; 4] = [1, 2, 4, 8];
    let max_width = value.len().min(MAX_WORD_WIDTH);
    let fitting = WIDTHS.iter().filter(|&&width| width <= max_width).count();
    match WIDTHS[rng.gen_range(0..fitting)] {
        1 => interesting_value::<u8, R>(value, rng),
        2 => interesting_value::<u16, R>(value, rng),
        4 => interesting_value::<u32, R>(value, rng),
        _ => interesting_value::<u64, R>(value, rng),
    }
}

/// Adds a random magnitude in `[1, ARITHMETIC_MAX]` to a random word.
pub fn arithmetic_add<T: BufferWord, R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    arithmetic::<T, R>(value, false, rng)
}

/// Subtracts a random magnitude in `[1, ARITHMETIC_MAX]` from a random word.
pub fn arithmetic_sub<T: BufferWord, R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    arithmetic::<T, R>(value, true, rng)
}

// The magnitude is byte-swapped with probability 0.5 for multi-byte widths,
// which models nudging the integer as seen from the opposite endianness.
fn arithmetic<T: BufferWord, R: Rng>(value: &mut [u8], subtract: bool, rng: &mut R) -> Option<usize> {
    if value.len() < T::WIDTH {
        return None;
    }
    let mut amount = T::from_u64(rng.gen_range(1..=ARITHMETIC_MAX));
    if T::WIDTH >= 2 && rng.gen_bool(0.5) {
        amount = amount.swap_bytes();
    }
    let offset = block_offset(value.len(), T::WIDTH, rng);
    let word = T::load(value, offset);
    let mutated = if subtract {
        word.wrapping_sub(amount)
    } else {
        word.wrapping_add(amount)
    };
    mutated.store(value, offset);
    Some(value.len())
}

/// Replaces one random byte with a uniform value in `[1, 255]`.
///
/// Zero is left out so that mutating an all-zero buffer cannot silently
/// no-op; this is a heuristic, not a guarantee that the byte changes.
pub fn random_byte_replace<R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    if value.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..value.len());
    value[index] = rng.gen_range(1..=u8::MAX);
    Some(value.len())
}

/// Removes a random block and zero-fills the vacated tail.
///
/// The block never covers the whole value: deleting the entire value is a
/// coarser, field-level operation that belongs to the embedding harness.
pub fn remove_random_block<R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    if value.len() < 2 {
        return None;
    }
    let length = rng.gen_range(1..value.len());
    let offset = block_offset(value.len(), length, rng);
    Some(remove_block(value, offset, length))
}

pub(crate) fn remove_block(value: &mut [u8], offset: usize, length: usize) -> usize {
    value.copy_within(offset + length.., offset);
    let remaining = value.len() - length;
    value[remaining..].fill(0);
    remaining
}

/// Inserts a random block, growing the value into the spare capacity.
///
/// The tail shifts right to make room; the gap is filled by cloning an
/// existing same-length block of the value (p = 0.75, when one exists) or
/// by repeating a single byte, itself sampled from the value or freshly
/// random. Clone sources and sampled bytes come from value content only,
/// never from the spare tail past the old size.
pub fn random_block_insert<R: Rng>(buffer: &mut [u8], size: usize, rng: &mut R) -> Option<usize> {
    if size >= buffer.len() {
        return None;
    }
    let length = rng.gen_range(1..=buffer.len() - size);
    let offset = rng.gen_range(0..=size);
    buffer.copy_within(offset..size, offset + length);

    if length <= size && rng.gen_bool(CLONE_PROBABILITY) {
        let source = block_offset(size, length, rng);
        clone_into_gap(buffer, source, offset, length);
    } else {
        let byte = if size > 0 && rng.gen_bool(0.5) {
            // Value bytes now live in [0, offset) and [offset + length, ..);
            // remap the sampled index around the gap.
            let index = rng.gen_range(0..size);
            buffer[if index < offset { index } else { index + length }]
        } else {
            rng.gen()
        };
        buffer[offset..offset + length].fill(byte);
    }

    Some(size + length)
}

// Copies the pre-shift value block [source, source + length) into the gap
// opened at `gap`. The tail has already moved right by `length`, so a
// source block overlapping the gap position is split in two; both pieces
// are copied from their shifted locations so every byte read is value
// content.
fn clone_into_gap(buffer: &mut [u8], source: usize, gap: usize, length: usize) {
    if source + length <= gap {
        buffer.copy_within(source..source + length, gap);
    } else if source >= gap {
        buffer.copy_within(source + length..source + 2 * length, gap);
    } else {
        let head = gap - source;
        buffer.copy_within(source..gap, gap);
        buffer.copy_within(gap + length..source + 2 * length, gap + head);
    }
}

/// Overwrites a random block in place with the insert's fill policy.
pub fn random_chunk_overwrite<R: Rng>(value: &mut [u8], rng: &mut R) -> Option<usize> {
    if value.is_empty() {
        return None;
    }
    let length = rng.gen_range(1..=value.len());
    let target = block_offset(value.len(), length, rng);

    if rng.gen_bool(CLONE_PROBABILITY) {
        let source = block_offset(value.len(), length, rng);
        value.copy_within(source..source + length, target);
    } else {
        let byte = if rng.gen_bool(0.5) {
            value[rng.gen_range(0..value.len())]
        } else {
            rng.gen()
        };
        value[target..target + length].fill(byte);
    }

    Some(value.len())
}

// Uniform offset keeping a block of `length` bytes inside `[0, size)`.
fn block_offset<R: Rng>(size: usize, length: usize, rng: &mut R) -> usize {
    debug_assert!(length <= size);
    rng.gen_range(0..=size - length)
}
