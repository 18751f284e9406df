// havoc-mutation/src/lib.rs
//! AFL-style havoc mutation engine
//!
//! Mutates an encoded value in place inside a caller-provided,
//! capacity-bounded byte buffer: bit flips, arithmetic nudges,
//! interesting-constant injection, and block removal/insertion/overwrite,
//! stacked in a randomized sequence per call. The engine owns no
//! allocation and no randomness — the caller supplies the buffer, the
//! current value size, and a seedable [`rand::Rng`], which makes every
//! mutation sequence reproducible.
//!
//! ```
//! use havoc_mutation::havoc;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut buffer = [0u8; 16];
//! buffer[..8].copy_from_slice(&1u64.to_ne_bytes());
//!
//! let new_size = havoc(&mut buffer, 8, &mut rng).unwrap();
//! assert!(new_size <= buffer.len());
//! ```
//!
//! The individual operators in [`mutators::ops`] are exposed for callers
//! running their own mutation schedule.

pub mod access;
pub mod constants;
pub mod error;
pub mod interesting;
pub mod mutators;

// Re-exports for convenience
pub use access::BufferWord;
pub use error::MutationError;
pub use mutators::{eligible_mutations, havoc, MutationOp, SizeClass, HAVOC_MUTATIONS};
