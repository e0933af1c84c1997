//! Arithmetic modulo the Mersenne prime p = 2^61 - 1, and a bit-exact codec
//! between arbitrary bytes and sequences of field elements.
//!
//! - [`field`]: lazy-reduction primitives on `u64` words, inversion, and the
//!   canonical [`field::Mersenne61Field`] wrapper.
//! - [`codec`]: `ByteReader`/`ByteWriter` for arbitrary data, and
//!   `WordReader`/`WordWriter` for values that are already field elements.
//! - [`random`]: seeded generator and index hashing for reproducible
//!   coefficients.
//!
//! Everything is synchronous. The free functions are pure; readers, writers
//! and `Random` are meant to be owned by a single caller.

// Allowed lints
// Whenever add an item here, please write a short yet meaningful comment on why so.
#![allow(
    clippy::should_implement_trait, // `Random::next` mirrors the generator's own naming.
    clippy::manual_range_contains, // Explicit bounds read closer to the field invariants.
    clippy::identity_op, // Suggested code is often less readable than original.
)]

pub mod codec;
pub mod field;
pub mod random;
pub mod utils;

pub mod log_utils;

pub use codec::{ByteReader, ByteWriter, WordReader, WordWriter};
pub use field::{
    add4, finalize, inverse, multiply, negate, partial_reduce, Mersenne61Field, AMBIGUITY,
    PRIME,
};
pub use random::{hash_to_nonzero_fp, Random};
