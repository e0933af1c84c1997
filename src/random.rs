//! Reproducible field coefficients.
//!
//! `Random` is xoshiro256+ seeded through the splitmix64 finalizer. Its low 3
//! bits are weak, which is fine here: field elements are taken from the top
//! 61 bits of each word.

use derivative::Derivative;

use crate::field::PRIME;

/// splitmix64 step: add the golden gamma, then avalanche.
#[inline(always)]
pub const fn hash_u64(x: u64) -> u64 {
    let mut x = x.wrapping_add(0x9e3779b97f4a7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Map a random word to a field element in [0, p).
///
/// Takes the top 61 bits; the one pattern that equals p is folded onto p - 1,
/// a 1 in 2^61 bias.
#[inline(always)]
pub const fn convert_rand_to_fp(word: u64) -> u64 {
    let word = word >> 3;
    word - ((word + 1) >> 61)
}

/// Map a random word to a field element in [1, p). Zero becomes one.
#[inline(always)]
pub const fn convert_rand_to_nonzero_fp(word: u64) -> u64 {
    let word = convert_rand_to_fp(word);
    word + (word.wrapping_sub(1) >> 63)
}

/// Deterministically derive a nonzero field element from a key, e.g. the
/// index of a matrix coefficient, without keeping a generator around.
#[inline(always)]
pub const fn hash_to_nonzero_fp(key: u64) -> u64 {
    convert_rand_to_nonzero_fp(hash_u64(key))
}

#[derive(Derivative)]
#[derivative(Clone, Debug, PartialEq, Eq)]
pub struct Random {
    state: [u64; 4],
}

impl Random {
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: [0u64; 4] };
        rng.seed(seed);

        rng
    }

    pub fn seed(&mut self, seed: u64) {
        let mut h = seed;
        for word in self.state.iter_mut() {
            h = hash_u64(h);
            *word = h;
        }
    }

    /// Next raw 64-bit word. The low 3 bits are of lower quality.
    #[inline(always)]
    pub fn next(&mut self) -> u64 {
        let [mut s0, mut s1, mut s2, mut s3] = self.state;
        let result = s0.wrapping_add(s3);
        let t = s1 << 17;

        s2 ^= s0;
        s3 ^= s1;
        s1 ^= s2;
        s0 ^= s3;
        s2 ^= t;
        s3 = s3.rotate_left(45);

        self.state = [s0, s1, s2, s3];

        result
    }

    /// Uniform field element in [0, p).
    #[inline(always)]
    pub fn next_fp(&mut self) -> u64 {
        convert_rand_to_fp(self.next())
    }

    /// Uniform field element in [1, p).
    #[inline(always)]
    pub fn next_nonzero_fp(&mut self) -> u64 {
        convert_rand_to_nonzero_fp(self.next())
    }
}

impl rand::RngCore for Random {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // high half, away from the weak low bits
        (self.next() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let word = self.next().to_le_bytes();
            tail.copy_from_slice(&word[..tail.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// the largest raw word lands on the top residue, never on p itself
const _: () = assert!(convert_rand_to_fp(u64::MAX) == PRIME - 1);
