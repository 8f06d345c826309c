//! Random question inputs.
//!
//! Fresh values are drawn from the thread-local generator, which is seeded
//! from the OS random source.

use rand::Rng;

/// Uniform random lowercase ASCII string of `len` characters.
#[must_use]
pub fn lowercase_string(len: usize) -> String {
    lowercase_string_with(&mut rand::rng(), len)
}

/// Uniform random integer in `1..=max`.
#[must_use]
pub fn count_in_range(max: u8) -> u8 {
    count_in_range_with(&mut rand::rng(), max)
}

pub(crate) fn lowercase_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

pub(crate) fn count_in_range_with<R: Rng + ?Sized>(rng: &mut R, max: u8) -> u8 {
    rng.random_range(1..=max.max(1))
}
