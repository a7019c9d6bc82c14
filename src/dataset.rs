//! The integer sequences fed to the harness.

use std::convert::TryFrom;
use std::ops::Deref;

use rand::seq::SliceRandom;
use rand::Rng;

/// An immutable sequence of keys. Derefs to a slice so the harness can index into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset(Vec<i32>);

impl Dataset {
    /// `0, 1, ..., len - 1`.
    ///
    /// # Panics
    ///
    /// When `len` doesn't fit in an `i32`.
    pub fn identity(len: usize) -> Self {
        let len = i32::try_from(len).expect("dataset size must fit in an i32");
        Self((0..len).collect())
    }

    /// The identity sequence in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut dataset = Self::identity(len);
        dataset.0.shuffle(rng);
        dataset
    }

    /// The same keys in ascending order. Feeding this to an unbalanced tree yields a list.
    pub fn sorted(mut self) -> Self {
        self.0.sort_unstable();
        self
    }
}

impl Deref for Dataset {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}
