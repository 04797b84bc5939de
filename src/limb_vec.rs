//! Growable little-endian limb storage backing [`BigInt`](crate::BigInt).
//!
//! The least-significant limb lives at index 0. Prefix insertion and
//! erasure shift the whole tail, which keeps the container a plain
//! contiguous buffer; an offset-based scheme could avoid the shuffle
//! later without changing this interface.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LimbVec {
    limbs: Vec<u32>,
}

impl LimbVec {
    pub fn new() -> Self {
        LimbVec { limbs: Vec::new() }
    }

    /// `n` copies of `fill`.
    pub fn filled(n: usize, fill: u32) -> Self {
        LimbVec { limbs: vec![fill; n] }
    }

    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Appends one limb at the most-significant end.
    pub fn push(&mut self, limb: u32) {
        self.limbs.push(limb);
    }

    /// Removes the most-significant limb.
    pub fn pop(&mut self) -> Option<u32> {
        self.limbs.pop()
    }

    /// Replaces the contents with `n` copies of `fill`.
    pub fn assign(&mut self, n: usize, fill: u32) {
        self.limbs.clear();
        self.limbs.resize(n, fill);
    }

    /// Drops the `n` least-significant limbs.
    pub fn drop_front(&mut self, n: usize) {
        self.limbs.drain(..n);
    }

    /// Inserts `n` copies of `fill` at the least-significant end.
    pub fn insert_front(&mut self, n: usize, fill: u32) {
        self.limbs.splice(0..0, std::iter::repeat(fill).take(n));
    }
}

impl Index<usize> for LimbVec {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.limbs[index]
    }
}

impl IndexMut<usize> for LimbVec {
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.limbs[index]
    }
}

#[test]
fn test_push_pop() {
    let mut v = LimbVec::new();
    v.push(1);
    v.push(2);
    assert_eq!(v.len(), 2);
    assert_eq!(v[0], 1);
    assert_eq!(v[1], 2);
    assert_eq!(v.pop(), Some(2));
    assert_eq!(v.pop(), Some(1));
    assert_eq!(v.pop(), None);
}

#[test]
fn test_prefix_ops() {
    let mut v = LimbVec::filled(2, 7);
    v.insert_front(3, 0);
    assert_eq!(v.len(), 5);
    assert_eq!(v[0], 0);
    assert_eq!(v[3], 7);
    v.drop_front(4);
    assert_eq!(v.len(), 1);
    assert_eq!(v[0], 7);
}

#[test]
fn test_assign_and_eq() {
    let mut v = LimbVec::filled(3, 1);
    v.assign(2, u32::MAX);
    assert_eq!(v, LimbVec::filled(2, u32::MAX));
    let w = v.clone();
    v[0] = 0;
    assert_ne!(v, w);
}
