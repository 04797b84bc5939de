//! # BigInt
//! Arbitrary-precision signed integers stored in two's-complement notation
//! over a little-endian sequence of 32-bit limbs. Every compound-assignment
//! operator mutates in place; the plain binary operators work on a copy.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```
//!

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::Display;
use std::io::BufRead;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Neg, Not,
};
use std::str::FromStr;

use crate::big_int_cache::*;
use crate::big_int_constants::*;
use crate::error::{ParseBigIntError, ReadTokenError};
use crate::limb_vec::LimbVec;

/// A signed integer of unbounded width.
///
/// The stored limb sequence is kept in canonical minimal form: the
/// most-significant limb is never pure sign filler, so every value has
/// exactly one representation and the derived `PartialEq` is value
/// equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    data: LimbVec,
}

// 实现规范化与符号
impl BigInt {
    /// Drops most-significant limbs that only repeat the sign,
    /// stopping at one limb. Idempotent.
    fn normalize(&mut self) -> &mut Self {
        while self.data.len() > 1 {
            let last = self.data[self.data.len() - 1];
            let prev = self.data[self.data.len() - 2];
            let filler = (last == 0 && prev & SIGN_BIT == 0)
                || (last == u32::MAX && prev & SIGN_BIT != 0);
            if !filler {
                break;
            }
            self.data.pop();
        }
        self
    }

    /// `true` for zero and all positive values.
    pub fn is_positive(&self) -> bool {
        self.data[self.data.len() - 1] & SIGN_BIT == 0
    }

    pub fn is_zero(&self) -> bool {
        self.data.len() == 1 && self.data[0] == 0
    }

    /// The limb value that extends this number beyond its stored limbs.
    fn sign_fill(&self) -> u32 {
        if self.is_positive() {
            0
        } else {
            u32::MAX
        }
    }

    /// Two's-complement negation in place: one guard limb to absorb the
    /// sign flip, complement every limb, add one. Subtraction and the
    /// signed multiply/divide reductions are all built on this.
    fn invert(&mut self) -> &mut Self {
        self.data.push(self.sign_fill());
        for i in 0..self.data.len() {
            self.data[i] = !self.data[i];
        }
        for i in 0..self.data.len() {
            if self.data[i] != u32::MAX {
                self.data[i] += 1;
                break;
            }
            self.data[i] = 0;
        }
        self.normalize()
    }
}

// 实现构造
impl BigInt {
    /// A single raw limb, interpreted in two's complement.
    pub(crate) fn from_raw_limb(limb: u32) -> Self {
        BigInt { data: LimbVec::filled(1, limb) }
    }

    fn value_of(val: i64) -> BigInt {
        if 0 <= val && val <= MAX_CONSTANT as i64 {
            return POS_CACHE[val as usize].clone();
        }
        if -(MAX_CONSTANT as i64) <= val && val < 0 {
            return NEG_CACHE[(-val) as usize].clone();
        }
        let mut data = LimbVec::new();
        data.push(val as u32);
        data.push((val >> 32) as u32);
        let mut num = BigInt { data };
        num.normalize();
        num
    }

    fn value_of_unsigned(val: u64) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            return POS_CACHE[val as usize].clone();
        }
        let mut data = LimbVec::new();
        data.push(val as u32);
        data.push((val >> 32) as u32);
        data.push(0);
        let mut num = BigInt { data };
        num.normalize();
        num
    }
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val as i64)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of_unsigned(val as u64)
        }
    }
    )*
    };
}
impl_signed_to_big_int!(i8, i16, i32, isize, i64);
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);

impl Default for BigInt {
    fn default() -> Self {
        BigInt::from(0)
    }
}

// 实现加法
impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        let lhs_fill = self.sign_fill();
        let rhs_fill = rhs.sign_fill();
        // One limb past the longer operand absorbs the final carry and
        // any sign flip.
        let length = 1 + self.data.len().max(rhs.data.len());
        while self.data.len() < length {
            self.data.push(lhs_fill);
        }
        let mut carry: u64 = 0;
        for i in 0..length {
            let rhs_limb = if i < rhs.data.len() { rhs.data[i] } else { rhs_fill };
            carry += self.data[i] as u64 + rhs_limb as u64;
            self.data[i] = carry as u32;
            carry >>= 32;
        }
        self.normalize();
    }
}

// 实现减法
impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        // -(-a + b) == a - b; the call order is load-bearing.
        self.invert();
        *self += rhs;
        self.invert();
    }
}

// 实现乘法
impl BigInt {
    /// Product of a non-negative value and a one-limb scalar.
    fn mul_limb(&self, rhs: u64) -> BigInt {
        if rhs == 0 {
            return BigInt::from(0);
        }
        let mut out = self.clone();
        out.data.push(0);
        let mut carry: u64 = 0;
        for i in 0..out.data.len() {
            carry += rhs * out.data[i] as u64;
            out.data[i] = carry as u32;
            carry >>= 32;
        }
        out.normalize();
        out
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            *self = BigInt::from(0);
            return;
        }
        // (-a)(-b) == ab, (-a)b == a(-b) == -(ab): funnel every sign
        // combination through the positive path.
        let lhs_positive = self.is_positive();
        let rhs_positive = rhs.is_positive();
        if !lhs_positive && !rhs_positive {
            self.invert();
            let mut rhs_abs = rhs.clone();
            rhs_abs.invert();
            *self *= &rhs_abs;
            return;
        }
        if !lhs_positive && rhs_positive {
            self.invert();
            *self *= rhs;
            self.invert();
            return;
        }
        if lhs_positive && !rhs_positive {
            let mut rhs_abs = rhs.clone();
            rhs_abs.invert();
            *self *= &rhs_abs;
            self.invert();
            return;
        }

        let rhs_len = rhs.data.len();
        if rhs_len == 1 || (rhs_len == 2 && rhs.data[1] == 0) {
            // scalar fast path
            self.data.push(0);
            let scalar = rhs.data[0] as u64;
            let mut carry: u64 = 0;
            for i in 0..self.data.len() {
                carry += scalar * self.data[i] as u64;
                self.data[i] = carry as u32;
                carry >>= 32;
            }
            self.normalize();
            return;
        }

        // schoolbook long multiplication
        let mut accumulate = BigInt::from(0);
        let mut shifted = self.clone();
        for i in 0..rhs_len {
            if rhs.data[i] != 0 {
                accumulate += shifted.mul_limb(rhs.data[i] as u64);
            }
            shifted.shl_limbs(1);
        }
        accumulate.normalize();
        *self = accumulate;
    }
}

// 实现除法
impl BigInt {
    /// Long division over non-negative operands; the quotient replaces
    /// `self`. A zero divisor, like any divisor larger than `self`,
    /// yields zero.
    fn division(&mut self, rhs: &BigInt) -> &mut Self {
        if rhs.is_zero() || *rhs > *self {
            *self = BigInt::from(0);
            return self;
        }
        if rhs.data.len() == 1 && rhs.data[0] == 1 {
            return self;
        }

        let rhs_len = rhs.data.len();
        if rhs_len == 1 || (rhs_len == 2 && rhs.data[1] == 0) {
            // scalar fast path: one pass with a 64-bit running remainder
            let divisor = rhs.data[0] as u64;
            let mut rem: u64 = 0;
            for i in (0..self.data.len()).rev() {
                rem += self.data[i] as u64;
                self.data[i] = (rem / divisor) as u32;
                rem = (rem % divisor) << 32;
            }
            return self.normalize();
        }

        // Binary-search each quotient limb from the most-significant
        // position down, reducing `self` to the running remainder.
        let top = self.data.len() - rhs_len;
        let mut quotient = BigInt::from(0);
        quotient.data.assign(top + 2, 0);
        for pos in (0..=top).rev() {
            let mut low: u32 = 0;
            let mut high: u32 = u32::MAX;
            while low + 1 < high {
                let mid = low + (high - low) / 2;
                let mut probe = rhs.mul_limb(mid as u64);
                probe.shl_limbs(pos);
                match (*self).cmp(&probe) {
                    Ordering::Less => high = mid - 1,
                    Ordering::Greater => low = mid,
                    Ordering::Equal => {
                        // exact division, lower quotient limbs stay zero
                        quotient.data[pos] = mid;
                        *self = quotient;
                        return self.normalize();
                    }
                }
            }
            let mut digit = high;
            if low + 1 == high {
                // Adjacent candidates survive the search; take the
                // larger one only if its product does not overshoot.
                let mut probe = rhs.mul_limb(high as u64);
                probe.shl_limbs(pos);
                if *self < probe {
                    digit = low;
                }
            }
            quotient.data[pos] = digit;
            let mut product = rhs.mul_limb(digit as u64);
            product.shl_limbs(pos);
            *self -= &product;
        }
        *self = quotient;
        self.normalize()
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        let lhs_positive = self.is_positive();
        let rhs_positive = rhs.is_positive();
        if !lhs_positive && !rhs_positive {
            self.invert();
            let mut rhs_abs = rhs.clone();
            rhs_abs.invert();
            self.division(&rhs_abs);
        } else if !lhs_positive && rhs_positive {
            self.invert();
            self.division(rhs);
            self.invert();
        } else if lhs_positive && !rhs_positive {
            let mut rhs_abs = rhs.clone();
            rhs_abs.invert();
            self.division(&rhs_abs);
            self.invert();
        } else {
            self.division(rhs);
        }
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        // Derived, never computed independently: a % b == a - (a/b)*b.
        // With a zero divisor the quotient is zero, so a % 0 == a.
        let mut multiple = self.clone();
        multiple /= rhs;
        multiple *= rhs;
        *self -= &multiple;
    }
}

// 实现移位
impl BigInt {
    /// Left shift by whole limbs.
    fn shl_limbs(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        self.data.insert_front(n, 0);
        self
    }

    /// Right shift by whole limbs; shifting everything out leaves the
    /// sign fill.
    fn shr_limbs(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        if n >= self.data.len() {
            let fill = self.sign_fill();
            self.data.assign(1, fill);
        } else {
            self.data.drop_front(n);
        }
        self
    }

    fn to_left(&mut self, rhs: u32) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        self.shl_limbs((rhs >> 5) as usize);
        let shift = rhs & 0x1f; // rhs % 32
        if shift == 0 {
            return self;
        }
        self.data.push(self.sign_fill());
        let mut carry: u64 = 0;
        for i in 0..self.data.len() {
            carry += (self.data[i] as u64) << shift;
            self.data[i] = carry as u32;
            carry >>= 32;
        }
        self.normalize()
    }

    fn to_right(&mut self, rhs: u32) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        self.shr_limbs((rhs >> 5) as usize);
        let shift = rhs & 0x1f; // rhs % 32
        if shift == 0 {
            return self;
        }
        let length = self.data.len();
        for i in 0..length - 1 {
            self.data[i] = (self.data[i] >> shift) | (self.data[i + 1] << (32 - shift));
        }
        // vacated high bits take the sign fill (arithmetic shift)
        let fill_high = if self.is_positive() {
            0
        } else {
            u32::MAX << (32 - shift)
        };
        self.data[length - 1] = (self.data[length - 1] >> shift) | fill_high;
        self.normalize()
    }
}

impl ShlAssign<i32> for BigInt {
    fn shl_assign(&mut self, rhs: i32) {
        if rhs == 0 {
            return;
        }
        if rhs > 0 {
            self.to_left(rhs as u32);
        } else {
            self.to_right(rhs.unsigned_abs());
        }
    }
}

impl ShrAssign<i32> for BigInt {
    fn shr_assign(&mut self, rhs: i32) {
        if rhs == 0 {
            return;
        }
        if rhs > 0 {
            self.to_right(rhs as u32);
        } else {
            self.to_left(rhs.unsigned_abs());
        }
    }
}

macro_rules! impl_big_int_shift {
    ($(($op: ident, $method: ident, $op_assign: ident, $method_assign: ident)),* $(,)?) => {
    $(
    impl $op<i32> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: i32) -> BigInt {
            <BigInt as $op_assign<i32>>::$method_assign(&mut self, rhs);
            self
        }
    }
    impl $op<i32> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: i32) -> BigInt {
            let mut lhs = self.clone();
            <BigInt as $op_assign<i32>>::$method_assign(&mut lhs, rhs);
            lhs
        }
    }
    )*
    };
}
impl_big_int_shift!(
    (Shl, shl, ShlAssign, shl_assign),
    (Shr, shr, ShrAssign, shr_assign),
);

// 实现位运算
macro_rules! impl_big_int_bitwise_assign {
    ($(($op_assign: ident, $method_assign: ident, $sym: tt)),* $(,)?) => {
    $(
    impl $op_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            // Both sides sign-extend with their own fill, so negative
            // operands behave like infinite two's-complement words.
            let lhs_fill = self.sign_fill();
            let rhs_fill = rhs.sign_fill();
            let length = self.data.len().max(rhs.data.len());
            while self.data.len() < length {
                self.data.push(lhs_fill);
            }
            for i in 0..length {
                let rhs_limb = if i < rhs.data.len() { rhs.data[i] } else { rhs_fill };
                self.data[i] = self.data[i] $sym rhs_limb;
            }
            self.normalize();
        }
    }
    )*
    };
}
impl_big_int_bitwise_assign!(
    (BitAndAssign, bitand_assign, &),
    (BitOrAssign, bitor_assign, |),
    (BitXorAssign, bitxor_assign, ^),
);

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.invert();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> BigInt {
        // Complement flips the filler role of every limb along with the
        // sign, so a canonical sequence stays canonical.
        for i in 0..self.data.len() {
            self.data[i] = !self.data[i];
        }
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !self.clone()
    }
}

macro_rules! impl_big_int_binop {
    ($(($op: ident, $method: ident, $op_assign: ident, $method_assign: ident)),* $(,)?) => {
    $(
    impl $op_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            <BigInt as $op_assign<&BigInt>>::$method_assign(self, &rhs);
        }
    }
    impl $op for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: BigInt) -> BigInt {
            <BigInt as $op_assign<&BigInt>>::$method_assign(&mut self, &rhs);
            self
        }
    }
    impl $op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> BigInt {
            <BigInt as $op_assign<&BigInt>>::$method_assign(&mut self, rhs);
            self
        }
    }
    impl $op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> BigInt {
            let mut lhs = self.clone();
            <BigInt as $op_assign<&BigInt>>::$method_assign(&mut lhs, rhs);
            lhs
        }
    }
    impl $op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> BigInt {
            let mut lhs = self.clone();
            <BigInt as $op_assign<&BigInt>>::$method_assign(&mut lhs, &rhs);
            lhs
        }
    }
    )*
    };
}
impl_big_int_binop!(
    (Add, add, AddAssign, add_assign),
    (Sub, sub, SubAssign, sub_assign),
    (Mul, mul, MulAssign, mul_assign),
    (Div, div, DivAssign, div_assign),
    (Rem, rem, RemAssign, rem_assign),
    (BitAnd, bitand, BitAndAssign, bitand_assign),
    (BitOr, bitor, BitOrAssign, bitor_assign),
    (BitXor, bitxor, BitXorAssign, bitxor_assign),
);

// 实现自增自减与逻辑运算
impl BigInt {
    /// Adds one in place, the `++` of the reference design.
    pub fn inc(&mut self) -> &mut Self {
        *self += BigInt::from(1);
        self
    }

    /// Subtracts one in place, the `--` of the reference design.
    pub fn dec(&mut self) -> &mut Self {
        *self += BigInt::from(-1);
        self
    }

    /// Non-short-circuit logical AND: both operands are evaluated.
    pub fn logical_and(&self, rhs: &BigInt) -> bool {
        let lhs_nonzero = !self.is_zero();
        let rhs_nonzero = !rhs.is_zero();
        lhs_nonzero && rhs_nonzero
    }

    /// Non-short-circuit logical OR: both operands are evaluated.
    pub fn logical_or(&self, rhs: &BigInt) -> bool {
        let lhs_nonzero = !self.is_zero();
        let rhs_nonzero = !rhs.is_zero();
        lhs_nonzero || rhs_nonzero
    }
}

// 实现大小比较
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs_positive = self.is_positive();
        let rhs_positive = other.is_positive();
        match (lhs_positive, rhs_positive) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {
                // canonical form is unique, so equality is structural
                if self == other {
                    return Ordering::Equal;
                }
                return if (self - other).is_positive() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (true, true) => {}
        }
        // No redundant limbs in canonical form: longer means larger.
        match self.data.len().cmp(&other.data.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for i in (0..self.data.len()).rev() {
            match self.data[i].cmp(&other.data[i]) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses an optionally `-`-prefixed decimal literal. Empty input
    /// and a bare `-` parse to zero; any other non-decimal character is
    /// an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Ok(BigInt::from(0));
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit(c));
        }

        // Consume base-10^9 blocks from the least-significant end,
        // advancing a running power of ten per block.
        let bytes = digits.as_bytes();
        let mut result = BigInt::from(0);
        let mut pow = BigInt::from(1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end - end.min(DIGITS_PER_BLOCK);
            let mut block: u32 = 0;
            for &b in &bytes[start..end] {
                block = block * 10 + (b - b'0') as u32;
            }
            result += pow.mul_limb(block as u64);
            pow = pow.mul_limb(BLOCK_RADIX as u64);
            end = start;
        }

        if negative {
            result.invert();
        }
        Ok(result)
    }
}

impl BigInt {
    /// Reads one whitespace-delimited token from `reader` and parses
    /// it, the stream-input counterpart of [`FromStr`].
    pub fn read_token<R: BufRead>(reader: &mut R) -> Result<BigInt, ReadTokenError> {
        let mut token = String::new();
        loop {
            let (used, done) = {
                let buf = reader.fill_buf()?;
                if buf.is_empty() {
                    break;
                }
                let mut used = 0;
                let mut done = false;
                for &b in buf {
                    if b.is_ascii_whitespace() {
                        used += 1;
                        if token.is_empty() {
                            // still skipping leading whitespace
                            continue;
                        }
                        done = true;
                        break;
                    }
                    token.push(b as char);
                    used += 1;
                }
                (used, done)
            };
            reader.consume(used);
            if done {
                break;
            }
        }
        Ok(token.parse()?)
    }
}

// 实现打印
impl BigInt {
    /// Divides by ten in place and returns the remainder as an ASCII
    /// digit. Only meaningful for non-negative values.
    fn div10(&mut self) -> char {
        let mut rem: u64 = 0;
        for i in (0..self.data.len()).rev() {
            rem = (rem << 32) + self.data[i] as u64;
            self.data[i] = (rem / 10) as u32;
            rem %= 10;
        }
        self.normalize();
        (b'0' + rem as u8) as char
    }

    /// The canonical decimal string of this value.
    pub fn to_decimal(&self) -> String {
        let mut work = self.clone();
        let negative = !work.is_positive();
        if negative {
            work.invert();
        }
        if work.is_zero() {
            return String::from("0");
        }
        let mut digits = String::new();
        while !work.is_zero() {
            digits.push(work.div10());
        }
        if negative {
            digits.push('-');
        }
        digits.chars().rev().collect()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big: BigInt = num.into();
    assert_eq!(big.to_decimal(), num.to_string());

    let num: i16 = -100;
    let big: BigInt = num.into();
    assert_eq!(big.to_decimal(), num.to_string());

    let num: i32 = i32::MIN;
    let big: BigInt = num.into();
    assert_eq!(big.to_decimal(), num.to_string());
    assert_eq!(big.data.len(), 1);

    let num: isize = -10000;
    let big: BigInt = num.into();
    assert_eq!(big.to_decimal(), num.to_string());

    let num: i64 = i64::MIN;
    let big: BigInt = num.into();
    assert_eq!(big.to_decimal(), num.to_string());

    let num: u32 = u32::MAX;
    let big: BigInt = num.into();
    assert_eq!(big.to_decimal(), num.to_string());
    assert!(big.is_positive());

    let num: u64 = u64::MAX;
    let big: BigInt = num.into();
    assert_eq!(big.to_decimal(), num.to_string());
    assert!(big.is_positive());
}

#[test]
fn test_small_value_cache() {
    for n in -16_i32..=16 {
        let big: BigInt = n.into();
        assert_eq!(big.data.len(), 1);
        assert_eq!(big.to_decimal(), n.to_string());
    }
}

#[test]
fn test_canonical_form() {
    let mut a = big("1");
    a.data.push(0);
    a.data.push(0);
    a.normalize();
    assert_eq!(a.data.len(), 1);

    let mut b = big("-1");
    b.data.push(u32::MAX);
    b.normalize();
    assert_eq!(b.data.len(), 1);

    // removal stops where it would change the sign
    let mut c = BigInt::from(u32::MAX);
    assert_eq!(c.data.len(), 2);
    c.normalize();
    assert_eq!(c.data.len(), 2);
}

#[test]
fn test_parse_and_format() {
    assert_eq!(big("0").to_decimal(), "0");
    assert_eq!(big("-1").to_decimal(), "-1");
    assert_eq!(big("").to_decimal(), "0");
    assert_eq!(big("-").to_decimal(), "0");
    assert_eq!(big("-0").to_decimal(), "0");
    assert_eq!(big("007").to_decimal(), "7");
    assert_eq!(
        big("123456789012345678901234567890").to_decimal(),
        "123456789012345678901234567890"
    );

    assert_eq!(
        "12a4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit('a'))
    );
    assert_eq!(
        "--4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit('-'))
    );
    assert_eq!(
        "+4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit('+'))
    );
}

#[test]
fn test_add_sub() {
    assert_eq!(
        (big("123456789012345678901234567890") + big("1")).to_decimal(),
        "123456789012345678901234567891"
    );
    assert_eq!((big("1") + big("-1")).to_decimal(), "0");
    assert_eq!(
        (big("100000000000000000000") - big("1")).to_decimal(),
        "99999999999999999999"
    );
    assert_eq!(
        (big("-100000000000000000000") - big("-100000000000000000001")).to_decimal(),
        "1"
    );

    let mut a = big("4294967295");
    a += &big("1");
    assert_eq!(a.to_decimal(), "4294967296");
    a -= &big("4294967297");
    assert_eq!(a.to_decimal(), "-1");
}

#[test]
fn test_mul() {
    // scalar fast path
    assert_eq!(
        (big("10000000000000000") * big("3001")).to_decimal(),
        "30010000000000000000"
    );
    // schoolbook path, multi-limb on both sides
    assert_eq!(
        (big("123456789123456789123456789") * big("987654321987654321987654321")).to_decimal(),
        "121932631356500531591068431581771069347203169112635269"
    );
    assert_eq!((big("73786976294838206464") * big("0")).to_decimal(), "0");
    assert_eq!(
        (big("-73786976294838206464") * big("73786976294838206464")).to_decimal(),
        "-5444517870735015415413993718908291383296"
    );
    assert_eq!(
        (big("-73786976294838206464") * big("-2")).to_decimal(),
        "147573952589676412928"
    );
}

#[test]
fn test_division_scalar() {
    assert_eq!(
        (big("1000000000000000000000000000") / big("1000000000")).to_decimal(),
        "1000000000000000000"
    );
    assert_eq!(
        (big("1000000000000000000000000000000") / big("1000000000")).to_decimal(),
        "1000000000000000000000"
    );
    assert_eq!((big("100") / big("7")).to_decimal(), "14");
    assert_eq!((big("100") % big("7")).to_decimal(), "2");
    assert_eq!((big("100") / big("1")).to_decimal(), "100");
}

#[test]
fn test_division_long() {
    // multi-limb divisor exercises the quotient-limb binary search
    let q = big("37129740480293847298347293874");
    let b = big("82938492837492837498273948982345");
    let r = big("12345678901234567890");
    let n = &q * &b + &r;
    assert_eq!(&n / &b, q);
    assert_eq!(&n % &b, r);

    // exact multiple takes the early-return path
    let exact = &q * &b;
    assert_eq!(&exact / &b, q);
    assert_eq!((&exact % &b).to_decimal(), "0");

    // divisor larger than dividend
    assert_eq!((&b / &exact).to_decimal(), "0");
    assert_eq!(&b % &exact, b);
}

#[test]
fn test_division_boundary_digits() {
    // quotient limbs at both ends of the binary-search range
    let b = big("18446744073709551616"); // 2^64
    let max_limb = big("4294967295"); // 2^32 - 1
    let n = &b * &max_limb;
    assert_eq!(&n / &b, max_limb);

    let one_more = &n + &big("1");
    assert_eq!(&one_more / &b, max_limb);
    assert_eq!(&one_more % &b, big("1"));
}

#[test]
fn test_division_by_zero() {
    let zero = big("0");
    assert_eq!((big("42") / &zero).to_decimal(), "0");
    assert_eq!((big("42") % &zero).to_decimal(), "42");
    assert_eq!((big("-42") / &zero).to_decimal(), "0");
    assert_eq!((big("-42") % &zero).to_decimal(), "-42");
    assert_eq!((&zero / &zero).to_decimal(), "0");
}

#[test]
fn test_division_signs() {
    // truncation toward zero, remainder takes the dividend's sign
    assert_eq!((big("-7") / big("3")).to_decimal(), "-2");
    assert_eq!((big("-7") % big("3")).to_decimal(), "-1");
    assert_eq!((big("7") / big("-3")).to_decimal(), "-2");
    assert_eq!((big("7") % big("-3")).to_decimal(), "1");
    assert_eq!((big("-7") / big("-3")).to_decimal(), "2");
    assert_eq!((big("-7") % big("-3")).to_decimal(), "-1");
}

#[test]
fn test_shift() {
    assert_eq!((big("5") << 2).to_decimal(), "20");
    assert_eq!((big("-5") >> 1).to_decimal(), "-3");
    assert_eq!((big("-1") >> 100).to_decimal(), "-1");
    assert_eq!((big("1") >> 1).to_decimal(), "0");

    // limb-crossing shifts
    assert_eq!((big("1") << 64).to_decimal(), "18446744073709551616");
    assert_eq!((big("1") << 65).to_decimal(), "36893488147419103232");
    assert_eq!((big("18446744073709551616") >> 64).to_decimal(), "1");
    assert_eq!((big("-18446744073709551616") >> 65).to_decimal(), "-1");

    // negative amounts reverse direction
    assert_eq!((big("5") << -1).to_decimal(), "2");
    assert_eq!((big("5") >> -2).to_decimal(), "20");

    let mut a = big("12345678901234567890");
    a <<= 37;
    a >>= 37;
    assert_eq!(a.to_decimal(), "12345678901234567890");

    let mut zero = big("0");
    zero <<= 100;
    assert_eq!(zero.to_decimal(), "0");
}

#[test]
fn test_bitwise() {
    let x = big("123456789012345678901234567890");
    assert_eq!(&big("-1") & &x, x.clone());
    assert_eq!((&big("-1") | &x).to_decimal(), "-1");
    assert_eq!(&big("0") | &x, x.clone());
    assert_eq!((&x ^ &x).to_decimal(), "0");

    assert_eq!((big("12") & big("10")).to_decimal(), "8");
    assert_eq!((big("12") | big("10")).to_decimal(), "14");
    assert_eq!((big("12") ^ big("10")).to_decimal(), "6");
    assert_eq!((big("-6") & big("13")).to_decimal(), "8");
    assert_eq!((big("-6") | big("-13")).to_decimal(), "-5");

    let mut a = big("-2");
    a &= &big("7");
    assert_eq!(a.to_decimal(), "6");
}

#[test]
fn test_not_and_neg() {
    assert_eq!((!big("0")).to_decimal(), "-1");
    assert_eq!((!big("-1")).to_decimal(), "0");
    assert_eq!(
        (!big("12345678901234567890")).to_decimal(),
        "-12345678901234567891"
    );
    assert_eq!(
        (-big("12345678901234567890")).to_decimal(),
        "-12345678901234567890"
    );
    assert_eq!((-big("0")).to_decimal(), "0");
    assert_eq!(-(-big("987654321987654321")), big("987654321987654321"));
}

#[test]
fn test_compare() {
    assert!(big("2") > big("1"));
    assert!(big("-2") < big("1"));
    assert!(big("-2") < big("-1"));
    assert!(big("-100000000000000000000") < big("-99999999999999999999"));
    assert!(big("100000000000000000000") > big("99999999999999999999"));
    assert_eq!(big("-3").cmp(&big("-3")), Ordering::Equal);
    assert!(big("-3") >= big("-3"));
    assert!(big("0") > big("-1"));
    assert_eq!(big("0"), big("-0"));
}

#[test]
fn test_inc_dec() {
    let mut a = big("-1");
    a.inc();
    assert_eq!(a.to_decimal(), "0");
    a.inc().inc();
    assert_eq!(a.to_decimal(), "2");
    a.dec().dec().dec();
    assert_eq!(a.to_decimal(), "-1");

    let mut b = big("4294967295");
    b.inc();
    assert_eq!(b.to_decimal(), "4294967296");
}

#[test]
fn test_logical() {
    let zero = big("0");
    let neg = big("-5");
    let pos = big("5");
    assert!(neg.logical_and(&pos));
    assert!(!neg.logical_and(&zero));
    assert!(neg.logical_or(&zero));
    assert!(!zero.logical_or(&zero));
    assert!(zero.is_zero());
    assert!(!neg.is_zero());
}

#[test]
fn test_read_token() {
    let mut input = "  123  \n -456\tx".as_bytes();
    assert_eq!(BigInt::read_token(&mut input).unwrap().to_decimal(), "123");
    assert_eq!(BigInt::read_token(&mut input).unwrap().to_decimal(), "-456");
    assert!(matches!(
        BigInt::read_token(&mut input),
        Err(ReadTokenError::Parse(ParseBigIntError::InvalidDigit('x')))
    ));
    // exhausted stream reads an empty token, which parses to zero
    assert_eq!(BigInt::read_token(&mut input).unwrap().to_decimal(), "0");
}

#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn any_big_int() -> impl Strategy<Value = BigInt> {
        "-?[0-9]{1,40}".prop_map(|s| s.parse::<BigInt>().unwrap())
    }

    proptest! {
        #[test]
        fn roundtrip_native(n in any::<i64>()) {
            let big = BigInt::from(n);
            prop_assert_eq!(big.to_decimal(), n.to_string());
            prop_assert_eq!(big.to_decimal().parse::<BigInt>().unwrap(), big);
        }

        #[test]
        fn roundtrip_text(a in any_big_int()) {
            prop_assert_eq!(a.to_decimal().parse::<BigInt>().unwrap(), a.clone());
        }

        #[test]
        fn additive_inverse(a in any_big_int()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert_eq!(-(-&a), a.clone());
        }

        #[test]
        fn not_is_neg_minus_one(a in any_big_int()) {
            prop_assert_eq!(!&a, &(-&a) - &BigInt::from(1));
        }

        #[test]
        fn identities(a in any_big_int()) {
            prop_assert_eq!(&a + &BigInt::from(0), a.clone());
            prop_assert_eq!(&a * &BigInt::from(1), a.clone());
            prop_assert!((&a * &BigInt::from(0)).is_zero());
        }

        #[test]
        fn zero_divisor(a in any_big_int()) {
            prop_assert!((&a / &BigInt::from(0)).is_zero());
            prop_assert_eq!(&a % &BigInt::from(0), a.clone());
        }

        #[test]
        fn div_rem_recompose(a in any_big_int(), b in any_big_int()) {
            prop_assume!(!b.is_zero());
            let q = &a / &b;
            let r = &a % &b;
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
        }

        #[test]
        fn trichotomy(a in any_big_int(), b in any_big_int()) {
            let holds = [a < b, a == b, a > b];
            prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        }

        #[test]
        fn de_morgan(a in any_big_int(), b in any_big_int()) {
            prop_assert_eq!(!&(&a & &b), &(!&a) | &(!&b));
        }

        // i128 reference arithmetic over i64 operands: Rust's native
        // `/` and `%` truncate toward zero with the remainder taking
        // the dividend's sign, the same convention the composed
        // invert/divide algorithm produces.
        #[test]
        fn matches_native_arithmetic(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (BigInt::from(a), BigInt::from(b));
            let (a, b) = (a as i128, b as i128);
            prop_assert_eq!((&x + &y).to_decimal(), (a + b).to_string());
            prop_assert_eq!((&x - &y).to_decimal(), (a - b).to_string());
            prop_assert_eq!((&x * &y).to_decimal(), (a * b).to_string());
            if b != 0 {
                prop_assert_eq!((&x / &y).to_decimal(), (a / b).to_string());
                prop_assert_eq!((&x % &y).to_decimal(), (a % b).to_string());
            }
            prop_assert_eq!((&x & &y).to_decimal(), (a & b).to_string());
            prop_assert_eq!((&x | &y).to_decimal(), (a | b).to_string());
            prop_assert_eq!((&x ^ &y).to_decimal(), (a ^ b).to_string());
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn matches_native_shift(a in any::<i64>(), k in 0u32..60) {
            let x = BigInt::from(a);
            let a = a as i128;
            // i128 shifts are arithmetic, like ours
            prop_assert_eq!((&x << k as i32).to_decimal(), (a << k).to_string());
            prop_assert_eq!((&x >> k as i32).to_decimal(), (a >> k).to_string());
        }

        #[test]
        fn shl_is_mul_pow2(a in any_big_int(), k in 0i32..200) {
            let mut pow2 = BigInt::from(1);
            pow2 <<= k;
            prop_assert_eq!(&a << k, &a * &pow2);
        }

        #[test]
        fn shr_is_div_pow2(a in any_big_int(), k in 0i32..200) {
            prop_assume!(a.is_positive());
            let mut pow2 = BigInt::from(1);
            pow2 <<= k;
            prop_assert_eq!(&a >> k, &a / &pow2);
        }
    }
}
