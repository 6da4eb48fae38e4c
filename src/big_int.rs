//! # BigInt
//! Fixed-capacity signed decimal integers in sign-magnitude form.
//! The magnitude is kept in base 10000 blocks, least significant block first,
//! and a value never holds more than `DIGITS` decimal digits.
//! # Example
//! ```
//! use fixed_big_num::BigInt;
//!
//! let a: BigInt = "10000000000000".parse()?;
//! let b: BigInt = "900000000000".parse()?;
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", a.checked_mul(&b)?);
//! # Ok::<(), fixed_big_num::Error>(())
//! ```
//!

use std::cmp::{Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct BigInt<const DIGITS: usize = { DEFAULT_DIGITS }> {
    negative: bool,
    /// Active blocks, least significant first. The last block is never zero.
    mag: Vec<u32>,
}

pub type BigInt40k = BigInt<40000>;

// 杂项辅助函数
impl<const DIGITS: usize> BigInt<DIGITS> {
    /// Number of blocks available to a value of this type.
    pub const CAPACITY: usize = capacity_for(DIGITS);

    /// Canonical zero.
    pub const fn new() -> Self {
        Self { negative: false, mag: Vec::new() }
    }
    pub fn zero() -> Self {
        Self::new()
    }
    fn unit() -> Self {
        Self { negative: false, mag: vec![1] }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }
    pub fn is_nonzero(&self) -> bool {
        !self.mag.is_empty()
    }
    /// `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i8 {
        if self.mag.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }
    pub fn abs(&self) -> Self {
        Self { negative: false, mag: self.mag.clone() }
    }
    /// Returns a copy of `self`; the counterpart of unary minus.
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Number of low-order blocks holding the magnitude.
    pub fn active_len(&self) -> usize {
        self.mag.len()
    }
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }
    /// The active blocks, least significant first.
    pub fn blocks(&self) -> &[u32] {
        &self.mag
    }
    /// Count of decimal digits in the magnitude; zero has none.
    pub fn digits(&self) -> usize {
        match self.mag.last() {
            None => 0,
            Some(&top) => (self.mag.len() - 1) * BLOCK_DIGITS + block_digit_len(top),
        }
    }

    pub(crate) fn overflow(op: &'static str) -> Error {
        debug!(target: "fixed_big_num", "{} overflowed the {}-digit bound", op, DIGITS);
        Error::Overflow
    }

    /// Drops zero blocks above the active prefix, clears the sign of zero and
    /// checks the digit bound. Every mutating primitive ends here.
    fn normalize(&mut self, op: &'static str) -> Result<()> {
        while let Some(&0) = self.mag.last() {
            self.mag.pop();
        }
        if self.mag.is_empty() {
            self.negative = false;
        }
        if self.mag.len() > Self::CAPACITY || self.digits() > DIGITS {
            return Err(Self::overflow(op));
        }
        Ok(())
    }
}

// 实现构造
impl<const DIGITS: usize> BigInt<DIGITS> {
    fn from_u64(mut val: u64, negative: bool) -> Result<Self> {
        let mut result = Self { negative, mag: Vec::new() };
        while val != 0 {
            if result.mag.len() == Self::CAPACITY {
                return Err(Self::overflow("from"));
            }
            result.mag.push((val % BASE as u64) as u32);
            val /= BASE as u64;
        }
        result.normalize("from")?;
        Ok(result)
    }
    fn to_u64(&self) -> Result<u64> {
        self.mag.iter().rev().try_fold(0u64, |acc, &block| {
            acc.checked_mul(BASE as u64)
                .and_then(|acc| acc.checked_add(block as u64))
                .ok_or(Error::Overflow)
        })
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl<const DIGITS: usize> TryFrom<$u> for BigInt<DIGITS> {
        type Error = Error;

        fn try_from(val: $u) -> Result<Self> {
            Self::from_u64(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl<const DIGITS: usize> TryFrom<$i> for BigInt<DIGITS> {
        type Error = Error;

        fn try_from(val: $i) -> Result<Self> {
            Self::from_u64(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

impl<const DIGITS: usize> TryFrom<&BigInt<DIGITS>> for u64 {
    type Error = Error;

    fn try_from(val: &BigInt<DIGITS>) -> Result<u64> {
        if val.negative {
            return Err(Error::Overflow);
        }
        val.to_u64()
    }
}

impl<const DIGITS: usize> TryFrom<&BigInt<DIGITS>> for i64 {
    type Error = Error;

    fn try_from(val: &BigInt<DIGITS>) -> Result<i64> {
        let mag = val.to_u64()?;
        if val.negative {
            if mag > i64::MAX as u64 + 1 {
                return Err(Error::Overflow);
            }
            Ok((mag as i64).wrapping_neg())
        } else {
            i64::try_from(mag).map_err(|_| Error::Overflow)
        }
    }
}

impl<const DIGITS: usize> From<&BigInt<DIGITS>> for bool {
    fn from(val: &BigInt<DIGITS>) -> bool {
        val.is_nonzero()
    }
}

// 实现解析
impl<const DIGITS: usize> FromStr for BigInt<DIGITS> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_decimal(s)
    }
}

impl<const DIGITS: usize> TryFrom<&str> for BigInt<DIGITS> {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_decimal(s)
    }
}

impl<const DIGITS: usize> BigInt<DIGITS> {
    /// Parses `['+'|'-'] digit+` holding at most `DIGITS` digits.
    pub fn parse_decimal(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.first() {
            None => return Err(Error::Empty),
            Some(b'-') => (true, &bytes[1..]),
            Some(b'+') => (false, &bytes[1..]),
            Some(_) => (false, bytes),
        };
        if digits.is_empty() {
            trace!(target: "fixed_big_num", "rejected {:?}: no digits", s);
            return Err(Error::Empty);
        }

        let offset = bytes.len() - digits.len();
        if let Some(pos) = digits.iter().position(|b| !b.is_ascii_digit()) {
            // everything before `index` is ASCII, so it is a char boundary
            let index = offset + pos;
            let found = s[index..].chars().next().unwrap_or_default();
            trace!(target: "fixed_big_num", "rejected {:?}: {:?} at {}", s, found, index);
            return Err(Error::InvalidDigit { index, found });
        }
        if digits.len() > DIGITS {
            return Err(Self::overflow("parse"));
        }

        let mag = digits
            .rchunks(BLOCK_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .rev()
                    .enumerate()
                    .fold(0, |block, (i, d)| block + (d - b'0') as u32 * POW10[i])
            })
            .collect();
        let mut result = Self { negative, mag };
        result.normalize("parse")?;
        Ok(result)
    }
}

// 实现打印
impl<const DIGITS: usize> Display for BigInt<DIGITS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.negative, "", &self.mag_to_string())
    }
}

impl<const DIGITS: usize> BigInt<DIGITS> {
    fn mag_to_string(&self) -> String {
        let (top, rest) = match self.mag.split_last() {
            Some(split) => split,
            None => return String::from("0"),
        };
        let mut s = String::with_capacity(self.mag.len() * BLOCK_DIGITS);
        s.push_str(&top.to_string());
        for block in rest.iter().rev() {
            s.extend(TEXT_OF_BLOCK[*block as usize].iter().map(|&c| c as char));
        }
        s
    }
}

// 实现大小比较
impl<const DIGITS: usize> BigInt<DIGITS> {
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
    /// Compares magnitudes, ignoring signs.
    pub fn abs_cmp(&self, other: &Self) -> Ordering {
        Self::compare_mag(&self.mag, &other.mag)
    }
    pub fn abs_less(&self, other: &Self) -> bool {
        self.abs_cmp(other).is_lt()
    }
    pub fn abs_eq(&self, other: &Self) -> bool {
        self.abs_cmp(other).is_eq()
    }
}

impl<const DIGITS: usize> PartialEq for BigInt<DIGITS> {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.abs_eq(other)
    }
}
impl<const DIGITS: usize> Eq for BigInt<DIGITS> {}

impl<const DIGITS: usize> PartialOrd for BigInt<DIGITS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const DIGITS: usize> Ord for BigInt<DIGITS> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.abs_cmp(other),
            (true, true) => self.abs_cmp(other).reverse(),
        }
    }
}

impl<const DIGITS: usize> Hash for BigInt<DIGITS> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.mag.hash(state);
    }
}

// 块运算
impl<const DIGITS: usize> BigInt<DIGITS> {
    /// `x += y` on magnitudes.
    fn add_mag(x: &mut Vec<u32>, y: &[u32], op: &'static str) -> Result<()> {
        if x.len() < y.len() {
            x.resize(y.len(), 0);
        }
        let mut carry = 0;
        for (i, block) in x.iter_mut().enumerate() {
            if carry == 0 && i >= y.len() {
                break;
            }
            let sum = *block + y.get(i).copied().unwrap_or(0) + carry;
            *block = sum % BASE;
            carry = sum / BASE;
        }
        if carry != 0 {
            if x.len() >= Self::CAPACITY {
                return Err(Self::overflow(op));
            }
            x.push(carry);
        }
        Ok(())
    }

    /// `x -= y` on magnitudes, requires `x >= y`. Leaves zero blocks on top.
    fn sub_mag(x: &mut [u32], y: &[u32]) {
        let mut borrow = 0;
        for (i, block) in x.iter_mut().enumerate() {
            let sub = y.get(i).copied().unwrap_or(0) + borrow;
            if sub == 0 && i >= y.len() {
                break;
            }
            if *block < sub {
                *block = *block + BASE - sub;
                borrow = 1;
            } else {
                *block -= sub;
                borrow = 0;
            }
        }
        debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");
    }

    /// Subtracts the magnitude of `rhs` from `self`, flipping the sign when
    /// `rhs` has the larger magnitude.
    fn sub_signed_mag(&mut self, rhs: &Self) {
        match Self::compare_mag(&self.mag, &rhs.mag) {
            Ordering::Equal => {
                self.mag.clear();
                self.negative = false;
            }
            Ordering::Greater => Self::sub_mag(&mut self.mag, &rhs.mag),
            Ordering::Less => {
                let mut mag = rhs.mag.clone();
                Self::sub_mag(&mut mag, &self.mag);
                self.mag = mag;
                self.negative = !self.negative;
            }
        }
    }

    /// Multiplies a magnitude by a small factor (a decimal digit, or ten).
    fn mul_digit(x: &mut Vec<u32>, digit: u32, op: &'static str) -> Result<()> {
        if digit == 0 {
            x.clear();
            return Ok(());
        }
        let mut carry = 0;
        for block in x.iter_mut() {
            let product = *block * digit + carry;
            *block = product % BASE;
            carry = product / BASE;
        }
        if carry != 0 {
            if x.len() >= Self::CAPACITY {
                return Err(Self::overflow(op));
            }
            x.push(carry);
        }
        Ok(())
    }

    /// Shifts a magnitude left by one decimal digit. Zero low blocks stay zero
    /// and are skipped.
    fn ten_times(x: &mut Vec<u32>, op: &'static str) -> Result<()> {
        let start = match x.iter().position(|&block| block != 0) {
            Some(start) => start,
            None => return Ok(()),
        };
        let mut carry = 0;
        for block in x[start..].iter_mut() {
            let shifted = *block * 10 + carry;
            *block = shifted % BASE;
            carry = shifted / BASE;
        }
        if carry != 0 {
            if x.len() >= Self::CAPACITY {
                return Err(Self::overflow(op));
            }
            x.push(carry);
        }
        Ok(())
    }

    /// Shifts a magnitude left by `n` whole blocks.
    fn shift_blocks(x: &mut Vec<u32>, n: usize, op: &'static str) -> Result<()> {
        if x.is_empty() || n == 0 {
            return Ok(());
        }
        if x.len() + n > Self::CAPACITY {
            return Err(Self::overflow(op));
        }
        let mut shifted = vec![0; n];
        shifted.extend_from_slice(x);
        *x = shifted;
        Ok(())
    }

    /// Shifts a magnitude left by `n` decimal digits.
    fn shift_decimal(x: &mut Vec<u32>, n: usize, op: &'static str) -> Result<()> {
        Self::shift_blocks(x, n / BLOCK_DIGITS, op)?;
        for _ in 0..n % BLOCK_DIGITS {
            Self::ten_times(x, op)?;
        }
        Ok(())
    }

    /// Long multiplication of a magnitude by one block, one decimal digit of
    /// the block at a time.
    fn mul_by_block(x: &[u32], block: u32, op: &'static str) -> Result<Vec<u32>> {
        let mut result = Vec::new();
        for (shift, &digit) in DIGITS_OF_BLOCK[block as usize].iter().enumerate() {
            if digit == 0 {
                continue;
            }
            let mut summand = x.to_vec();
            Self::mul_digit(&mut summand, digit as u32, op)?;
            Self::shift_decimal(&mut summand, shift, op)?;
            Self::add_mag(&mut result, &summand, op)?;
        }
        Ok(result)
    }
}

// 实现加减乘
impl<const DIGITS: usize> BigInt<DIGITS> {
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        let mut result = self.clone();
        if self == rhs {
            Self::mul_digit(&mut result.mag, 2, "add")?;
        } else if self.negative == rhs.negative {
            Self::add_mag(&mut result.mag, &rhs.mag, "add")?;
        } else {
            result.sub_signed_mag(rhs);
        }
        result.normalize("add")?;
        Ok(result)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        if self == rhs {
            return Ok(Self::new());
        }
        let mut result = self.clone();
        if self.negative == rhs.negative {
            result.sub_signed_mag(rhs);
        } else {
            Self::add_mag(&mut result.mag, &rhs.mag, "sub")?;
        }
        result.normalize("sub")?;
        Ok(result)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let mut result = Self::new();
        if self.is_zero() || rhs.is_zero() {
            return Ok(result);
        }
        for (i, &block) in rhs.mag.iter().enumerate() {
            if block == 0 {
                continue;
            }
            let mut partial = Self::mul_by_block(&self.mag, block, "mul")?;
            Self::shift_blocks(&mut partial, i, "mul")?;
            Self::add_mag(&mut result.mag, &partial, "mul")?;
        }
        result.negative = self.negative != rhs.negative;
        result.normalize("mul")?;
        Ok(result)
    }

    /// `self += rhs`; on error `self` is left unchanged.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }
    /// `self -= rhs`; on error `self` is left unchanged.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }
    /// `self *= rhs`; on error `self` is left unchanged.
    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }

    /// Prefix increment.
    pub fn inc(&mut self) -> Result<&mut Self> {
        self.try_add_assign(&Self::unit())?;
        Ok(self)
    }
    /// Prefix decrement.
    pub fn dec(&mut self) -> Result<&mut Self> {
        self.try_sub_assign(&Self::unit())?;
        Ok(self)
    }
    /// Postfix increment, returns the value before the increment.
    pub fn post_inc(&mut self) -> Result<Self> {
        let old = self.clone();
        self.try_add_assign(&Self::unit())?;
        Ok(old)
    }
    /// Postfix decrement, returns the value before the decrement.
    pub fn post_dec(&mut self) -> Result<Self> {
        let old = self.clone();
        self.try_sub_assign(&Self::unit())?;
        Ok(old)
    }
}

// 运算符: 溢出时 panic, 与原生整数的溢出检查一致
macro_rules! impl_binary_op {
    ($($op: ident, $method: ident, $assign_op: ident, $assign_method: ident, $checked: ident;)*) => {
    $(
    impl<const DIGITS: usize> $op<&BigInt<DIGITS>> for &BigInt<DIGITS> {
        type Output = BigInt<DIGITS>;

        fn $method(self, rhs: &BigInt<DIGITS>) -> Self::Output {
            match self.$checked(rhs) {
                Ok(val) => val,
                Err(err) => panic!("{}", err),
            }
        }
    }

    impl<const DIGITS: usize> $op for BigInt<DIGITS> {
        type Output = BigInt<DIGITS>;

        fn $method(self, rhs: Self) -> Self::Output {
            $op::$method(&self, &rhs)
        }
    }

    impl<const DIGITS: usize> $op<&BigInt<DIGITS>> for BigInt<DIGITS> {
        type Output = BigInt<DIGITS>;

        fn $method(self, rhs: &BigInt<DIGITS>) -> Self::Output {
            $op::$method(&self, rhs)
        }
    }

    impl<const DIGITS: usize> $op<BigInt<DIGITS>> for &BigInt<DIGITS> {
        type Output = BigInt<DIGITS>;

        fn $method(self, rhs: BigInt<DIGITS>) -> Self::Output {
            $op::$method(self, &rhs)
        }
    }

    impl<const DIGITS: usize> $assign_op<&BigInt<DIGITS>> for BigInt<DIGITS> {
        fn $assign_method(&mut self, rhs: &BigInt<DIGITS>) {
            *self = $op::$method(&*self, rhs);
        }
    }

    impl<const DIGITS: usize> $assign_op for BigInt<DIGITS> {
        fn $assign_method(&mut self, rhs: Self) {
            *self = $op::$method(&*self, &rhs);
        }
    }
    )*
    };
}

impl_binary_op! {
    Add, add, AddAssign, add_assign, checked_add;
    Sub, sub, SubAssign, sub_assign, checked_sub;
    Mul, mul, MulAssign, mul_assign, checked_mul;
}

// 实现取反
impl<const DIGITS: usize> Neg for BigInt<DIGITS> {
    type Output = BigInt<DIGITS>;

    fn neg(mut self) -> Self::Output {
        if !self.mag.is_empty() {
            self.negative = !self.negative;
        }
        self
    }
}

impl<const DIGITS: usize> Neg for &BigInt<DIGITS> {
    type Output = BigInt<DIGITS>;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}
