/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Field and group abstractions which the proof system is written against

use std::{
    fmt::Debug,
    ops::{Add, Sub, Mul, Neg}
};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

///An element of the scalar field of the proof group.
///
///Everything in this crate is generic over this trait and `GroupElement`,
///so the proof system never touches curve internals directly.
///Arithmetic is by value: field elements are small `Copy` types.
pub trait Exponent:
    Copy
    + Eq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Zeroize
{
    ///The additive identity.
    fn zero() -> Self;

    ///The multiplicative identity.
    fn one() -> Self;

    ///Embed an integer into the field.
    fn from_u64(value: u64) -> Self;

    ///Map 32 bytes of hash output into the field, reducing mod the field order.
    fn from_bytes_mod_order(bytes: [u8; 32]) -> Self;

    ///The multiplicative inverse.
    ///
    ///Inverting zero is a caller error: callers in this crate reject
    ///zero challenges before any inverse is taken.
    fn inverse(&self) -> Self;

    ///Uniformly random field element.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    fn square(&self) -> Self {
        return *self * *self;
    }

    ///Raise to a small integer power by square-and-multiply.
    fn pow(&self, exponent: u64) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        let mut remaining = exponent;
        while remaining != 0 {
            if remaining & 1 == 1 {
                result = result * base;
            }
            base = base.square();
            remaining >>= 1;
        }
        return result;
    }

    fn is_zero(&self) -> bool {
        return *self == Self::zero();
    }
}

///An element of the proof group.
///
///Scalar multiplication takes this element's `Exponent` type, and
///serialization appends a fixed-width encoding to a growable buffer,
///so transcript hashing never needs to know the width up front.
pub trait GroupElement:
    Copy
    + Eq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Self::Exponent, Output = Self>
{
    type Exponent: Exponent;

    ///Width in bytes of one serialized element.
    const SERIALIZED_SIZE: usize;

    ///The identity element.
    fn identity() -> Self;

    ///Uniformly random group element with no known discrete log relation
    ///to any other element. Intended for generator setup.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    ///Append the fixed-width encoding of this element to `buffer`,
    ///returning the number of bytes written (always `SERIALIZED_SIZE`).
    fn append_serialized(&self, buffer: &mut Vec<u8>) -> usize;

    ///Constant-time multi-exponentiation: the sum of `points[i] * exponents[i]`.
    ///Use this whenever any exponent is secret.
    fn multiscalar_mul(exponents: &[Self::Exponent], points: &[Self]) -> Self;

    ///Variable-time multi-exponentiation, for verification only.
    fn vartime_multiscalar_mul(exponents: &[Self::Exponent], points: &[Self]) -> Self;
}
