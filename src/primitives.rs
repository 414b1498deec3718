/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Commitments, digit decomposition, challenge derivation, and folding rules
//!
//! Prover and verifier must agree on every function here:
//! a divergence on either side makes honest proofs unverifiable.

use crate::algebra::{Exponent, GroupElement};
use crate::errors::RangeProofError;

use sha2::{Sha256, Digest};

//hash a serialized transcript into the field
fn hash_to_exponent<G: GroupElement>(buffer: &[u8]) -> G::Exponent {
    let mut hasher = Sha256::new();
    hasher.update(buffer);
    return G::Exponent::from_bytes_mod_order(
        hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length")
    );
}

///Derive a challenge from a group of points.
///
///Every point is serialized in argument order into one buffer,
///the buffer is hashed with SHA-256,
///and the digest is mapped into the field.
///An empty slice hashes nothing and returns one.
pub fn get_x<G: GroupElement>(points: &[G]) -> G::Exponent {
    if points.is_empty() {
        return G::Exponent::one();
    }

    let mut buffer: Vec<u8> = Vec::with_capacity(points.len() * G::SERIALIZED_SIZE);
    for point in points {
        point.append_serialized(&mut buffer);
    }
    return hash_to_exponent::<G>(&buffer);
}

///Derive a challenge from a single point.
///Same serialization and hashing as `get_x`.
pub fn get_c<G: GroupElement>(u: &G) -> G::Exponent {
    let mut buffer: Vec<u8> = Vec::with_capacity(G::SERIALIZED_SIZE);
    u.append_serialized(&mut buffer);
    return hash_to_exponent::<G>(&buffer);
}

///Commitment to a vector of exponents: `g*r + h_vec[0]*exponents[0] + ...`
///
///Returns `Malformed` if the vector lengths differ.
pub fn commit<G: GroupElement>(
    g: G,
    h_vec: &[G],
    exponents: &[G::Exponent],
    r: G::Exponent
) -> Result<G, RangeProofError> {
    if h_vec.len() != exponents.len() {
        return Err(RangeProofError::Malformed)
    }
    return Ok(g * r + G::multiscalar_mul(exponents, h_vec));
}

///Pedersen commitment: `g*m + h*r`
pub fn pedersen_commit<G: GroupElement>(g: G, m: G::Exponent, h: G, r: G::Exponent) -> G {
    return G::multiscalar_mul(&[m, r], &[g, h]);
}

///Double-blinded pedersen commitment: `g*m + h_v*v + h_r*r`
///
///Value commitments carry two blinds, one per channel:
///`v` on the randomness generator and `r` on the serial generator.
pub fn double_commit<G: GroupElement>(
    g: G, m: G::Exponent,
    h_v: G, v: G::Exponent,
    h_r: G, r: G::Exponent
) -> G {
    return G::multiscalar_mul(&[m, v, r], &[g, h_v, h_r]);
}

///Commitment to two vectors of exponents under one blind:
///`h*h_exp + <g_vec, l> + <h_vec, r>`
///
///Returns `Malformed` if either generator vector disagrees
///with its exponent vector on length.
pub fn vector_commit<G: GroupElement>(
    h: G, h_exp: G::Exponent,
    g_vec: &[G], l: &[G::Exponent],
    h_vec: &[G], r: &[G::Exponent]
) -> Result<G, RangeProofError> {
    if g_vec.len() != l.len() || h_vec.len() != r.len() {
        return Err(RangeProofError::Malformed)
    }
    return Ok(h * h_exp + G::multiscalar_mul(l, g_vec) + G::multiscalar_mul(r, h_vec));
}

///Decompose `num` into one-hot digit blocks: each block has `base` entries,
///with a one at the digit's value and zeroes elsewhere.
///
///Exhausted digits are padded with `[1, 0, .., 0]` blocks (digit zero)
///up to `digits` blocks, so `num == 0` produces all padding.
///If `num >= base.pow(digits)` the output simply grows past
///`base * digits` entries; callers are expected to range-check first.
///`base` must be at least 2.
pub fn convert_to_sigma<E: Exponent>(num: u64, base: u64, digits: usize) -> Vec<E> {
    let mut result: Vec<E> = Vec::with_capacity((base as usize) * digits);
    let mut remaining = num;
    let mut blocks = 0;

    while remaining != 0 {
        let rem = remaining % base;
        remaining /= base;
        for i in 0..base {
            if i == rem {
                result.push(E::one());
            } else {
                result.push(E::zero());
            }
        }
        blocks += 1;
    }

    //pad with blocks encoding digit zero
    while blocks < digits {
        result.push(E::one());
        for _ in 1..base {
            result.push(E::zero());
        }
        blocks += 1;
    }
    return result;
}

///Decompose `num` into exactly `digits` positional digits, least significant first.
///
///High digits are dropped if `num` does not fit,
///so the result always recomposes to `num mod base.pow(digits)`.
///`base` must be at least 2.
pub fn convert_to_nal(num: u64, base: u64, digits: usize) -> Vec<u64> {
    let mut result: Vec<u64> = Vec::with_capacity(digits);
    let mut remaining = num;
    while remaining != 0 {
        result.push(remaining % base);
        remaining /= base;
    }
    result.resize(digits, 0);
    return result;
}

///Multiply the polynomial held in `coefficients` by a new factor `(x + a*X)`.
///
///Used to build `(x_1 + a_1*X)(x_2 + a_2*X)...` one factor at a time;
///the output is one coefficient longer than the input.
pub fn new_factor<E: Exponent>(x: E, a: E, coefficients: &mut Vec<E>) {
    let mut temp: Vec<E> = vec![E::zero(); coefficients.len() + 1];
    for (j, coefficient) in coefficients.iter().enumerate() {
        temp[j] = temp[j] + x * *coefficient;
    }
    for (j, coefficient) in coefficients.iter().enumerate() {
        temp[j + 1] = temp[j + 1] + a * *coefficient;
    }
    *coefficients = temp;
}

///One folding round of a generator vector: `g_vec[i]*x_inv + g_vec[half + i]*x`.
///
///Returns a vector of half the length, or `Malformed` if the length is odd.
pub fn g_prime<G: GroupElement>(g_vec: &[G], x: G::Exponent) -> Result<Vec<G>, RangeProofError> {
    if g_vec.len() % 2 != 0 {
        return Err(RangeProofError::Malformed)
    }
    let x_inverse = x.inverse();
    let half = g_vec.len() / 2;

    let mut result: Vec<G> = Vec::with_capacity(half);
    for i in 0..half {
        result.push(g_vec[i] * x_inverse + g_vec[half + i] * x);
    }
    return Ok(result);
}

///One folding round of the second generator vector: `h_vec[i]*x + h_vec[half + i]*x_inv`.
///
///The exponents are mirrored relative to `g_prime`;
///the two vectors fold in opposite directions on purpose.
///Returns `Malformed` if the length is odd.
pub fn h_prime<G: GroupElement>(h_vec: &[G], x: G::Exponent) -> Result<Vec<G>, RangeProofError> {
    if h_vec.len() % 2 != 0 {
        return Err(RangeProofError::Malformed)
    }
    let x_inverse = x.inverse();
    let half = h_vec.len() / 2;

    let mut result: Vec<G> = Vec::with_capacity(half);
    for i in 0..half {
        result.push(h_vec[i] * x + h_vec[half + i] * x_inverse);
    }
    return Ok(result);
}

///One folding round of the running commitment: `l*x.square() + p + r*x.square().inverse()`
pub fn p_prime<G: GroupElement>(p: G, l: G, r: G, x: G::Exponent) -> G {
    let x_square = x.square();
    return l * x_square + p + r * x_square.inverse();
}

///The publicly computable constant term of the aggregated range polynomial:
///
///`(z - z.square()) * sum(y.pow(k))  -  sum_j( z.pow(3 + j) * (2.pow(n) - 1) )`
///
///where `k` runs over `0..n*m` and `j` over `0..m`.
///Both sides of a proof compute this identically, in ascending power order.
pub fn delta<E: Exponent>(y: E, z: E, n: usize, m: usize) -> E {
    let mut y_sum = E::zero();
    let mut y_power = E::one();
    for _ in 0..(n * m) {
        y_sum = y_sum + y_power;
        y_power = y_power * y;
    }

    //2.pow(n) - 1, summed bit by bit
    let two = E::from_u64(2);
    let mut two_sum = E::zero();
    let mut two_power = E::one();
    for _ in 0..n {
        two_sum = two_sum + two_power;
        two_power = two_power * two;
    }

    let z_square = z.square();
    let mut z_power = z_square * z;
    let mut z_sum = E::zero();
    for _ in 0..m {
        z_sum = z_sum + z_power * two_sum;
        z_power = z_power * z;
    }

    return (z - z_square) * y_sum - z_sum;
}

///Inner product of two exponent vectors.
///
///Returns `Malformed` if the lengths differ.
pub fn scalar_dot_product<E: Exponent>(a: &[E], b: &[E]) -> Result<E, RangeProofError> {
    if a.len() != b.len() {
        return Err(RangeProofError::Malformed)
    }
    let mut result = E::zero();
    for i in 0..a.len() {
        result = result + a[i] * b[i];
    }
    return Ok(result);
}

//ascending powers of x, starting from one
pub(crate) fn powers<E: Exponent>(x: E, count: usize) -> Vec<E> {
    let mut result: Vec<E> = Vec::with_capacity(count);
    let mut power = E::one();
    for _ in 0..count {
        result.push(power);
        power = power * x;
    }
    return result;
}
