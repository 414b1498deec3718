/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The logarithmic folding argument at the core of the range proof
//!
//! Each round commits to the cross inner products of the half-vectors,
//! derives a challenge, and folds witnesses and generators to half length.
//! The two generator vectors fold in opposite directions, mirroring the
//! witness folds, so the running commitment stays consistent.

use crate::internal_common::*;
use super::proof::InnerProductProof;

use zeroize::Zeroizing;

//prove knowledge of vectors a and b with <a, b> = c under
//P = <g_vec, a> + <h_vec, b> + u*c
pub(crate) fn prove<G: GroupElement>(
    g_vec: &[G],
    h_vec: &[G],
    u: G,
    a: &[G::Exponent],
    b: &[G::Exponent]
) -> Result<InnerProductProof<G::Exponent, G>, RangeProofError> {
    let size = a.len();
    if b.len() != size || g_vec.len() != size || h_vec.len() != size {
        return Err(RangeProofError::Malformed)
    }
    if !size.is_power_of_two() {
        return Err(RangeProofError::Malformed)
    }

    let c = scalar_dot_product(a, b)?;

    //the witness halves are secret, so the working copies are
    //wiped whenever they are replaced or dropped
    let mut a = Zeroizing::new(a.to_vec());
    let mut b = Zeroizing::new(b.to_vec());
    let mut g_vec = g_vec.to_vec();
    let mut h_vec = h_vec.to_vec();

    let rounds = size.trailing_zeros() as usize;
    let mut l_vec: Vec<G> = Vec::with_capacity(rounds);
    let mut r_vec: Vec<G> = Vec::with_capacity(rounds);

    while a.len() > 1 {
        let half = a.len() / 2;
        let (a_lo, a_hi) = a.split_at(half);
        let (b_lo, b_hi) = b.split_at(half);
        let (g_lo, g_hi) = g_vec.split_at(half);
        let (h_lo, h_hi) = h_vec.split_at(half);

        let c_l = scalar_dot_product(a_lo, b_hi)?;
        let c_r = scalar_dot_product(a_hi, b_lo)?;

        //cross commitments for this round
        let l = G::multiscalar_mul(a_lo, g_hi) + G::multiscalar_mul(b_hi, h_lo) + u * c_l;
        let r = G::multiscalar_mul(a_hi, g_lo) + G::multiscalar_mul(b_lo, h_hi) + u * c_r;

        let x = get_x(&[l, r]);
        if x.is_zero() {
            return Err(RangeProofError::ZeroChallenge)
        }
        let x_inverse = x.inverse();

        //fold the witnesses opposite to their generators
        let mut a_next: Vec<G::Exponent> = Vec::with_capacity(half);
        let mut b_next: Vec<G::Exponent> = Vec::with_capacity(half);
        for i in 0..half {
            a_next.push(a_lo[i] * x + a_hi[i] * x_inverse);
            b_next.push(b_lo[i] * x_inverse + b_hi[i] * x);
        }

        g_vec = g_prime(&g_vec, x)?;
        h_vec = h_prime(&h_vec, x)?;
        a = Zeroizing::new(a_next);
        b = Zeroizing::new(b_next);

        l_vec.push(l);
        r_vec.push(r);
    }

    return Ok(InnerProductProof{
        a: a[0],
        b: b[0],
        c,
        l_vec,
        r_vec
    });
}

//fold the running commitment along the proof's transcript and check
//the terminal identity; p must not yet include the u*c term
pub(crate) fn verify<G: GroupElement>(
    proof: &InnerProductProof<G::Exponent, G>,
    g_vec: &[G],
    h_vec: &[G],
    u: G,
    p: G
) -> Result<bool, RangeProofError> {
    let size = g_vec.len();
    if h_vec.len() != size || !size.is_power_of_two() {
        return Err(RangeProofError::Malformed)
    }
    let rounds = size.trailing_zeros() as usize;
    if proof.l_vec.len() != rounds || proof.r_vec.len() != rounds {
        return Err(RangeProofError::Malformed)
    }

    //bind the claimed inner product to the running commitment
    let mut p = p + u * proof.c;
    let mut g_vec = g_vec.to_vec();
    let mut h_vec = h_vec.to_vec();

    for round in 0..rounds {
        let l = proof.l_vec[round];
        let r = proof.r_vec[round];

        let x = get_x(&[l, r]);
        if x.is_zero() {
            return Ok(false)
        }

        p = p_prime(p, l, r, x);
        g_vec = g_prime(&g_vec, x)?;
        h_vec = h_prime(&h_vec, x)?;
    }

    //a single generator pair remains after all rounds
    let expected = G::vartime_multiscalar_mul(
        &[proof.a, proof.b, proof.a * proof.b],
        &[g_vec[0], h_vec[0], u]
    );
    return Ok(p == expected);
}
