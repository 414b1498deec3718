/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The aggregated range verifier

use crate::internal_common::*;
use super::{
    proof::RangeProof,
    inner_product,
    zeta_vector,
    MAX_BIT_RANGE
};

///Verifier for aggregated range proofs over double-blinded commitments.
///
///Holds a borrowed generator set and the per-value bit width `n`,
///which must match the prover's exactly.
pub struct RangeVerifier<'a, G: GroupElement> {
    generators: &'a Generators<G>,
    n: usize

} impl<'a, G: GroupElement> RangeVerifier<'a, G> {
    ///Create a verifier for values in `[0, 2.pow(n))`.
    ///
    ///`n` must be between 1 and `MAX_BIT_RANGE`, and the generator count
    ///must be a power-of-two multiple of `n`. The two generator vectors
    ///must be equally long.
    pub fn new(generators: &'a Generators<G>, n: usize) -> Result<Self, RangeProofError> {
        if n == 0 || n > MAX_BIT_RANGE {
            return Err(RangeProofError::Malformed)
        }
        //the vectors are public fields, equal lengths are not guaranteed here
        if generators.g_vec.len() != generators.h_vec.len()
            || generators.size() % n != 0
            || !generators.size().is_power_of_two() {
            return Err(RangeProofError::Malformed)
        }
        return Ok(Self{generators, n})
    }

    ///Check a proof against the commitments it claims to range-bound.
    ///
    ///Returns `Ok(true)` if the proof holds and `Ok(false)` if it is
    ///cryptographically invalid; `Err(Malformed)` is reserved for inputs
    ///whose shape makes verification meaningless, such as a batch size
    ///that disagrees with the generator count.
    pub fn verify_batch(
        &self,
        commitments: &[G],
        proof: &RangeProof<G::Exponent, G>
    ) -> Result<bool, RangeProofError> {
        let n = self.n;
        let m = commitments.len();
        let size = n * m;
        let generators = self.generators;

        if m == 0 || size != generators.size() {
            return Err(RangeProofError::Malformed)
        }
        //size is a power of two, checked at construction
        let rounds = size.trailing_zeros() as usize;
        if proof.inner_product_proof.l_vec.len() != rounds
            || proof.inner_product_proof.r_vec.len() != rounds {
            return Err(RangeProofError::Malformed)
        }

        //replay the challenges from the proof's commitments
        let y = get_x(&[proof.a, proof.s]);
        let z = get_x(&[proof.a + proof.s]);
        let x = get_x(&[proof.t1, proof.t2]);
        let x_u = get_c(&(proof.t1 + proof.t2));
        if y.is_zero() || z.is_zero() || x.is_zero() || x_u.is_zero() {
            return Ok(false)
        }

        //the revealed polynomial evaluation must match the commitments:
        //g*t_hat + h1*t_x1 + h2*t_x2
        //  == sum_j(V_j * z.pow(2 + j)) + g*delta + t1*x + t2*x.square()
        let t_hat = proof.inner_product_proof.c;
        let left = G::vartime_multiscalar_mul(
            &[t_hat, proof.t_x1, proof.t_x2],
            &[generators.g, generators.h1, generators.h2]
        );

        let mut exponents: Vec<G::Exponent> = Vec::with_capacity(m + 3);
        let mut points: Vec<G> = Vec::with_capacity(m + 3);
        let mut z_power = z.square();
        for j in 0..m {
            exponents.push(z_power);
            points.push(commitments[j]);
            z_power = z_power * z;
        }
        exponents.push(delta(y, z, n, m));
        points.push(generators.g);
        exponents.push(x);
        points.push(proof.t1);
        exponents.push(x.square());
        points.push(proof.t2);
        let right = G::vartime_multiscalar_mul(&exponents, &points);

        if left != right {
            return Ok(false)
        }

        //rebuild the folding argument's starting commitment:
        //P = A + S*x - h1*u + <g_vec, -z*1> + <h_primed, z*y_powers + zeta>
        let y_inverse_powers = powers(y.inverse(), size);
        let mut h_primed: Vec<G> = Vec::with_capacity(size);
        for i in 0..size {
            h_primed.push(generators.h_vec[i] * y_inverse_powers[i]);
        }

        let y_powers = powers(y, size);
        let zeta = zeta_vector(z, n, m);
        let neg_z = -z;

        let mut exponents: Vec<G::Exponent> = Vec::with_capacity(2 * size);
        let mut points: Vec<G> = Vec::with_capacity(2 * size);
        for i in 0..size {
            exponents.push(neg_z);
            points.push(generators.g_vec[i]);
        }
        for i in 0..size {
            exponents.push(z * y_powers[i] + zeta[i]);
            points.push(h_primed[i]);
        }
        let p = proof.a + proof.s * x - generators.h1 * proof.u
            + G::vartime_multiscalar_mul(&exponents, &points);

        let u_point = generators.g * x_u;
        return inner_product::verify(
            &proof.inner_product_proof, &generators.g_vec, &h_primed, u_point, p
        );
    }
}
