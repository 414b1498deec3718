/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The aggregated range prover

use crate::internal_common::*;
use super::{
    proof::RangeProof,
    inner_product,
    zeta_vector,
    MAX_BIT_RANGE
};

use rand::thread_rng;
use zeroize::Zeroizing;

///Prover for aggregated range proofs over double-blinded commitments.
///
///Holds a borrowed generator set and the per-value bit width `n`.
///One prover can produce any number of proofs;
///every call samples its blinds freshly from the thread's CSPRNG.
pub struct RangeProver<'a, G: GroupElement> {
    generators: &'a Generators<G>,
    n: usize

} impl<'a, G: GroupElement> RangeProver<'a, G> {
    ///Create a prover for values in `[0, 2.pow(n))`.
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

    ///Prove that every value in the batch lies in `[0, 2.pow(n))`.
    ///
    ///`randoms[j]` and `serials[j]` must be the two blinds of the
    ///commitment to `values[j]`, in the form
    ///`g*value + h1*random + h2*serial`.
    ///The batch size times `n` must equal the generator count.
    ///A value outside the range is refused with `OutOfRange`
    ///before any group operation runs.
    pub fn batch_proof(
        &self,
        values: &[u64],
        serials: &[G::Exponent],
        randoms: &[G::Exponent]
    ) -> Result<RangeProof<G::Exponent, G>, RangeProofError> {
        if values.is_empty()
            || values.len() != serials.len()
            || values.len() != randoms.len()
            || values.len() * self.n != self.generators.size() {
            return Err(RangeProofError::Malformed)
        }
        if self.n < 64 {
            for value in values {
                if value >> self.n != 0 {
                    return Err(RangeProofError::OutOfRange)
                }
            }
        }
        return self.prove_unchecked(values, serials, randoms);
    }

    //the proving path without the range check: an out-of-range value is
    //silently reduced mod 2^n by the bit decomposition, and the resulting
    //proof will not verify against a commitment to the unreduced value
    pub(crate) fn prove_unchecked(
        &self,
        values: &[u64],
        serials: &[G::Exponent],
        randoms: &[G::Exponent]
    ) -> Result<RangeProof<G::Exponent, G>, RangeProofError> {
        let n = self.n;
        let m = values.len();
        let size = n * m;
        let generators = self.generators;
        let mut rng = thread_rng();

        //bit decomposition of every value, low bits first
        let mut a_l: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(Vec::with_capacity(size));
        for value in values {
            for bit in convert_to_nal(*value, 2, n) {
                a_l.push(G::Exponent::from_u64(bit));
            }
        }
        //a_r = a_l - 1, so every entry pair is (0, -1) or (1, 0)
        let a_r: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(
            a_l.iter().map(|bit| *bit - G::Exponent::one()).collect()
        );

        let alpha = G::Exponent::random(&mut rng);
        let a = vector_commit(generators.h1, alpha, &generators.g_vec, &a_l, &generators.h_vec, &a_r)?;

        //fresh blinding vectors hide the bits behind the later challenges
        let s_l: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(
            (0..size).map(|_| G::Exponent::random(&mut rng)).collect()
        );
        let s_r: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(
            (0..size).map(|_| G::Exponent::random(&mut rng)).collect()
        );
        let rho = G::Exponent::random(&mut rng);
        let s = vector_commit(generators.h1, rho, &generators.g_vec, &s_l, &generators.h_vec, &s_r)?;

        let y = get_x(&[a, s]);
        let z = get_x(&[a + s]);
        if y.is_zero() || z.is_zero() {
            return Err(RangeProofError::ZeroChallenge)
        }

        let y_powers = powers(y, size);
        let zeta = zeta_vector(z, n, m);

        //l(X) = (a_l - z*1) + s_l*X
        //r(X) = y_powers o (a_r + z*1 + s_r*X) + zeta
        //t(X) = <l(X), r(X)> = t0 + t1*X + t2*X^2
        let mut l0: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(Vec::with_capacity(size));
        let mut r0: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(Vec::with_capacity(size));
        let mut r1: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(Vec::with_capacity(size));
        for i in 0..size {
            l0.push(a_l[i] - z);
            r0.push(y_powers[i] * (a_r[i] + z) + zeta[i]);
            r1.push(y_powers[i] * s_r[i]);
        }
        let t1_coefficient = scalar_dot_product(&l0, &r1)? + scalar_dot_product(&s_l, &r0)?;
        let t2_coefficient = scalar_dot_product(&s_l, &r1)?;

        //each t coefficient is blinded on both channels,
        //matching the two blinds carried by the value commitments
        let tau1 = G::Exponent::random(&mut rng);
        let tau2 = G::Exponent::random(&mut rng);
        let eta1 = G::Exponent::random(&mut rng);
        let eta2 = G::Exponent::random(&mut rng);
        let t1 = double_commit(generators.g, t1_coefficient, generators.h1, tau1, generators.h2, eta1);
        let t2 = double_commit(generators.g, t2_coefficient, generators.h1, tau2, generators.h2, eta2);

        let x = get_x(&[t1, t2]);
        if x.is_zero() {
            return Err(RangeProofError::ZeroChallenge)
        }

        //aggregate the blinds of each channel at the challenge point
        let mut t_x1 = tau1 * x + tau2 * x.square();
        let mut t_x2 = eta1 * x + eta2 * x.square();
        let mut z_power = z.square();
        for j in 0..m {
            t_x1 = t_x1 + z_power * randoms[j];
            t_x2 = t_x2 + z_power * serials[j];
            z_power = z_power * z;
        }
        let u = alpha + rho * x;

        //evaluate l and r at the challenge point
        let mut l_x: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(Vec::with_capacity(size));
        let mut r_x: Zeroizing<Vec<G::Exponent>> = Zeroizing::new(Vec::with_capacity(size));
        for i in 0..size {
            l_x.push(l0[i] + s_l[i] * x);
            r_x.push(r0[i] + r1[i] * x);
        }

        let x_u = get_c(&(t1 + t2));
        if x_u.is_zero() {
            return Err(RangeProofError::ZeroChallenge)
        }
        let u_point = generators.g * x_u;

        //the folding argument runs over h scaled down by powers of y
        let y_inverse_powers = powers(y.inverse(), size);
        let mut h_primed: Vec<G> = Vec::with_capacity(size);
        for i in 0..size {
            h_primed.push(generators.h_vec[i] * y_inverse_powers[i]);
        }

        let inner_product_proof = inner_product::prove(
            &generators.g_vec, &h_primed, u_point, &l_x, &r_x
        )?;

        return Ok(RangeProof{
            a, s, t1, t2,
            t_x1, t_x2, u,
            inner_product_proof
        });
    }
}
