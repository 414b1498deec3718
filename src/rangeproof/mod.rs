/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Aggregated proofs that double-blinded commitments hold values in `[0, 2.pow(n))`
//!
//! A batch of `m` commitments of the form `g*value + h1*random + h2*serial`
//! is covered by a single proof whose size grows logarithmically in `n * m`.
//! Proving and verifying share one generator set; see `Generators`.

mod proof;
mod inner_product;
mod prover;
mod verifier;

pub use proof::{RangeProof, InnerProductProof};
pub use prover::RangeProver;
pub use verifier::RangeVerifier;

use crate::algebra::Exponent;

///Largest supported bit width for a single committed value.
pub const MAX_BIT_RANGE: usize = 64;

//z.pow(2 + j) * 2.pow(i), laid out block by block: the powers of two
//replicated per value, scaled by that value's aggregation coefficient
pub(crate) fn zeta_vector<E: Exponent>(z: E, n: usize, m: usize) -> Vec<E> {
    let two = E::from_u64(2);
    let mut zeta: Vec<E> = Vec::with_capacity(n * m);
    let mut z_power = z.square();
    for _ in 0..m {
        let mut two_power = E::one();
        for _ in 0..n {
            zeta.push(z_power * two_power);
            two_power = two_power * two;
        }
        z_power = z_power * z;
    }
    return zeta;
}
