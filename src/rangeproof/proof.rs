/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Proof objects

use crate::tobytes::*;
use crate::algebra::{Exponent, GroupElement};

///Transcript of the folding argument.
/// * `a`, `b`: the two witness scalars left after every folding round
/// * `c`: the claimed inner product of the original witness vectors
/// * `l_vec`, `r_vec`: the cross commitments, one pair per round
///
///The number of rounds is the base-2 logarithm of the witness length,
///so the proof grows logarithmically with the number of committed bits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InnerProductProof<E: Exponent, G: GroupElement> {
    pub a: E,
    pub b: E,
    pub c: E,
    pub l_vec: Vec<G>,
    pub r_vec: Vec<G>,

} #[cfg(feature = "to_bytes")] impl<'de, E, G> ToBytes<'de> for InnerProductProof<E, G>
    where E: Exponent + Serialize + Deserialize<'de>, G: GroupElement + Serialize + Deserialize<'de> {}

///An aggregated range proof over double-blinded commitments.
/// * `a`: commitment to the bit vectors of every value
/// * `s`: commitment to the blinding vectors
/// * `t1`, `t2`: double-blinded commitments to the proof polynomial coefficients
/// * `t_x1`, `t_x2`: the aggregated blinds of each channel at the challenge point
/// * `u`: the folded blind of `a` and `s`
/// * `inner_product_proof`: the folding argument transcript
///
///A proof carries no secrets and is immutable once assembled;
///altering any field makes verification fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeProof<E: Exponent, G: GroupElement> {
    pub a: G,
    pub s: G,
    pub t1: G,
    pub t2: G,
    pub t_x1: E,
    pub t_x2: E,
    pub u: E,
    pub inner_product_proof: InnerProductProof<E, G>,

} #[cfg(feature = "to_bytes")] impl<'de, E, G> ToBytes<'de> for RangeProof<E, G>
    where E: Exponent + Serialize + Deserialize<'de>, G: GroupElement + Serialize + Deserialize<'de> {}
