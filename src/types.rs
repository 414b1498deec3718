/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::tobytes::*;
use crate::algebra::GroupElement;
use crate::errors::RangeProofError;

use rand::thread_rng;

///The generator set shared by provers and verifiers.
///
///`g` commits to values, `h1` blinds commitment randomness, and `h2` blinds
///serial numbers, so a value commitment takes the form
///`g*v + h1*random + h2*serial`. The two vectors commit to the bit
///decomposition of the values and must have equal, nonzero length.
///
///All parties must use the same generator set:
///a proof made under one set will not verify under another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Generators<G: GroupElement> {
    pub g: G,
    pub h1: G,
    pub h2: G,
    pub g_vec: Vec<G>,
    pub h_vec: Vec<G>,

} impl<G: GroupElement> Generators<G> {
    ///Bundle a generator set, checking that the vectors have equal, nonzero length.
    pub fn new(g: G, h1: G, h2: G, g_vec: Vec<G>, h_vec: Vec<G>) -> Result<Self, RangeProofError> {
        if g_vec.is_empty() || g_vec.len() != h_vec.len() {
            return Err(RangeProofError::Malformed)
        }
        return Ok(Self{g, h1, h2, g_vec, h_vec})
    }

    ///Sample a fresh, uniformly random generator set of the given size.
    pub fn random(size: usize) -> Result<Self, RangeProofError> {
        let mut rng = thread_rng();
        let mut g_vec: Vec<G> = Vec::with_capacity(size);
        let mut h_vec: Vec<G> = Vec::with_capacity(size);
        for _ in 0..size {
            g_vec.push(G::random(&mut rng));
            h_vec.push(G::random(&mut rng));
        }
        return Self::new(
            G::random(&mut rng),
            G::random(&mut rng),
            G::random(&mut rng),
            g_vec, h_vec
        )
    }

    ///The length of the generator vectors.
    ///This is the total number of bits provable under this set.
    pub fn size(&self) -> usize {
        return self.g_vec.len()
    }

} #[cfg(feature = "to_bytes")] impl<'a, G: GroupElement + Serialize + Deserialize<'a>> ToBytes<'a> for Generators<G> {}
