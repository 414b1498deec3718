/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ristretto instantiation of the proof algebra, plus curve functions and constants

#[cfg(feature = "to_bytes")]
use crate::errors::SerializationError;
#[cfg(feature = "to_bytes")]
use crate::tobytes::*;

use crate::algebra::{Exponent, GroupElement};
use crate::errors::RangeProofError;
use crate::types::Generators;

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    ristretto::{
        RistrettoPoint,
        CompressedRistretto,
        RistrettoBasepointTable
    }
};
//kept internal: re-exporting these would make every multiscalar call
//ambiguous with the `GroupElement` methods of the same name
use curve25519_dalek::traits::{Identity, MultiscalarMul, VartimeMultiscalarMul};
use rand::{thread_rng, Rng, CryptoRng, RngCore};
use sha2::{Sha512, Digest};

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &RistrettoBasepointTable = &constants::RISTRETTO_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: RistrettoPoint = constants::RISTRETTO_BASEPOINT_POINT;

//domains for deriving the default generator vectors
const G_VEC_DOMAIN: &[u8] = "lelantus_gv".as_bytes();
const H_VEC_DOMAIN: &[u8] = "lelantus_hv".as_bytes();

lazy_static! {
    ///The generator used to blind commitment randomness, derived by hashing `G`.
    pub static ref H1_POINT: RistrettoPoint = h1_point();
    ///The generator used to blind serial numbers, derived by hashing `H1_POINT`.
    pub static ref H2_POINT: RistrettoPoint = h2_point();
}

///get `H1`
fn h1_point() -> RistrettoPoint {
    return hash_to_point(&encode_point(&G_POINT));
}

///get `H2`
fn h2_point() -> RistrettoPoint {
    return hash_to_point(&encode_point(&*H1_POINT));
}

///Encode a point to a byte array for hashing purposes.
///
///Though possible, this is not intended to be reversible:
///if you wish to "decode" back to a point,
///then use the methods provided by `ToBytes` instead.
pub fn encode_point(point: &RistrettoPoint) -> [u8; 32] {
    return point.compress().to_bytes()
}

///Hash bytes to an elliptic curve point.
///
///The result has no known discrete log relation to any other point,
///which makes this suitable for deriving commitment generators.
pub fn hash_to_point(msg: &[u8]) -> RistrettoPoint {
    let mut hasher = Sha512::new();
    hasher.update(msg);
    return RistrettoPoint::from_uniform_bytes(
        hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length")
    );
}

///return a random scalar
pub fn random_scalar() -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    thread_rng().fill(&mut scalar_bytes[..]);
    return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
}

///return a random point on the curve
pub fn random_point() -> RistrettoPoint {
    return &random_scalar() * G;
}

///Deterministically derive a generator set of the given size.
///
///`g` is the curve basepoint, `h1`/`h2` are the shared blinding generators,
///and the vectors are derived by hashing a domain label with each index,
///so no discrete log relations between any two generators are known.
pub fn default_generators(size: usize) -> Result<Generators<RistrettoPoint>, RangeProofError> {
    let mut g_vec: Vec<RistrettoPoint> = Vec::with_capacity(size);
    let mut h_vec: Vec<RistrettoPoint> = Vec::with_capacity(size);
    for i in 0..size {
        let index = (i as u64).to_le_bytes();
        g_vec.push(hash_to_point(&[G_VEC_DOMAIN, &index].concat()));
        h_vec.push(hash_to_point(&[H_VEC_DOMAIN, &index].concat()));
    }
    return Generators::new(G_POINT, *H1_POINT, *H2_POINT, g_vec, h_vec);
}

impl Exponent for Scalar {
    fn zero() -> Self {
        return Scalar::zero();
    }

    fn one() -> Self {
        return Scalar::one();
    }

    fn from_u64(value: u64) -> Self {
        return Scalar::from(value);
    }

    fn from_bytes_mod_order(bytes: [u8; 32]) -> Self {
        return Scalar::from_bytes_mod_order(bytes);
    }

    fn inverse(&self) -> Self {
        debug_assert!(self != &Scalar::zero());
        return self.invert();
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 64];
        rng.fill_bytes(&mut scalar_bytes);
        return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
    }
}

impl GroupElement for RistrettoPoint {
    type Exponent = Scalar;

    const SERIALIZED_SIZE: usize = 32;

    fn identity() -> Self {
        return <RistrettoPoint as Identity>::identity();
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut point_bytes = [0u8; 64];
        rng.fill_bytes(&mut point_bytes);
        return RistrettoPoint::from_uniform_bytes(&point_bytes);
    }

    fn append_serialized(&self, buffer: &mut Vec<u8>) -> usize {
        buffer.extend_from_slice(&encode_point(self));
        return Self::SERIALIZED_SIZE;
    }

    fn multiscalar_mul(exponents: &[Scalar], points: &[Self]) -> Self {
        return <RistrettoPoint as MultiscalarMul>::multiscalar_mul(exponents, points);
    }

    fn vartime_multiscalar_mul(exponents: &[Scalar], points: &[Self]) -> Self {
        return <RistrettoPoint as VartimeMultiscalarMul>::vartime_multiscalar_mul(exponents, points);
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.reduce().to_bytes().to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(bytes) => {
                match Scalar::from_canonical_bytes(bytes) {
                    Some(scalar) => Ok(scalar),
                    None => Err(SerializationError::DecodingError)
                }
            },
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for RistrettoPoint {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.compress().to_bytes().to_vec());
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 32 {
            return Err(SerializationError::DecodingError)
        }

        return match CompressedRistretto::from_slice(bytes).decompress() {
            Some(point) => Ok(point),
            None => Err(SerializationError::DecodingError)
        };
    }
}
