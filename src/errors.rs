/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Rangeproof errors
#[derive(Debug, Clone)]
pub enum RangeProofError {
    ///The given proof or parameters are malformed in some way:
    ///mismatched lengths, an empty batch, or a generator count
    ///that doesn't match `n * m` or isn't a power of two.
    Malformed,
    ///A given value is not in the valid range (0 <= `x` < 2<sup>`n`</sup>).
    OutOfRange,
    ///A derived challenge was zero, which has no inverse.
    ///The chance of this happening honestly is about 2<sup>-252</sup>.
    ZeroChallenge,

} impl Display for RangeProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::Malformed => "Malformed proof or parameters.",
            Self::OutOfRange => "Value is out of range.",
            Self::ZeroChallenge => "A derived challenge was zero.",
        })
    }

} impl Error for RangeProofError {}
