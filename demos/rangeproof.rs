// SPDX short identifier: Unlicense

use lelantus::{
    curve::{
        Scalar,
        RistrettoPoint,
        random_scalar,
        default_generators
    },
    primitives::double_commit,
    rangeproof::{
        RangeProver,
        RangeVerifier,
        MAX_BIT_RANGE
    }
};

fn main() {
    //Derive a shared generator set from the fixed base point.
    //Both sides must agree on it: here 64 bits per value, 4 values.
    let generators = default_generators(MAX_BIT_RANGE * 4)
        .expect("Real software should have proper error handling.");

    //values of the commitments (in atomic units)
    let values: Vec<u64> = vec!(123456789, 2222222, 8, 69420);
    //Each value carries a serial number and a blinding factor.
    //The commitment opens as g*value + h1*random + h2*serial,
    //so the value stays hidden behind two independent blinds.
    let serials: Vec<Scalar> = (0..4).map(|_| random_scalar()).collect();
    let randoms: Vec<Scalar> = (0..4).map(|_| random_scalar()).collect();

    let commitments: Vec<RistrettoPoint> = (0..4).map(|j| double_commit(
        generators.g, Scalar::from(values[j]),
        generators.h1, randoms[j],
        generators.h2, serials[j]
    )).collect();

    //Create one aggregated proof that every committed value
    //is a valid 64-bit integer (between 0 and 2^64 - 1).
    //This example proves 4 values, but any power of two works.
    let prover = RangeProver::new(&generators, MAX_BIT_RANGE)
        .expect("Real software should have proper error handling.");
    let proof = prover.batch_proof(&values, &serials, &randoms)
        .expect("Real software should have proper error handling.");

    //Verify the proof against the commitments
    let verifier = RangeVerifier::new(&generators, MAX_BIT_RANGE)
        .expect("Real software should have proper error handling.");
    assert!(verifier.verify_batch(&commitments, &proof).unwrap());

    //A proof only speaks for its own commitments.
    //Against any other set it simply reports false instead of erroring.
    let shuffled: Vec<RistrettoPoint> = commitments.iter().rev().cloned().collect();
    assert!(!verifier.verify_batch(&shuffled, &proof).unwrap());
}
