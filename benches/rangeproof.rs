// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;

const AGGREGATION_SIZES: [usize; 5] = [1, 2, 4, 8, 16];

use lelantus::{
    common::*,
    primitives::double_commit,
    rangeproof::{
        RangeProver,
        RangeVerifier,
        MAX_BIT_RANGE
    }
};

fn rangeproof_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lelantus range proof");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    //prove
    for m in AGGREGATION_SIZES {
        let generators: Generators<RistrettoPoint> = Generators::random(MAX_BIT_RANGE * m).unwrap();
        let prover = RangeProver::new(&generators, MAX_BIT_RANGE).unwrap();

        let mut values: Vec<u64> = Vec::new();
        let mut serials: Vec<Scalar> = Vec::new();
        let mut randoms: Vec<Scalar> = Vec::new();
        for j in 0..m {
            values.push(1234567890 + j as u64);
            serials.push(random_scalar());
            randoms.push(random_scalar());
        }

        let params = (values, serials, randoms);
        group.bench_with_input(BenchmarkId::new("prove", format!("Aggregation size: {m}")), &params,
            |b, (values, serials, randoms)| b.iter(|| {
                prover.batch_proof(values, serials, randoms)
            }));
    }

    //verify
    for m in AGGREGATION_SIZES {
        let generators: Generators<RistrettoPoint> = Generators::random(MAX_BIT_RANGE * m).unwrap();
        let prover = RangeProver::new(&generators, MAX_BIT_RANGE).unwrap();
        let verifier = RangeVerifier::new(&generators, MAX_BIT_RANGE).unwrap();

        let mut values: Vec<u64> = Vec::new();
        let mut serials: Vec<Scalar> = Vec::new();
        let mut randoms: Vec<Scalar> = Vec::new();
        let mut commitments: Vec<RistrettoPoint> = Vec::new();
        for j in 0..m {
            values.push(1234567890 + j as u64);
            serials.push(random_scalar());
            randoms.push(random_scalar());
            commitments.push(double_commit(
                generators.g, Scalar::from(values[j]),
                generators.h1, randoms[j],
                generators.h2, serials[j]
            ));
        }
        let proof = prover.batch_proof(&values, &serials, &randoms).unwrap();

        let params = (commitments, proof);
        group.bench_with_input(BenchmarkId::new("verify", format!("Aggregation size: {m}")), &params,
            |b, (commitments, proof)| b.iter(|| {
                black_box(verifier.verify_batch(commitments, proof).unwrap())
            }));
    }
}

criterion_group!(rangeproofs, rangeproof_benchmark);
criterion_main!(rangeproofs);
