// SPDX short identifier: Unlicense

#![allow(unused, unused_mut)]

use lelantus::{
    common::*,
    primitives::*
};

//<g_vec, a> + <h_vec, b> + u*<a, b>, written out longhand
fn combined_commitment(
    g_vec: &[RistrettoPoint], a: &[Scalar],
    h_vec: &[RistrettoPoint], b: &[Scalar],
    u: RistrettoPoint
) -> RistrettoPoint {
    let mut result = u * scalar_dot_product(a, b).unwrap();
    for i in 0..a.len() {
        result = result + g_vec[i] * a[i];
    }
    for i in 0..b.len() {
        result = result + h_vec[i] * b[i];
    }
    return result;
}

#[test]
fn challenge_test() {
    let p1 = random_point();
    let p2 = random_point();

    //same transcript, same challenge
    assert_eq!(get_x(&[p1, p2]), get_x(&[p1, p2]));
    assert_eq!(get_c(&p1), get_c(&p1));

    //order and content sensitive
    assert_ne!(get_x(&[p1, p2]), get_x(&[p2, p1]));
    assert_ne!(get_x(&[p1]), get_x(&[p2]));
    assert_ne!(get_c(&p1), get_c(&p2));

    //an empty transcript pins the challenge to one
    assert_eq!(get_x::<RistrettoPoint>(&[]), Scalar::one());
}

#[test]
fn exponent_algebra_test() {
    let five = Scalar::from_u64(5);
    assert_eq!(five.pow(3), Scalar::from(125u64));
    assert_eq!(five.pow(1), five);
    assert_eq!(five.pow(0), Scalar::one());
    assert_eq!(five.square(), Scalar::from(25u64));

    let x = random_scalar();
    assert_eq!(x * x.inverse(), Scalar::one());
    assert!(Scalar::zero().is_zero());
    assert!(!Scalar::one().is_zero());

    let p = random_point();
    assert_eq!(p + RistrettoPoint::identity(), p);
    assert_eq!(p - p, RistrettoPoint::identity());
}

#[test]
fn commitment_test() {
    let g = random_point();
    let h1 = random_point();
    let h2 = random_point();
    let m = random_scalar();
    let v = random_scalar();
    let r = random_scalar();

    assert_eq!(pedersen_commit(g, m, h1, r), g * m + h1 * r);
    assert_eq!(double_commit(g, m, h1, v, h2, r), g * m + h1 * v + h2 * r);

    //commit folds the blind onto g and the message vector onto h_vec
    let h_vec: Vec<RistrettoPoint> = (0..3).map(|_| random_point()).collect();
    let exponents: Vec<Scalar> = (0..3).map(|_| random_scalar()).collect();
    let mut expected = g * r;
    for i in 0..3 {
        expected = expected + h_vec[i] * exponents[i];
    }
    assert_eq!(commit(g, &h_vec, &exponents, r).unwrap(), expected);

    //an all-zero message leaves just the blind
    let zeroes = vec![Scalar::zero(); 3];
    assert_eq!(commit(g, &h_vec, &zeroes, r).unwrap(), g * r);

    //vector_commit is the two-sided version
    let g_vec: Vec<RistrettoPoint> = (0..3).map(|_| random_point()).collect();
    let l: Vec<Scalar> = (0..3).map(|_| random_scalar()).collect();
    let right: Vec<Scalar> = (0..3).map(|_| random_scalar()).collect();
    let mut expected = h1 * r;
    for i in 0..3 {
        expected = expected + g_vec[i] * l[i] + h_vec[i] * right[i];
    }
    assert_eq!(vector_commit(h1, r, &g_vec, &l, &h_vec, &right).unwrap(), expected);
}

#[test]
fn length_mismatch_test() {
    let points: Vec<RistrettoPoint> = (0..4).map(|_| random_point()).collect();
    let three: Vec<Scalar> = (0..3).map(|_| random_scalar()).collect();
    let four: Vec<Scalar> = (0..4).map(|_| random_scalar()).collect();

    assert!(commit(random_point(), &points, &three, random_scalar()).is_err());
    assert!(commit(random_point(), &points, &four, random_scalar()).is_ok());

    assert!(scalar_dot_product(&three, &four).is_err());
    assert!(scalar_dot_product(&four, &four).is_ok());

    assert!(vector_commit(random_point(), random_scalar(), &points, &three, &points, &four).is_err());
    assert!(vector_commit(random_point(), random_scalar(), &points, &four, &points, &three).is_err());
    assert!(vector_commit(random_point(), random_scalar(), &points, &four, &points, &four).is_ok());

    //folds only accept even-length vectors
    assert!(g_prime(&points[0..3], random_scalar()).is_err());
    assert!(h_prime(&points[0..3], random_scalar()).is_err());
    assert!(g_prime(&points, random_scalar()).is_ok());
}

#[test]
fn digit_conversion_test() {
    //positional digits recompose to the value
    for value in [0u64, 1, 37, 255, 701, u64::MAX] {
        let digits = convert_to_nal(value, 2, 64);
        assert_eq!(digits.len(), 64);
        let mut recomposed = 0u64;
        for i in 0..64 {
            recomposed += digits[i] << i;
        }
        assert_eq!(recomposed, value);
    }

    let digits: Vec<u64> = convert_to_nal(12345, 10, 5);
    assert_eq!(digits, vec!(5, 4, 3, 2, 1));

    //high digits are dropped when the value does not fit
    assert_eq!(convert_to_nal(255, 2, 4), vec!(1, 1, 1, 1));
    assert_eq!(convert_to_nal(0, 7, 3), vec!(0, 0, 0));
}

#[test]
fn sigma_conversion_test() {
    //5 in base 4 is (1, 1): two indicator blocks, then a padding block
    let sigma: Vec<Scalar> = convert_to_sigma(5, 4, 3);
    assert_eq!(sigma.len(), 12);
    let expected: Vec<u64> = vec!(0, 1, 0, 0,  0, 1, 0, 0,  1, 0, 0, 0);
    for i in 0..expected.len() {
        assert_eq!(sigma[i], Scalar::from(expected[i]));
    }

    //zero is all padding blocks
    let sigma: Vec<Scalar> = convert_to_sigma(0, 4, 2);
    let expected: Vec<u64> = vec!(1, 0, 0, 0,  1, 0, 0, 0);
    for i in 0..expected.len() {
        assert_eq!(sigma[i], Scalar::from(expected[i]));
    }

    //an oversized value grows the output instead of truncating
    let sigma: Vec<Scalar> = convert_to_sigma(16, 2, 3);
    assert_eq!(sigma.len(), 10);
}

#[test]
fn polynomial_factor_test() {
    //multiply out four factors (x_i + a_i*X) one at a time
    let factors: Vec<(Scalar, Scalar)> = (0..4)
        .map(|_| (random_scalar(), random_scalar()))
        .collect();

    let mut coefficients: Vec<Scalar> = vec!(Scalar::one());
    for (x, a) in &factors {
        new_factor(*x, *a, &mut coefficients);
    }
    assert_eq!(coefficients.len(), 5);

    //evaluating the expanded polynomial must match the factored form
    let point = random_scalar();
    let mut horner = Scalar::zero();
    for coefficient in coefficients.iter().rev() {
        horner = horner * point + coefficient;
    }
    let mut direct = Scalar::one();
    for (x, a) in &factors {
        direct *= x + a * point;
    }
    assert_eq!(horner, direct);
}

#[test]
fn folding_test() {
    let g_vec: Vec<RistrettoPoint> = (0..4).map(|_| random_point()).collect();
    let h_vec: Vec<RistrettoPoint> = (0..4).map(|_| random_point()).collect();
    let u = random_point();
    let a: Vec<Scalar> = (0..4).map(|_| random_scalar()).collect();
    let b: Vec<Scalar> = (0..4).map(|_| random_scalar()).collect();

    let p = combined_commitment(&g_vec, &a, &h_vec, &b, u);

    //one folding round, exactly as the inner product argument plays it
    let (a_lo, a_hi) = a.split_at(2);
    let (b_lo, b_hi) = b.split_at(2);
    let (g_lo, g_hi) = g_vec.split_at(2);
    let (h_lo, h_hi) = h_vec.split_at(2);

    let l = combined_commitment(g_hi, a_lo, h_lo, b_hi, u);
    let r = combined_commitment(g_lo, a_hi, h_hi, b_lo, u);

    //any nonzero challenge works here, not just hashed ones
    let x = random_scalar();
    let x_inverse = x.inverse();

    let mut a_folded: Vec<Scalar> = Vec::new();
    let mut b_folded: Vec<Scalar> = Vec::new();
    for i in 0..2 {
        a_folded.push(a_lo[i] * x + a_hi[i] * x_inverse);
        b_folded.push(b_lo[i] * x_inverse + b_hi[i] * x);
    }
    let g_folded = g_prime(&g_vec, x).unwrap();
    let h_folded = h_prime(&h_vec, x).unwrap();

    let folded = combined_commitment(&g_folded, &a_folded, &h_folded, &b_folded, u);
    assert_eq!(folded, p_prime(p, l, r, x));
}

#[test]
fn delta_test() {
    let n = 4;
    let m = 3;
    let y = random_scalar();
    let z = random_scalar();

    //recompute the definition term by term
    let mut y_term = Scalar::zero();
    for k in 0..(n * m) {
        y_term += y.pow(k as u64);
    }
    let mut z_term = Scalar::zero();
    for j in 0..m {
        z_term += z.pow(3 + j as u64) * Scalar::from((1u64 << n) - 1);
    }
    let expected = (z - z.square()) * y_term - z_term;

    assert_eq!(delta::<Scalar>(y, z, n, m), expected);
}

#[test]
fn generator_test() {
    //derivation is deterministic and collision free
    let generators_a = default_generators(16).unwrap();
    let generators_b = default_generators(16).unwrap();
    assert_eq!(generators_a, generators_b);
    assert_eq!(generators_a.size(), 16);
    assert_ne!(generators_a.g_vec[0], generators_a.g_vec[1]);
    assert_ne!(generators_a.g_vec[0], generators_a.h_vec[0]);
    assert_ne!(generators_a.g, generators_a.h1);
    assert_ne!(*H1_POINT, *H2_POINT);

    let generators: Generators<RistrettoPoint> = Generators::random(8).unwrap();
    assert_eq!(generators.size(), 8);

    //empty or mismatched sets are refused
    assert!(Generators::<RistrettoPoint>::random(0).is_err());
    assert!(Generators::new(
        random_point(), random_point(), random_point(),
        vec!(random_point()), Vec::new()
    ).is_err());
}

#[cfg(feature = "to_bytes")]
#[test]
fn serialization_test() {
    let p = random_point();
    let bytes = p.to_bytes().unwrap();
    assert_eq!(bytes.len(), 32);
    assert_eq!(RistrettoPoint::from_bytes(&bytes).unwrap(), p);
    //a wrong-length slice is refused
    assert!(RistrettoPoint::from_bytes(&bytes[0..31]).is_err());

    let x = random_scalar();
    let bytes = ToBytes::to_bytes(&x).unwrap();
    assert_eq!(Scalar::from_bytes(&bytes).unwrap(), x);
    //non-canonical scalar encodings are refused
    assert!(Scalar::from_bytes(&[0xffu8; 32]).is_err());

    let generators = default_generators(4).unwrap();
    let bytes = generators.to_bytes().unwrap();
    assert_eq!(Generators::<RistrettoPoint>::from_bytes(&bytes).unwrap(), generators);
}
