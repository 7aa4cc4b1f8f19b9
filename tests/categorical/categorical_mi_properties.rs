// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property checks on randomly generated corpora.

use approx::assert_abs_diff_eq;
use coinfo::estimators::mutual_information::{MutualInformation, compute_mutual_information};
use coinfo::estimators::traits::GlobalValue;
use rstest::rstest;

use crate::test_helpers::{generate_correlated_pairs, generate_random_pairs};

#[rstest]
#[case(generate_random_pairs(100, 5, 5, 42))]
#[case(generate_random_pairs(500, 3, 7, 43))]
#[case(generate_correlated_pairs(200, 4, 0.8, 44))]
#[case(generate_correlated_pairs(1000, 6, 0.3, 45))]
fn entropy_identity_holds(#[case] pairs: Vec<(i32, i32)>) {
    let est = MutualInformation::new_categorical(&pairs).unwrap();

    // I(X;Y) from the expectation form vs. H(X) + H(Y) - H(X,Y).
    let i_expectation = est.global_value();
    let i_entropies = est.mutual_information_from_entropies();
    assert_abs_diff_eq!(i_expectation, i_entropies, epsilon = 1e-6);
}

#[rstest]
#[case(generate_random_pairs(50, 2, 2, 46))]
#[case(generate_random_pairs(300, 10, 4, 47))]
#[case(generate_correlated_pairs(150, 5, 0.0, 48))]
#[case(generate_correlated_pairs(150, 5, 1.0, 49))]
fn mutual_information_is_non_negative(#[case] pairs: Vec<(i32, i32)>) {
    let est = MutualInformation::new_categorical(&pairs).unwrap();
    assert!(est.global_value() >= -1e-9);
}

#[rstest]
#[case(generate_random_pairs(120, 4, 6, 50))]
#[case(generate_correlated_pairs(400, 3, 0.6, 51))]
fn swapping_variables_transposes_the_estimate(#[case] pairs: Vec<(i32, i32)>) {
    let swapped: Vec<(i32, i32)> = pairs.iter().map(|&(x, y)| (y, x)).collect();

    let forward = compute_mutual_information(&pairs).unwrap();
    let reverse = compute_mutual_information(&swapped).unwrap();

    // Scalars: I is symmetric, the marginal entropies trade places.
    assert_abs_diff_eq!(forward.i_xy, reverse.i_xy, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.hx, reverse.hy, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.hy, reverse.hx, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.hxy, reverse.hxy, epsilon = 1e-12);

    // Matrices: the reverse run sees the transposed joint and PMI.
    assert_eq!(forward.joint.dim().0, reverse.joint.dim().1);
    for ((i, j), &p) in forward.joint.indexed_iter() {
        assert_abs_diff_eq!(p, reverse.joint[[j, i]], epsilon = 1e-15);
        assert_abs_diff_eq!(forward.pmi[[i, j]], reverse.pmi[[j, i]], epsilon = 1e-12);
    }
}

#[test]
fn uniform_cartesian_product_is_independent() {
    // Every (x, y) combination exactly once: the empirical variables are
    // independent and I must vanish.
    let xs = ["a", "b", "c"];
    let ys = ["u", "v", "w", "z"];
    let pairs: Vec<(&str, &str)> = xs
        .iter()
        .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
        .collect();

    let summary = compute_mutual_information(&pairs).unwrap();
    assert_abs_diff_eq!(summary.i_xy, 0.0, epsilon = 1e-9);
    // Independence also means every PMI cell is zero.
    for &v in summary.pmi.iter() {
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-9);
    }
}

#[rstest]
#[case(2, 5)]
#[case(4, 3)]
fn repeated_cartesian_product_stays_independent(#[case] x_states: i32, #[case] repeats: usize) {
    // Uniform counts larger than one change nothing about independence.
    let mut pairs = Vec::new();
    for _ in 0..repeats {
        for x in 0..x_states {
            for y in 0..3 {
                pairs.push((x, y));
            }
        }
    }

    let summary = compute_mutual_information(&pairs).unwrap();
    assert_abs_diff_eq!(summary.i_xy, 0.0, epsilon = 1e-9);
}
