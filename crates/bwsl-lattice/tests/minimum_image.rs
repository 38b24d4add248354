//! Lattice tables checked against brute-force reference geometry.

use bwsl_lattice::{
    Boundaries, BravaisKind, Lattice, LatticeConfig, CUBIC_LATTICE, SQUARE_LATTICE,
    TRIANGULAR_LATTICE,
};
use bwsl_test_utils::{
    brute_force_distance, brute_force_neighbors, brute_force_sk, checkerboard, hashed_occupations,
    uniform,
};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

// ── Distances ───────────────────────────────────────────────────

#[test]
fn square_16x16_matches_brute_force_minimum_image() {
    let l = Lattice::new(&SQUARE_LATTICE, &[16, 16], Boundaries::Closed).unwrap();
    let origin = l.grid().coordinates(0);
    for i in l.grid().sites() {
        let site = l.grid().coordinates(i);
        let expected = brute_force_distance(&SQUARE_LATTICE, &[16, 16], &origin, &site);
        assert!(
            (l.distance(0, i) - expected).abs() < TOL,
            "site {i}: {} != {expected}",
            l.distance(0, i)
        );
    }
    let corner = l.grid().index(&[15, 15]);
    assert!((l.distance(0, corner) - 2f64.sqrt()).abs() < TOL);
}

#[test]
fn every_pair_matches_brute_force_on_small_lattices() {
    let cases: [(BravaisKind, &[usize]); 4] = [
        (BravaisKind::Chain, &[9]),
        (BravaisKind::Square, &[3, 5]),
        (BravaisKind::Triangular, &[6, 6]),
        (BravaisKind::Cubic, &[3, 4, 3]),
    ];
    for (kind, size) in cases {
        let l = LatticeConfig::new(kind, size.to_vec()).build().unwrap();
        for a in l.grid().sites() {
            for b in l.grid().sites() {
                let expected = brute_force_distance(
                    kind.lattice(),
                    size,
                    &l.grid().coordinates(a),
                    &l.grid().coordinates(b),
                );
                assert!(
                    (l.distance(a, b) - expected).abs() < TOL,
                    "{kind} {size:?}: d({a}, {b}) = {} != {expected}",
                    l.distance(a, b)
                );
            }
        }
    }
}

#[test]
fn open_distances_are_plain_euclidean() {
    let l = Lattice::new(&TRIANGULAR_LATTICE, &[4, 5], Boundaries::Open).unwrap();
    for a in l.grid().sites() {
        for b in l.grid().sites() {
            let expected =
                TRIANGULAR_LATTICE.distance(&l.grid().coordinates(a), &l.grid().coordinates(b));
            assert!((l.distance(a, b) - expected).abs() < TOL);
        }
    }
}

// ── Neighbours ──────────────────────────────────────────────────

#[test]
fn neighbor_lists_match_brute_force() {
    for boundaries in [Boundaries::Open, Boundaries::Closed] {
        for (bravais, size) in [
            (&*SQUARE_LATTICE, vec![3, 4]),
            (&*TRIANGULAR_LATTICE, vec![4, 3]),
            (&*CUBIC_LATTICE, vec![2, 3, 3]),
        ] {
            let l = Lattice::new(bravais, &size, boundaries).unwrap();
            for i in l.grid().sites() {
                let mut got = l.neighbors(i).to_vec();
                got.sort_unstable();
                assert_eq!(
                    got,
                    brute_force_neighbors(bravais, &size, boundaries, i),
                    "{size:?} {boundaries} site {i}"
                );
            }
        }
    }
}

// ── Structure factor ────────────────────────────────────────────

#[test]
fn structure_factor_matches_direct_sum() {
    let l = Lattice::new(&TRIANGULAR_LATTICE, &[4, 4], Boundaries::Closed).unwrap();
    let occ: Vec<f64> = hashed_occupations(16, 11).into_iter().map(f64::from).collect();
    let sk = l.compute_sk(&occ, 1.5);
    let expected = brute_force_sk(&l, &occ, 1.5);
    for (k, (a, e)) in sk.iter().zip(&expected).enumerate() {
        assert!((a - e).abs() < TOL, "S({k}) = {a} != {e}");
    }
}

#[test]
fn structure_factor_sum_rule() {
    // sum_k S(k) = mult * sum_j n_j^2 / N for any occupation.
    for size in [[4usize, 4], [3, 5]] {
        let l = Lattice::new(&SQUARE_LATTICE, &size, Boundaries::Closed).unwrap();
        let n = l.num_sites();
        for occ in [uniform(n), checkerboard(l.grid())] {
            let total: f64 = l.compute_sk(&occ, 1.0).iter().sum();
            let expected = occ.iter().map(|x| x * x).sum::<f64>() / n as f64;
            assert!((total - expected).abs() < TOL, "{size:?}: {total} != {expected}");
        }
    }
}

// ── Properties ──────────────────────────────────────────────────

fn kind_and_size() -> impl Strategy<Value = (BravaisKind, Vec<usize>)> {
    prop_oneof![
        (1usize..12).prop_map(|n| (BravaisKind::Chain, vec![n])),
        (1usize..7, 1usize..7).prop_map(|(a, b)| (BravaisKind::Square, vec![a, b])),
        (1usize..7).prop_map(|n| (BravaisKind::Triangular, vec![n, n])),
        (1usize..4, 1usize..4, 1usize..4).prop_map(|(a, b, c)| (BravaisKind::Cubic, vec![a, b, c])),
    ]
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_reflexive(
        (kind, size) in kind_and_size(),
        open in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let boundaries = if open { Boundaries::Open } else { Boundaries::Closed };
        let l = LatticeConfig::new(kind, size).with_boundaries(boundaries).build().unwrap();
        let n = l.num_sites() as u64;
        let a = (seed % n) as usize;
        let b = (seed.wrapping_mul(6364136223846793005) % n) as usize;
        prop_assert!(l.distance(a, a).abs() < TOL);
        prop_assert!((l.distance(a, b) - l.distance(b, a)).abs() < TOL);
    }

    #[test]
    fn closed_coordination_is_gamma((kind, size) in kind_and_size()) {
        let l = LatticeConfig::new(kind, size).build().unwrap();
        for i in l.grid().sites() {
            prop_assert_eq!(l.coordination(i), kind.lattice().gamma());
        }
        prop_assert_eq!(l.num_momenta(), l.num_sites());
    }

    #[test]
    fn jumps_around_a_loop_sum_to_whole_windings(
        n in 2usize..9,
        laps in 1usize..4,
    ) {
        let l = LatticeConfig::new(BravaisKind::Chain, vec![n]).build().unwrap();
        let path: Vec<usize> = (0..=n * laps).map(|s| s % n).collect();
        let total: i64 = path.windows(2).map(|w| l.jump(w[0], w[1])[0]).sum();
        prop_assert_eq!(l.winding(&[total])[0], laps as i64);
    }
}
