//! Lattice invariant test helpers.
//!
//! These functions verify the geometric and bookkeeping invariants every
//! [`Lattice`] must satisfy whatever its Bravais lattice, extents or
//! boundary condition. Reused across the unit tests of this crate.

use crate::lattice::Lattice;
use indexmap::IndexSet;

const TOL: f64 = 1e-9;

/// Assert that `index(coordinates(i)) == i` and that coordinates are unique.
pub fn assert_index_round_trip(lattice: &Lattice) {
    let grid = lattice.grid();
    let mut seen = IndexSet::new();
    for i in grid.sites() {
        let c = grid.coordinates(i);
        assert!(grid.is_on_grid(&c), "coordinates({i}) = {c:?} off grid");
        assert_eq!(grid.index(&c), i, "index(coordinates({i})) != {i}");
        assert!(seen.insert(c.clone()), "coordinates({i}) = {c:?} repeated");
    }
    assert_eq!(seen.len(), lattice.num_sites());
}

/// Assert that `distance(a, a) == 0` for all sites.
pub fn assert_distance_reflexive(lattice: &Lattice) {
    for a in lattice.grid().sites() {
        let d = lattice.distance(a, a);
        assert!(d.abs() < TOL, "distance({a}, {a}) = {d}, expected 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all site pairs.
pub fn assert_distance_symmetric(lattice: &Lattice) {
    let sites = lattice.grid().sites();
    for a in sites.clone() {
        for b in sites.clone() {
            let dab = lattice.distance(a, b);
            let dba = lattice.distance(b, a);
            assert!(
                (dab - dba).abs() < TOL,
                "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}"
            );
        }
    }
}

/// Assert that `distance(a, b)` is the length of `vector(a, b)`.
pub fn assert_distance_matches_vector(lattice: &Lattice) {
    let sites = lattice.grid().sites();
    for a in sites.clone() {
        for b in sites.clone() {
            let v = lattice.vector(a, b);
            let len = bwsl_core::norm(&v);
            let d = lattice.distance(a, b);
            assert!((len - d).abs() < TOL, "|vector({a}, {b})| = {len} != {d}");
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(lattice: &Lattice) {
    let sites = lattice.grid().sites();
    for a in sites.clone() {
        for b in sites.clone() {
            for c in sites.clone() {
                let dac = lattice.distance(a, c);
                let dab = lattice.distance(a, b);
                let dbc = lattice.distance(b, c);
                assert!(
                    dac <= dab + dbc + TOL,
                    "triangle inequality: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that `b in neighbors(a)` implies `a in neighbors(b)`.
pub fn assert_neighbors_symmetric(lattice: &Lattice) {
    for a in lattice.grid().sites() {
        for &b in lattice.neighbors(a) {
            assert!(
                lattice.are_neighbors(b, a),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Assert the coordination bound: exactly `gamma` under closed boundaries,
/// at most `gamma` under open ones.
pub fn assert_coordination_bounded(lattice: &Lattice) {
    for a in lattice.grid().sites() {
        let z = lattice.coordination(a);
        if lattice.boundaries().is_closed() {
            assert_eq!(z, lattice.gamma(), "coordination({a}) under closed boundaries");
        } else {
            assert!(z <= lattice.gamma(), "coordination({a}) = {z} > {}", lattice.gamma());
        }
    }
}

/// Assert that pair indices enumerate every ordered pair exactly once.
pub fn assert_pair_index_bijective(lattice: &Lattice) {
    let grid = lattice.grid();
    let mut seen = IndexSet::new();
    for a in grid.sites() {
        for b in grid.sites() {
            let p = grid.pair_index(a, b);
            assert!(p < grid.num_pairs(), "pair_index({a}, {b}) = {p} out of range");
            assert_eq!(grid.individual_indices(p), (a, b));
            assert!(seen.insert(p), "pair_index({a}, {b}) = {p} repeated");
        }
    }
    assert_eq!(seen.len(), grid.num_pairs());
}

/// Assert that one momentum exists per site under closed boundaries and
/// none under open ones.
pub fn assert_momenta_cardinality(lattice: &Lattice) {
    let expected = if lattice.boundaries().is_closed() {
        lattice.num_sites()
    } else {
        0
    };
    assert_eq!(lattice.num_momenta(), expected);
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(lattice: &Lattice) {
    assert_index_round_trip(lattice);
    assert_distance_reflexive(lattice);
    assert_distance_symmetric(lattice);
    assert_distance_matches_vector(lattice);
    assert_distance_triangle_inequality(lattice);
    assert_neighbors_symmetric(lattice);
    assert_coordination_bounded(lattice);
    assert_pair_index_bijective(lattice);
    assert_momenta_cardinality(lattice);
}
