// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sanity checks for the random builders.

use h5ad_fixtures::dataset::Column;
use h5ad_fixtures::synth;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn dense_uniform_shape_and_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let x = synth::dense_uniform(&mut rng, 100, 20);
    assert_eq!(x.dim(), (100, 20));
    for &v in x.iter() {
        assert!((0.0..1.0).contains(&v), "value {v} outside [0, 1)");
    }
}

#[test]
fn scattered_uniform_caps_populated_cells() {
    let mut rng = StdRng::seed_from_u64(42);
    let x = synth::scattered_uniform(&mut rng, 100, 20, 100);
    assert_eq!(x.dim(), (100, 20));
    let nnz = x.iter().filter(|&&v| v != 0.0).count();
    assert!(nnz <= 100, "expected at most 100 populated cells, got {nnz}");
    // 100 draws over 2000 cells: collisions are rare, so most survive.
    assert!(nnz > 50, "suspiciously few populated cells: {nnz}");
    for &v in x.iter() {
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn seeded_builders_are_reproducible() {
    let a = synth::dense_uniform(&mut StdRng::seed_from_u64(7), 10, 5);
    let b = synth::dense_uniform(&mut StdRng::seed_from_u64(7), 10, 5);
    assert_eq!(a, b);

    let a = synth::scattered_uniform(&mut StdRng::seed_from_u64(7), 10, 5, 8);
    let b = synth::scattered_uniform(&mut StdRng::seed_from_u64(7), 10, 5, 8);
    assert_eq!(a, b);
}

#[test]
fn ids_are_zero_padded_and_ordered() {
    let gene_ids = synth::ids("gene", 20);
    assert_eq!(gene_ids.len(), 20);
    assert_eq!(gene_ids[0], "gene_000");
    assert_eq!(gene_ids[19], "gene_019");

    let barcode_ids = synth::ids("barcode", 100);
    assert_eq!(barcode_ids[0], "barcode_000");
    assert_eq!(barcode_ids[99], "barcode_099");
    let mut sorted = barcode_ids.clone();
    sorted.sort();
    assert_eq!(sorted, barcode_ids, "zero-padding keeps lexical order");
}

#[test]
fn var_frame_columns() {
    let mut rng = StdRng::seed_from_u64(1);
    let var = synth::var_frame(&mut rng, 20);
    assert_eq!(var.len(), 20);
    assert_eq!(var.index(), synth::ids("gene", 20).as_slice());

    let columns = var.columns();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].0, "genes");
    match &columns[0].1 {
        Column::Str(values) => assert_eq!(values.as_slice(), var.index()),
        other => panic!("expected string column, got {other:?}"),
    }
    assert_eq!(columns[1].0, "is_hvg");
    match &columns[1].1 {
        Column::Bool(flags) => assert_eq!(flags.len(), 20),
        other => panic!("expected bool column, got {other:?}"),
    }
}

#[test]
fn obs_frame_columns() {
    let mut rng = StdRng::seed_from_u64(1);
    let obs = synth::obs_frame(&mut rng, 100);
    assert_eq!(obs.len(), 100);
    assert_eq!(obs.index(), synth::ids("barcode", 100).as_slice());

    let columns = obs.columns();
    assert_eq!(columns.len(), 2);
    let expected = [("library", synth::LIBRARIES), ("batch", synth::BATCHES)];
    for ((name, column), (want_name, want_cats)) in columns.iter().zip(expected) {
        assert_eq!(name, want_name);
        match column {
            Column::Categorical { codes, categories } => {
                assert_eq!(categories.as_slice(), want_cats);
                assert_eq!(codes.len(), 100);
                assert!(codes.iter().all(|&c| c == 0 || c == 1));
            }
            other => panic!("expected categorical column, got {other:?}"),
        }
    }
}
