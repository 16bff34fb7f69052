// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # h5ad-fixtures
//!
//! Generators for sample single-cell `.h5ad` files, intended as test
//! fixtures for AnnData readers.
//!
//! Three binaries produce three fixture flavors over a fixed 100×20
//! observations × variables grid:
//!
//! | Binary | Primary matrix `X` | Layers |
//! |--------|--------------------|--------|
//! | `gen_dense_h5ad` | dense, uniform [0, 1) | none |
//! | `gen_compressed_h5ad` | CSR, ≤ 100 scattered nonzeros | none |
//! | `gen_layers_h5ad` | dense, uniform [0, 1) | `log1p`, `sqrt` |
//!
//! Each binary takes a single positional argument, the output path, and
//! prints a one-line confirmation on success.
//!
//! ## Quick Start
//!
//! ```no_run
//! use h5ad_fixtures::dataset::{AnnDataset, Matrix};
//! use h5ad_fixtures::synth;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let x = synth::dense_uniform(&mut rng, 100, 20);
//! let obs = synth::obs_frame(&mut rng, 100);
//! let var = synth::var_frame(&mut rng, 20);
//! let adata = AnnDataset::new(Matrix::Dense(x), obs, var).unwrap();
//! h5ad_fixtures::h5ad::write(&adata, "fixture.h5ad").unwrap();
//! ```
//!
//! The on-disk layout follows the AnnData v0.8 encoding for the subset
//! these fixtures use: `X` as a dense array or `csr_matrix` group, `obs`
//! and `var` as dataframe groups with `_index`, string, bool, and
//! categorical columns, and `layers` as a group of dense arrays. All HDF5
//! work is delegated to `hdf5-metno`.

pub mod cli;
pub mod csr;
pub mod dataset;
pub mod error;
pub mod h5ad;
pub mod synth;

pub use error::{FixtureError, Result};
