//! Label-frame builders for the fixture datasets.
//!
//! The column vocabulary is fixed: variables carry a `genes` identifier
//! column and an `is_hvg` flag; observations carry `library` and `batch`
//! categoricals, each over a two-element category set.

use rand::Rng;

use crate::dataset::{Column, Frame};
use crate::error::Result;

/// Category set for the `library` observation column.
pub const LIBRARIES: [&str; 2] = ["libA", "libB"];
/// Category set for the `batch` observation column.
pub const BATCHES: [&str; 2] = ["batch1", "batch2"];

/// Zero-padded identifier sequence: `{prefix}_000`, `{prefix}_001`, ...
pub fn ids(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}_{i:03}")).collect()
}

/// One independent fair coin flip per row.
fn random_flags<R: Rng>(rng: &mut R, n: usize) -> Column {
    Column::Bool((0..n).map(|_| rng.gen_bool(0.5)).collect())
}

/// A categorical column with uniform independent draws from `categories`.
fn random_categorical<R: Rng>(rng: &mut R, categories: &[&str], n: usize) -> Column {
    let codes = (0..n)
        .map(|_| rng.gen_range(0..categories.len()) as i8)
        .collect();
    Column::Categorical {
        codes,
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// The per-variable frame: indexed by `gene_000`.. with a `genes` column
/// repeating the index and a random `is_hvg` flag.
pub fn var_frame<R: Rng>(rng: &mut R, n_vars: usize) -> Frame {
    let gene_ids = ids("gene", n_vars);
    build_var_frame(rng, gene_ids).expect("columns sized from the index")
}

fn build_var_frame<R: Rng>(rng: &mut R, gene_ids: Vec<String>) -> Result<Frame> {
    let n_vars = gene_ids.len();
    Frame::new(gene_ids.clone())
        .with_column("genes", Column::Str(gene_ids))?
        .with_column("is_hvg", random_flags(rng, n_vars))
}

/// The per-observation frame: indexed by `barcode_000`.. with random
/// `library` and `batch` categoricals.
pub fn obs_frame<R: Rng>(rng: &mut R, n_obs: usize) -> Frame {
    let barcode_ids = ids("barcode", n_obs);
    build_obs_frame(rng, barcode_ids).expect("columns sized from the index")
}

fn build_obs_frame<R: Rng>(rng: &mut R, barcode_ids: Vec<String>) -> Result<Frame> {
    let n_obs = barcode_ids.len();
    Frame::new(barcode_ids)
        .with_column("library", random_categorical(rng, &LIBRARIES, n_obs))?
        .with_column("batch", random_categorical(rng, &BATCHES, n_obs))
}
