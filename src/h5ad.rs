// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialization of an [`AnnDataset`] to the `.h5ad` on-disk layout.
//!
//! Writes the AnnData v0.8 encoding for the subset these fixtures use:
//!
//! - `X`: dense f64 dataset, or a `csr_matrix` group holding
//!   `data`/`indices`/`indptr` plus a `shape` attribute
//! - `obs`, `var`: dataframe groups with a `_index` dataset, a
//!   `column-order` attribute, and string / bool / categorical columns
//!   (categoricals are subgroups with `categories` and `codes`)
//! - `layers`: a group of dense f64 datasets parallel to `X`
//!
//! Every object carries the `encoding-type`/`encoding-version` attribute
//! pair the Python `anndata` package writes, so the files also open as
//! regular AnnData objects. Byte-level storage is `hdf5-metno`'s concern.

use std::path::Path;
use std::str::FromStr;

use hdf5_metno::types::VarLenUnicode;
use hdf5_metno::{File, Group, Location};
use ndarray::{Array1, Array2, arr1};

use crate::csr::CsrMatrix;
use crate::dataset::{AnnDataset, Column, Frame, Matrix};
use crate::error::{FixtureError, Result};

/// Write `adata` to a new file at `path`.
///
/// Any existing file at `path` is truncated. Errors from the HDF5 layer are
/// propagated unchanged inside [`FixtureError::Hdf5`].
pub fn write<P: AsRef<Path>>(adata: &AnnDataset, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_str_attr(&file, "encoding-type", "anndata")?;
    write_str_attr(&file, "encoding-version", "0.1.0")?;

    write_matrix(&file, "X", adata.x())?;
    log::debug!("wrote X with shape {:?}", adata.shape());

    write_frame(&file, "obs", adata.obs())?;
    write_frame(&file, "var", adata.var())?;

    if !adata.layers().is_empty() {
        let group = file.create_group("layers")?;
        for (name, layer) in adata.layers() {
            write_matrix(&group, name, layer)?;
        }
        log::debug!("wrote {} layer(s)", adata.layers().len());
    }

    Ok(())
}

fn write_matrix(parent: &Group, name: &str, matrix: &Matrix) -> Result<()> {
    match matrix {
        Matrix::Dense(array) => write_dense(parent, name, array),
        Matrix::Csr(csr) => write_csr(parent, name, csr),
    }
}

fn write_dense(parent: &Group, name: &str, array: &Array2<f64>) -> Result<()> {
    let ds = parent.new_dataset_builder().with_data(array).create(name)?;
    write_str_attr(&ds, "encoding-type", "array")?;
    write_str_attr(&ds, "encoding-version", "0.2.0")?;
    Ok(())
}

fn write_csr(parent: &Group, name: &str, csr: &CsrMatrix) -> Result<()> {
    let group = parent.create_group(name)?;
    write_str_attr(&group, "encoding-type", "csr_matrix")?;
    write_str_attr(&group, "encoding-version", "0.1.0")?;

    let (n_rows, n_cols) = csr.shape();
    let shape = arr1(&[n_rows as i64, n_cols as i64]);
    group.new_attr_builder().with_data(&shape).create("shape")?;

    group
        .new_dataset_builder()
        .with_data(csr.data())
        .create("data")?;
    group
        .new_dataset_builder()
        .with_data(csr.indices())
        .create("indices")?;
    group
        .new_dataset_builder()
        .with_data(csr.indptr())
        .create("indptr")?;
    log::debug!("wrote {name} as csr with {} stored entries", csr.nnz());
    Ok(())
}

fn write_frame(parent: &Group, name: &str, frame: &Frame) -> Result<()> {
    let group = parent.create_group(name)?;
    write_str_attr(&group, "encoding-type", "dataframe")?;
    write_str_attr(&group, "encoding-version", "0.2.0")?;
    write_str_attr(&group, "_index", "_index")?;
    let order: Vec<&str> = frame.columns().iter().map(|(n, _)| n.as_str()).collect();
    write_str_vec_attr(&group, "column-order", &order)?;

    write_string_array(&group, "_index", frame.index())?;
    for (col_name, column) in frame.columns() {
        match column {
            Column::Str(values) => write_string_array(&group, col_name, values)?,
            Column::Bool(flags) => {
                let ds = group
                    .new_dataset_builder()
                    .with_data(flags.as_slice())
                    .create(col_name.as_str())?;
                write_str_attr(&ds, "encoding-type", "array")?;
                write_str_attr(&ds, "encoding-version", "0.2.0")?;
            }
            Column::Categorical { codes, categories } => {
                write_categorical(&group, col_name, codes, categories)?;
            }
        }
    }
    Ok(())
}

/// Categorical columns are stored as a subgroup holding the category
/// vocabulary and the per-row codes into it.
fn write_categorical(
    group: &Group,
    name: &str,
    codes: &[i8],
    categories: &[String],
) -> Result<()> {
    let sub = group.create_group(name)?;
    write_str_attr(&sub, "encoding-type", "categorical")?;
    write_str_attr(&sub, "encoding-version", "0.2.0")?;
    sub.new_attr::<bool>()
        .create("ordered")?
        .write_scalar(&false)?;

    write_string_array(&sub, "categories", categories)?;
    let ds = sub.new_dataset_builder().with_data(codes).create("codes")?;
    write_str_attr(&ds, "encoding-type", "array")?;
    write_str_attr(&ds, "encoding-version", "0.2.0")?;
    Ok(())
}

fn write_string_array<S: AsRef<str>>(group: &Group, name: &str, values: &[S]) -> Result<()> {
    let unicode: Vec<VarLenUnicode> = values
        .iter()
        .map(|s| vlu(s.as_ref()))
        .collect::<Result<_>>()?;
    let ds = group
        .new_dataset_builder()
        .with_data(&Array1::from(unicode))
        .create(name)?;
    write_str_attr(&ds, "encoding-type", "string-array")?;
    write_str_attr(&ds, "encoding-version", "0.2.0")?;
    Ok(())
}

fn write_str_attr(loc: &Location, name: &str, value: &str) -> Result<()> {
    let attr = loc.new_attr::<VarLenUnicode>().create(name)?;
    attr.write_scalar(&vlu(value)?)?;
    Ok(())
}

fn write_str_vec_attr(loc: &Location, name: &str, values: &[&str]) -> Result<()> {
    let unicode: Vec<VarLenUnicode> = values.iter().map(|s| vlu(s)).collect::<Result<_>>()?;
    loc.new_attr_builder()
        .with_data(&Array1::from(unicode))
        .create(name)?;
    Ok(())
}

fn vlu(s: &str) -> Result<VarLenUnicode> {
    VarLenUnicode::from_str(s)
        .map_err(|e| FixtureError::InvalidString(s.to_string(), e.to_string()))
}
