// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory annotated dataset: primary matrix, label frames, named layers.
//!
//! Mirrors the AnnData structure these fixtures are written as: `X` (dense
//! or CSR), `obs` and `var` dataframes keyed by an identifier index, and an
//! ordered set of layers parallel in shape to `X`. All dimension checks
//! happen here, at assembly time; the writer can assume a consistent object.

use ndarray::Array2;

use crate::csr::CsrMatrix;
use crate::error::{FixtureError, Result};

/// The primary data matrix, dense or CSR-compressed.
#[derive(Debug, Clone)]
pub enum Matrix {
    Dense(Array2<f64>),
    Csr(CsrMatrix),
}

impl Matrix {
    /// (n_obs, n_vars).
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Matrix::Dense(a) => a.dim(),
            Matrix::Csr(m) => m.shape(),
        }
    }
}

/// A single labeled column of a frame.
#[derive(Debug, Clone)]
pub enum Column {
    /// Plain string values.
    Str(Vec<String>),
    /// Boolean flags.
    Bool(Vec<bool>),
    /// Pandas-style categorical: per-row codes into a category vocabulary.
    Categorical {
        codes: Vec<i8>,
        categories: Vec<String>,
    },
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Str(v) => v.len(),
            Column::Bool(v) => v.len(),
            Column::Categorical { codes, .. } => codes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An index plus named columns, all of the same length.
///
/// Columns keep insertion order so the serialized `column-order` attribute
/// matches construction order.
#[derive(Debug, Clone)]
pub struct Frame {
    index: Vec<String>,
    columns: Vec<(String, Column)>,
}

impl Frame {
    pub fn new(index: Vec<String>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Append a column, rejecting any length that disagrees with the index.
    pub fn with_column(mut self, name: &str, column: Column) -> Result<Self> {
        if column.len() != self.index.len() {
            return Err(FixtureError::ShapeMismatch(format!(
                "column {name:?} has {} rows, frame index has {}",
                column.len(),
                self.index.len()
            )));
        }
        self.columns.push((name.to_string(), column));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn columns(&self) -> &[(String, Column)] {
        &self.columns
    }
}

/// An assembled annotated dataset, ready to serialize.
#[derive(Debug, Clone)]
pub struct AnnDataset {
    x: Matrix,
    obs: Frame,
    var: Frame,
    layers: Vec<(String, Matrix)>,
}

impl AnnDataset {
    /// Combine a matrix with its observation and variable frames.
    ///
    /// Frame lengths must match the matrix dimensions exactly.
    pub fn new(x: Matrix, obs: Frame, var: Frame) -> Result<Self> {
        let (n_obs, n_vars) = x.shape();
        if obs.len() != n_obs {
            return Err(FixtureError::ShapeMismatch(format!(
                "obs frame has {} rows, X has {n_obs}",
                obs.len()
            )));
        }
        if var.len() != n_vars {
            return Err(FixtureError::ShapeMismatch(format!(
                "var frame has {} rows, X has {n_vars} columns",
                var.len()
            )));
        }
        Ok(Self {
            x,
            obs,
            var,
            layers: Vec::new(),
        })
    }

    /// Attach a named auxiliary matrix of the same shape as `X`.
    pub fn add_layer(&mut self, name: &str, layer: Matrix) -> Result<()> {
        if self.layers.iter().any(|(n, _)| n == name) {
            return Err(FixtureError::DuplicateLayer(name.to_string()));
        }
        if layer.shape() != self.x.shape() {
            return Err(FixtureError::ShapeMismatch(format!(
                "layer {name:?} has shape {:?}, X has {:?}",
                layer.shape(),
                self.x.shape()
            )));
        }
        self.layers.push((name.to_string(), layer));
        Ok(())
    }

    pub fn x(&self) -> &Matrix {
        &self.x
    }

    pub fn obs(&self) -> &Frame {
        &self.obs
    }

    pub fn var(&self) -> &Frame {
        &self.var
    }

    pub fn layers(&self) -> &[(String, Matrix)] {
        &self.layers
    }

    /// (n_obs, n_vars) of the primary matrix.
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }
}
