//! Compressed sparse row representation of a dense matrix.

use ndarray::Array2;

/// A CSR matrix: nonzero values in row-major order plus the column index of
/// each value and per-row offsets into both vectors.
///
/// `indices` and `indptr` are `i32`, matching the on-disk dtype scipy uses
/// for matrices of this size.
#[derive(Debug, Clone)]
pub struct CsrMatrix {
    data: Vec<f64>,
    indices: Vec<i32>,
    indptr: Vec<i32>,
    n_rows: usize,
    n_cols: usize,
}

impl CsrMatrix {
    /// Compress a dense matrix, keeping every entry that is not exactly zero.
    pub fn from_dense(dense: &Array2<f64>) -> Self {
        let (n_rows, n_cols) = dense.dim();
        let mut data = Vec::new();
        let mut indices = Vec::new();
        let mut indptr = Vec::with_capacity(n_rows + 1);
        indptr.push(0);
        for row in dense.rows() {
            for (col, &value) in row.iter().enumerate() {
                if value != 0.0 {
                    data.push(value);
                    indices.push(col as i32);
                }
            }
            indptr.push(data.len() as i32);
        }
        Self {
            data,
            indices,
            indptr,
            n_rows,
            n_cols,
        }
    }

    /// (n_rows, n_cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn indices(&self) -> &[i32] {
        &self.indices
    }

    pub fn indptr(&self) -> &[i32] {
        &self.indptr
    }

    /// Expand back to a dense matrix. Inverse of [`CsrMatrix::from_dense`].
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));
        for row in 0..self.n_rows {
            let start = self.indptr[row] as usize;
            let end = self.indptr[row + 1] as usize;
            for k in start..end {
                dense[[row, self.indices[k] as usize]] = self.data[k];
            }
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn compress_and_expand() {
        let dense = array![[0.0, 1.5, 0.0], [2.0, 0.0, 3.0]];
        let csr = CsrMatrix::from_dense(&dense);
        assert_eq!(csr.shape(), (2, 3));
        assert_eq!(csr.nnz(), 3);
        assert_eq!(csr.data(), &[1.5, 2.0, 3.0]);
        assert_eq!(csr.indices(), &[1, 0, 2]);
        assert_eq!(csr.indptr(), &[0, 1, 3]);
        assert_eq!(csr.to_dense(), dense);
    }

    #[test]
    fn all_zero_matrix() {
        let dense = Array2::zeros((4, 2));
        let csr = CsrMatrix::from_dense(&dense);
        assert_eq!(csr.nnz(), 0);
        assert_eq!(csr.indptr(), &[0, 0, 0, 0, 0]);
        assert_eq!(csr.to_dense(), dense);
    }
}
