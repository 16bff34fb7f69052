//! Random matrix builders.

use ndarray::Array2;
use rand::Rng;

/// A dense (n_obs × n_vars) matrix with every cell uniform in [0, 1).
pub fn dense_uniform<R: Rng>(rng: &mut R, n_obs: usize, n_vars: usize) -> Array2<f64> {
    let mut data = Array2::zeros((n_obs, n_vars));
    for cell in data.iter_mut() {
        *cell = rng.gen_range(0.0..1.0);
    }
    data
}

/// A mostly-zero (n_obs × n_vars) matrix with `n_entries` uniform [0, 1)
/// values scattered at random positions.
///
/// Positions are drawn with replacement: a collision overwrites the earlier
/// value, so the populated count can end up below `n_entries`.
pub fn scattered_uniform<R: Rng>(
    rng: &mut R,
    n_obs: usize,
    n_vars: usize,
    n_entries: usize,
) -> Array2<f64> {
    let mut data = Array2::zeros((n_obs, n_vars));
    for _ in 0..n_entries {
        let i = rng.gen_range(0..n_obs);
        let j = rng.gen_range(0..n_vars);
        data[[i, j]] = rng.gen_range(0.0..1.0);
    }
    data
}
