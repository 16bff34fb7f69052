// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random fixture content: matrix fills and label frames.
//!
//! Everything here is generic over [`rand::Rng`] so the binaries can run
//! unseeded (`thread_rng`) while tests pass a seeded `StdRng` for
//! reproducible assertions.

mod frames;
mod matrix;

pub use frames::{BATCHES, LIBRARIES, ids, obs_frame, var_frame};
pub use matrix::{dense_uniform, scattered_uniform};
