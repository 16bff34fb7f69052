//! Generate a sample h5ad file with a compressed (CSR) X matrix.
//!
//! At most `N_ENTRIES` cells are populated; index collisions overwrite, so
//! the stored count can come out lower.
//!
//! Usage: `gen_compressed_h5ad <output_file.h5ad>`

use std::env;
use std::process;

use h5ad_fixtures::csr::CsrMatrix;
use h5ad_fixtures::dataset::{AnnDataset, Matrix};
use h5ad_fixtures::{Result, cli, h5ad, synth};

const N_OBS: usize = 100;
const N_VARS: usize = 20;
const N_ENTRIES: usize = 100;

fn main() -> Result<()> {
    env_logger::init();
    let Some(output) = cli::output_path(env::args()) else {
        println!("{}", cli::usage("gen_compressed_h5ad"));
        process::exit(1);
    };

    let mut rng = rand::thread_rng();
    let scattered = synth::scattered_uniform(&mut rng, N_OBS, N_VARS, N_ENTRIES);
    let x = CsrMatrix::from_dense(&scattered);
    let obs = synth::obs_frame(&mut rng, N_OBS);
    let var = synth::var_frame(&mut rng, N_VARS);
    let adata = AnnDataset::new(Matrix::Csr(x), obs, var)?;

    log::info!("writing compressed {N_OBS}x{N_VARS} fixture");
    h5ad::write(&adata, &output)?;
    println!("Compressed h5ad file written to {output}");
    Ok(())
}
