//! Generate a sample h5ad file with a raw dense X and derived layers.
//!
//! The `log1p` and `sqrt` layers hold the elementwise transforms of X.
//!
//! Usage: `gen_layers_h5ad <output_file.h5ad>`

use std::env;
use std::process;

use h5ad_fixtures::dataset::{AnnDataset, Matrix};
use h5ad_fixtures::{Result, cli, h5ad, synth};

const N_OBS: usize = 100;
const N_VARS: usize = 20;

fn main() -> Result<()> {
    env_logger::init();
    let Some(output) = cli::output_path(env::args()) else {
        println!("{}", cli::usage("gen_layers_h5ad"));
        process::exit(1);
    };

    let mut rng = rand::thread_rng();
    let x = synth::dense_uniform(&mut rng, N_OBS, N_VARS);
    let log1p = x.mapv(f64::ln_1p);
    let sqrt = x.mapv(f64::sqrt);
    let obs = synth::obs_frame(&mut rng, N_OBS);
    let var = synth::var_frame(&mut rng, N_VARS);

    let mut adata = AnnDataset::new(Matrix::Dense(x), obs, var)?;
    adata.add_layer("log1p", Matrix::Dense(log1p))?;
    adata.add_layer("sqrt", Matrix::Dense(sqrt))?;

    log::info!("writing layers {N_OBS}x{N_VARS} fixture");
    h5ad::write(&adata, &output)?;
    println!("Layers h5ad file written to {output}");
    Ok(())
}
