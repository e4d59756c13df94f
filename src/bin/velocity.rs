//! Particle velocity histogram
//!
//! Histogram of the first velocity component (column 3) of the particles table

use ipic3d_post::{plot, results_file, PlotConfig};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "velocity", about = "Histogram of the particle velocities")]
struct Opt {
    /// Particles table, defaults to `particles.test.1201.txt` in $IPIC3D_RESULTS
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
    /// Velocity column
    #[structopt(short, long, default_value = "3")]
    column: usize,
    /// Number of bins
    #[structopt(short, long, default_value = "20")]
    bins: usize,
    /// Plot title
    #[structopt(long, default_value = "Histogram")]
    title: String,
    /// Image file (.png or .svg)
    #[structopt(short, long, default_value = "velocity.png", parse(from_os_str))]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let input = opt
        .input
        .unwrap_or_else(|| results_file("particles.test.1201.txt"));
    let config = PlotConfig::histogram(opt.column, opt.bins).title(opt.title);
    plot::plot_file(&input, &config, &opt.output)?;
    println!("{}", opt.output.display());
    Ok(())
}
