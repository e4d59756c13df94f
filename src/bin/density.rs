//! Density plot
//!
//! Scatter plot of the density table: frequency (column 1) versus value (column 0)

use ipic3d_post::{plot, results_file, PlotConfig};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "density", about = "Scatter plot of the density table")]
struct Opt {
    /// Density table, defaults to `density.tiny.1204.txt` in $IPIC3D_RESULTS
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
    /// x axis column
    #[structopt(short, default_value = "0")]
    x: usize,
    /// y axis column
    #[structopt(short, default_value = "1")]
    y: usize,
    /// Plot title
    #[structopt(long, default_value = "Density")]
    title: String,
    /// Image file (.png or .svg)
    #[structopt(short, long, default_value = "density.png", parse(from_os_str))]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let input = opt
        .input
        .unwrap_or_else(|| results_file("density.tiny.1204.txt"));
    let config = PlotConfig::scatter(opt.x, opt.y).title(opt.title);
    plot::plot_file(&input, &config, &opt.output)?;
    println!("{}", opt.output.display());
    Ok(())
}
