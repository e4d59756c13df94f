//! Scatter plot of the particle positions: y (column 1) versus x (column 0)

use ipic3d_post::{plot, results_file, PlotConfig};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "position", about = "Scatter plot of the particle positions")]
struct Opt {
    /// Particles table, defaults to `particles.test.1202.txt` in $IPIC3D_RESULTS
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
    /// x axis column
    #[structopt(short, default_value = "0")]
    x: usize,
    /// y axis column
    #[structopt(short, default_value = "1")]
    y: usize,
    /// Plot title
    #[structopt(long)]
    title: Option<String>,
    /// Image file (.png or .svg)
    #[structopt(short, long, default_value = "position.png", parse(from_os_str))]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let input = opt
        .input
        .unwrap_or_else(|| results_file("particles.test.1202.txt"));
    let mut config = PlotConfig::scatter(opt.x, opt.y);
    if let Some(title) = opt.title {
        config = config.title(title);
    }
    plot::plot_file(&input, &config, &opt.output)?;
    println!("{}", opt.output.display());
    Ok(())
}
