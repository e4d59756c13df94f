//! Plot any numeric table
//!
//! Scatter plot of two columns or histogram of one column:
//! ```shell
//! plot-table ../results/density.tiny.1204.txt histogram -c 3
//! plot-table ../results/particles.test.1201.txt -o uv.svg scatter -x 3 -y 4
//! ```

use ipic3d_post::{plot, PlotConfig};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
enum Kind {
    /// Scatter plot of two columns
    Scatter {
        /// x axis column
        #[structopt(short, default_value = "0")]
        x: usize,
        /// y axis column
        #[structopt(short, default_value = "1")]
        y: usize,
    },
    /// Histogram of a column
    Histogram {
        /// Binned column
        #[structopt(short, long)]
        column: usize,
        /// Number of bins
        #[structopt(short, long, default_value = "20")]
        bins: usize,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(name = "plot-table", about = "Scatter plot or histogram of a numeric table")]
struct Opt {
    /// Whitespace delimited numeric table
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Plot title
    #[structopt(long)]
    title: Option<String>,
    /// x axis label
    #[structopt(long, default_value = "Value")]
    x_label: String,
    /// y axis label
    #[structopt(long, default_value = "Frequency")]
    y_label: String,
    /// Image width in pixels
    #[structopt(long, default_value = "768")]
    width: u32,
    /// Image height in pixels
    #[structopt(long, default_value = "512")]
    height: u32,
    /// Image file (.png or .svg)
    #[structopt(short, long, default_value = "plot.png", parse(from_os_str))]
    output: PathBuf,
    #[structopt(subcommand)]
    kind: Kind,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut config = match opt.kind {
        Kind::Scatter { x, y } => PlotConfig::scatter(x, y),
        Kind::Histogram { column, bins } => PlotConfig::histogram(column, bins),
    }
    .x_label(opt.x_label)
    .y_label(opt.y_label)
    .size(opt.width, opt.height);
    if let Some(title) = opt.title {
        config = config.title(title);
    }
    plot::plot_file(&opt.input, &config, &opt.output)?;
    println!("{}", opt.output.display());
    Ok(())
}
