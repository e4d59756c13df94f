//! Throughput of a thread count sweep
//!
//! Splits the throughput values of a single benchmark log into the
//! `res1`, `res2`, `res4`, `res8`, `res16` and `res32` buckets and prints one
//! line per bucket.

use ipic3d_post::{aggregate, BucketLayout, Extractor};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "parse-single",
    about = "Throughput values of a benchmark log grouped by thread count"
)]
struct Opt {
    /// Benchmark log
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Label preceding the values in the log
    #[structopt(short, long, default_value = "Throughput:")]
    label: String,
    /// Start each line with the bucket name
    #[structopt(short, long)]
    names: bool,
    /// Print the statistics of each bucket
    #[structopt(short, long)]
    summary: bool,
    /// Save the buckets to a CSV file
    #[structopt(long, parse(from_os_str))]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let extractor = Extractor::default().label(opt.label);
    let rows = aggregate::single_file(&opt.path, &extractor, &BucketLayout::udist())?;
    println!("{}", aggregate::to_text(&rows, opt.names));
    if opt.summary {
        println!("{}", aggregate::summary(&rows));
    }
    if let Some(filename) = opt.csv {
        aggregate::to_csv(&rows, filename)?;
    }
    Ok(())
}
