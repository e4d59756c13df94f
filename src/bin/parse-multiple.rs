//! Throughput of a batch of benchmark runs
//!
//! Prints one line per `*.o` log file found in the given directory: the node
//! count taken from the file name followed by all the throughput values of the run.

use ipic3d_post::{aggregate, Extractor, MultiFileAggregator};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "parse-multiple",
    about = "Throughput values of every benchmark log in a directory"
)]
struct Opt {
    /// Directory with the benchmark logs
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Log files glob pattern
    #[structopt(short, long, default_value = "*.o")]
    pattern: String,
    /// Label preceding the values in the logs
    #[structopt(short, long, default_value = "Throughput:")]
    label: String,
    /// Print the statistics of each log
    #[structopt(short, long)]
    summary: bool,
    /// Save the rows to a CSV file
    #[structopt(long, parse(from_os_str))]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let rows = MultiFileAggregator::new(&opt.path)
        .pattern(opt.pattern)
        .extractor(Extractor::default().label(opt.label))
        .load()?;
    for row in &rows {
        println!("{}", row);
    }
    if opt.summary {
        println!("{}", aggregate::summary(&rows));
    }
    if let Some(filename) = opt.csv {
        aggregate::to_csv(&rows, filename)?;
    }
    Ok(())
}
