//! # iPIC3D post-processing
//!
//! Tools to look at the output of an iPIC3D particle-in-cell simulation run:
//!  - plots of the density, particle position and particle velocity tables,
//!  - aggregation of the `Throughput:` figures reported by the benchmark logs.
//!
//! The tables are loaded with [NumericTable] and plotted with [PlotConfig].
//! The benchmark logs are scanned with [Extractor] and aggregated either per file,
//! with [MultiFileAggregator], or per bucket of a [BucketLayout], with
//! [aggregate::single_file].

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

pub mod aggregate;
mod error;
pub mod histogram;
pub mod layout;
#[cfg(feature = "plot")]
pub mod plot;
pub mod source;
pub mod table;
pub mod throughput;

pub use aggregate::{LabelledRow, MultiFileAggregator};
pub use error::Error;
pub use layout::{BucketGroup, BucketLayout};
#[cfg(feature = "plot")]
pub use plot::{PlotConfig, PlotKind};
pub use table::NumericTable;
pub use throughput::{Extractor, Sample};

/// Environment variable with the path to the simulation results directory
pub const RESULTS_ENV: &str = "IPIC3D_RESULTS";

/// Returns the simulation results directory
///
/// The directory is read from the `IPIC3D_RESULTS` environment variable and
/// defaults to `../results`.
pub fn results_path() -> PathBuf {
    results_path_from(env::var_os(RESULTS_ENV))
}
fn results_path_from(var: Option<OsString>) -> PathBuf {
    var.map(PathBuf::from)
        .unwrap_or_else(|| Path::new("..").join("results"))
}

/// Resolves `file` within the results directory
pub fn results_file<S: AsRef<Path>>(file: S) -> PathBuf {
    results_path().join(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_results_directory() {
        assert_eq!(results_path_from(None), Path::new("../results"));
    }

    #[test]
    fn results_directory_from_env() {
        let path = results_path_from(Some(OsString::from("/scratch/run42/results")));
        assert_eq!(path, Path::new("/scratch/run42/results"));
    }

    #[test]
    fn results_file_joins_directory() {
        let path = results_file("density.tiny.1204.txt");
        assert!(path.ends_with("density.tiny.1204.txt"));
        assert_eq!(path, results_path().join("density.tiny.1204.txt"));
    }
}
