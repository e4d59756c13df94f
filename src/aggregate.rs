//! Throughput aggregation over benchmark logs
//!
//! Two aggregations are available:
//!  - [MultiFileAggregator]: one row per log file found in a directory, labelled
//!    after the file name,
//!  - [single_file]: the samples of one log file split with a [BucketLayout].

use glob::glob;
use itertools::Itertools;
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    layout::{BucketGroup, BucketLayout, LayoutError},
    throughput::{Extractor, Sample, ThroughputError},
};

/// Number of trailing characters removed from the last `_` segment of a log file name
pub const LABEL_SUFFIX_LEN: usize = 7;

#[derive(thiserror::Error, Debug)]
pub enum LabelError {
    #[error("{0:?} has no file name")]
    NoFileName(PathBuf),
    #[error(
        "segment {segment:?} of {path:?} is shorter than {} characters",
        LABEL_SUFFIX_LEN
    )]
    TooShort { path: PathBuf, segment: String },
}

#[derive(thiserror::Error, Debug)]
pub enum AggregateError {
    #[error("Invalid glob pattern")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to read a directory entry")]
    Glob(#[from] glob::GlobError),
    #[error("Failed to derive the row label")]
    Label(#[from] LabelError),
    #[error("Failed to extract the samples from {1:?}")]
    Throughput(#[source] ThroughputError, PathBuf),
    #[error("Failed to split the samples into buckets")]
    Layout(#[from] LayoutError),
    #[error("Failed to write the CSV file")]
    Csv(#[from] csv::Error),
}
type Result<T> = std::result::Result<T, AggregateError>;

/// Derives a row label from a log file name
///
/// The file name is split on `_`, and the last [LABEL_SUFFIX_LEN] characters of the
/// last segment are removed: `job_foo_0000001.o` gives `00`.
pub fn label_from_path<P: AsRef<Path>>(path: P) -> std::result::Result<String, LabelError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .ok_or_else(|| LabelError::NoFileName(path.to_path_buf()))?
        .to_string_lossy();
    let segment = name.rsplit('_').next().unwrap_or_default();
    let n = segment.chars().count();
    if n < LABEL_SUFFIX_LEN {
        return Err(LabelError::TooShort {
            path: path.to_path_buf(),
            segment: segment.to_owned(),
        });
    }
    Ok(segment.chars().take(n - LABEL_SUFFIX_LEN).collect())
}

/// A label and its throughput samples
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledRow {
    pub label: String,
    pub samples: Vec<Sample>,
}
impl LabelledRow {
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value()).collect()
    }
}
impl fmt::Display for LabelledRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.label)?;
        for sample in &self.samples {
            write!(f, "{} ", sample)?;
        }
        Ok(())
    }
}
impl From<BucketGroup<Sample>> for LabelledRow {
    fn from(group: BucketGroup<Sample>) -> Self {
        Self {
            label: group.name,
            samples: group.values,
        }
    }
}

/// Collects the throughput of every log file matching a pattern in a directory
pub struct MultiFileAggregator {
    path: PathBuf,
    pattern: String,
    extractor: Extractor,
}
impl MultiFileAggregator {
    /// Aggregates the `*.o` files within `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pattern: String::from("*.o"),
            extractor: Extractor::default(),
        }
    }
    /// Sets the file name glob pattern
    pub fn pattern<S: Into<String>>(self, pattern: S) -> Self {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }
    pub fn extractor(self, extractor: Extractor) -> Self {
        Self { extractor, ..self }
    }
    /// Returns the matching files sorted by path
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        // only the file name part is a pattern
        let pattern = Path::new(&glob::Pattern::escape(&self.path.to_string_lossy()))
            .join(&self.pattern);
        let mut paths = glob(&pattern.to_string_lossy())?
            .filter_ok(|p| p.is_file())
            .collect::<std::result::Result<Vec<PathBuf>, glob::GlobError>>()?;
        paths.sort();
        if paths.is_empty() {
            log::warn!("no file matching {:?}", pattern);
        }
        Ok(paths)
    }
    /// Returns one row per matching file
    pub fn load(&self) -> Result<Vec<LabelledRow>> {
        self.files()?
            .into_iter()
            .map(|path| {
                let label = label_from_path(&path)?;
                let samples = self
                    .extractor
                    .extract_from_path(&path)
                    .map_err(|e| AggregateError::Throughput(e, path.clone()))?;
                Ok(LabelledRow { label, samples })
            })
            .collect()
    }
}

/// Splits the samples of a single log file into the `layout` buckets
pub fn single_file<P: AsRef<Path>>(
    path: P,
    extractor: &Extractor,
    layout: &BucketLayout,
) -> Result<Vec<LabelledRow>> {
    let path = path.as_ref();
    let samples = extractor
        .extract_from_path(path)
        .map_err(|e| AggregateError::Throughput(e, path.to_path_buf()))?;
    Ok(layout
        .partition(&samples)?
        .into_iter()
        .map(LabelledRow::from)
        .collect())
}

/// Rows as whitespace separated text, with or without their labels
pub fn to_text(rows: &[LabelledRow], with_label: bool) -> String {
    rows.iter()
        .map(|row| {
            if with_label {
                row.to_string()
            } else {
                row.samples.iter().map(|s| format!("{s} ")).join("")
            }
        })
        .join("\n")
}

/// Writes the rows to a CSV file, one record per row starting with the label
pub fn to_csv<P: AsRef<Path>>(rows: &[LabelledRow], path: P) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in rows {
        let mut record = vec![row.label.as_str()];
        record.extend(row.samples.iter().map(|s| s.as_str()));
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Row statistics: (mean, std) and (min, max)
pub fn stats(values: &[f64]) -> Option<((f64, f64), (f64, f64))> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.iter().map(|x| x - mean).fold(0f64, |s, x| s + x * x) / n).sqrt();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some(((mean, std), (min, max)))
}

/// Summary table of the rows statistics
pub fn summary(rows: &[LabelledRow]) -> String {
    let mut lines = vec![
        String::from("SUMMARY:"),
        format!(" - # of rows: {}", rows.len()),
        format!(
            "    {:^16}: {:>5} ({:^12}, {:^12})  ({:^12}, {:^12})",
            "LABEL", "#", "MEAN", "STD", "MIN", "MAX"
        ),
    ];
    for row in rows {
        let values = row.values();
        match stats(&values) {
            Some(((mean, std), (min, max))) => lines.push(format!(
                "  - {:16}: {:>5} ({:>12.4e}, {:>12.4e})  ({:>12.4e}, {:>12.4e})",
                row.label,
                values.len(),
                mean,
                std,
                min,
                max
            )),
            None => lines.push(format!("  - {:16}: {:>5} no samples", row.label, 0)),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, fs};

    fn log(values: &[f64]) -> String {
        values
            .iter()
            .map(|v| format!("Simulation took 1s\nThroughput: {v} particles/s\n"))
            .collect()
    }

    #[test]
    fn label_derivation() {
        assert_eq!(label_from_path("job_foo_0000001.o").unwrap(), "00");
        assert_eq!(label_from_path("dir_a/ipic3d_16.o12345").unwrap(), "16");
        assert_eq!(label_from_path("16nodes.o").unwrap(), "16");
        assert!(matches!(
            label_from_path("run_4.o"),
            Err(LabelError::TooShort { .. })
        ));
    }

    #[test]
    fn multiple_files() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("run_2nodes.o"), log(&[3., 4.]))?;
        fs::write(dir.path().join("run_1nodes.o"), log(&[1., 2.]))?;
        fs::write(dir.path().join("run_4nodes.e"), log(&[5.]))?;

        let rows = MultiFileAggregator::new(dir.path()).load()?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "1");
        assert_eq!(rows[0].values(), vec![1., 2.]);
        assert_eq!(rows[1].label, "2");
        assert_eq!(to_text(&rows, true), "1 1 2 \n2 3 4 ");
        Ok(())
    }

    #[test]
    fn file_without_samples() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("run_8nodes.o"), "Simulation Finished\n")?;
        let rows = MultiFileAggregator::new(dir.path()).load()?;
        assert_eq!(rows.len(), 1);
        assert!(rows[0].samples.is_empty());
        assert_eq!(rows[0].to_string(), "8 ");
        Ok(())
    }

    #[test]
    fn empty_directory() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        assert!(MultiFileAggregator::new(dir.path()).load()?.is_empty());
        Ok(())
    }

    #[test]
    fn directory_with_glob_characters() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let runs = dir.path().join("run[1]*?");
        fs::create_dir(&runs)?;
        fs::write(runs.join("job_x_4nodes.o"), log(&[1.]))?;
        let rows = MultiFileAggregator::new(&runs).load()?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "4");
        assert_eq!(rows[0].values(), vec![1.]);
        Ok(())
    }

    #[test]
    fn single_file_buckets() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("udist.o");
        let values: Vec<f64> = (0..144).map(|x| x as f64).collect();
        fs::write(&path, log(&values))?;

        let rows = single_file(&path, &Extractor::default(), &BucketLayout::udist())?;
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.samples.len() == 24));
        assert_eq!(rows[1].label, "res2");
        let res2: Vec<f64> = (6..12)
            .chain(42..48)
            .chain(78..84)
            .chain(114..120)
            .map(|x| x as f64)
            .collect();
        assert_eq!(rows[1].values(), res2);
        let text = to_text(&rows, false);
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("0 1 2 3 4 5 36 37 "));
        Ok(())
    }

    #[test]
    fn single_file_without_samples() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("udist.o");
        fs::write(&path, "Simulation Finished\n")?;
        let err = single_file(&path, &Extractor::default(), &BucketLayout::udist()).unwrap_err();
        assert!(matches!(
            err,
            AggregateError::Layout(LayoutError::Insufficient {
                required: 144,
                available: 0
            })
        ));
        Ok(())
    }

    #[test]
    fn csv_export() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("rows.csv");
        let rows = vec![
            LabelledRow {
                label: "1".into(),
                samples: vec![Sample::new("1.5e6")?, Sample::new("2")?],
            },
            LabelledRow {
                label: "2".into(),
                samples: vec![],
            },
        ];
        to_csv(&rows, &path)?;
        assert_eq!(fs::read_to_string(&path)?, "1,1.5e6,2\n2\n");
        Ok(())
    }

    #[test]
    fn row_statistics() {
        let ((mean, std), (min, max)) = stats(&[1., 2., 3., 4.]).unwrap();
        assert_eq!(mean, 2.5);
        assert!((std - 1.118033988749895).abs() < 1e-12);
        assert_eq!((min, max), (1., 4.));
        assert!(stats(&[]).is_none());
    }
}
