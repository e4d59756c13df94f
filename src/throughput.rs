//! Throughput samples extraction
//!
//! The benchmark driver of the simulation reports its performance with lines like
//! ```text
//! Throughput: 1.52e+07 particles/s
//! ```
//! [Extractor] scans a log for such lines and collects the first token following
//! the label.

use regex::Regex;
use std::{fmt, path::Path, time::Instant};

use crate::source;

pub const THROUGHPUT_LABEL: &str = "Throughput:";

#[derive(thiserror::Error, Debug)]
pub enum ThroughputError {
    #[error("Failed to open the log file")]
    Io(#[from] std::io::Error),
    #[error("Invalid label pattern")]
    Regex(#[from] regex::Error),
    #[error("line {line}: failed to parse throughput {token:?}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
type Result<T> = std::result::Result<T, ThroughputError>;

/// A throughput value together with its text as written in the log
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    text: String,
    value: f64,
}
impl Sample {
    pub fn new<S: Into<String>>(text: S) -> std::result::Result<Self, std::num::ParseFloatError> {
        let text = text.into();
        let value = text.parse::<f64>()?;
        Ok(Self { text, value })
    }
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Log scanner for labelled numeric values
#[derive(Debug, Clone)]
pub struct Extractor {
    label: String,
}
impl Default for Extractor {
    fn default() -> Self {
        Self {
            label: String::from(THROUGHPUT_LABEL),
        }
    }
}
impl Extractor {
    /// Sets the label preceding the values
    pub fn label<S: Into<String>>(self, label: S) -> Self {
        Self {
            label: label.into(),
        }
    }
    /// Extracts the samples from a log text, in line order
    pub fn extract(&self, contents: &str) -> Result<Vec<Sample>> {
        let re_label = Regex::new(&format!(r"{}\s*(\S*)", regex::escape(&self.label)))?;
        let mut samples = vec![];
        for (k, line) in contents.lines().enumerate() {
            let Some(capts) = re_label.captures(line) else {
                continue;
            };
            let token = capts.get(1).map_or("", |m| m.as_str());
            if token.is_empty() {
                log::debug!("line {}: no value after {:?}", k + 1, self.label);
                continue;
            }
            let sample = Sample::new(token).map_err(|source| ThroughputError::Parse {
                line: k + 1,
                token: token.to_owned(),
                source,
            })?;
            samples.push(sample);
        }
        Ok(samples)
    }
    /// Extracts the samples from a plain or gzip-compressed log file
    pub fn extract_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Sample>> {
        let path = path.as_ref();
        log::info!("Loading {:?}...", path);
        let now = Instant::now();
        let samples = self.extract(&source::read_to_string(path)?)?;
        log::info!(
            "... {} samples extracted in {:}ms",
            samples.len(),
            now.elapsed().as_millis()
        );
        Ok(samples)
    }
}
