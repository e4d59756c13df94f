//! Bucket layout of repeated benchmark records
//!
//! A benchmark sweep writes its samples as `repetitions` consecutive records of
//! `stride` samples. Inside a record, each bucket owns a contiguous run of `width`
//! samples starting at `offset`.
//! [BucketLayout::partition] gathers, for each bucket, its runs from every record.

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("layout requires {required} samples, only {available} available")]
    Insufficient { required: usize, available: usize },
    #[error("bucket {name:?} ({offset}+{width}) does not fit in a record of {stride} samples")]
    Overflow {
        name: String,
        offset: usize,
        width: usize,
        stride: usize,
    },
}
type Result<T> = std::result::Result<T, LayoutError>;

/// A named run of samples inside a record
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub name: String,
    pub offset: usize,
    pub width: usize,
}

/// Samples gathered for one bucket
#[derive(Debug, Clone, PartialEq)]
pub struct BucketGroup<T> {
    pub name: String,
    pub values: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketLayout {
    stride: usize,
    repetitions: usize,
    buckets: Vec<Bucket>,
}
impl BucketLayout {
    pub fn new(stride: usize, repetitions: usize) -> Self {
        Self {
            stride,
            repetitions,
            buckets: vec![],
        }
    }
    /// Appends a bucket to the layout
    pub fn bucket<S: Into<String>>(mut self, name: S, offset: usize, width: usize) -> Result<Self> {
        let name = name.into();
        if offset + width > self.stride {
            return Err(LayoutError::Overflow {
                name,
                offset,
                width,
                stride: self.stride,
            });
        }
        self.buckets.push(Bucket {
            name,
            offset,
            width,
        });
        Ok(self)
    }
    /// Thread count sweep layout: 4 records of 36 samples split into
    /// 6 buckets of 6 samples for 1, 2, 4, 8, 16 and 32 threads
    pub fn udist() -> Self {
        let buckets = [1, 2, 4, 8, 16, 32]
            .into_iter()
            .enumerate()
            .map(|(k, n)| Bucket {
                name: format!("res{n}"),
                offset: k * 6,
                width: 6,
            })
            .collect();
        Self {
            stride: 36,
            repetitions: 4,
            buckets,
        }
    }
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
    /// Minimum number of samples the layout reads
    pub fn required(&self) -> usize {
        self.buckets
            .iter()
            .map(|b| b.offset + b.width)
            .max()
            .filter(|_| self.repetitions > 0)
            .map_or(0, |end| (self.repetitions - 1) * self.stride + end)
    }
    /// Splits `samples` into the layout buckets, in declaration order
    ///
    /// Samples past [BucketLayout::required] are ignored.
    pub fn partition<T: Clone>(&self, samples: &[T]) -> Result<Vec<BucketGroup<T>>> {
        let required = self.required();
        if samples.len() < required {
            return Err(LayoutError::Insufficient {
                required,
                available: samples.len(),
            });
        }
        Ok(self
            .buckets
            .iter()
            .map(|bucket| BucketGroup {
                name: bucket.name.clone(),
                values: (0..self.repetitions)
                    .flat_map(|r| {
                        let start = r * self.stride + bucket.offset;
                        samples[start..start + bucket.width].iter().cloned()
                    })
                    .collect(),
            })
            .collect())
    }
}
