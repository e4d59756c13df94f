use std::{path::Path, str::FromStr, time::Instant};

use crate::source;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("Failed to open the table file")]
    Io(#[from] std::io::Error),
    #[error("line {line}: failed to parse {token:?} as a number")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("line {line}: expected {expected} columns, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("column {column} is out of range, the table has {n_column} columns")]
    Column { column: usize, n_column: usize },
    #[error("the table is empty")]
    Empty,
}
type Result<T> = std::result::Result<T, TableError>;

/// Whitespace delimited table of floating point numbers
///
/// Rows are samples and columns are addressed by their zero-based index.
/// Empty lines and `#` comments are skipped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NumericTable {
    n_column: usize,
    data: Vec<f64>,
}
impl NumericTable {
    /// Loads a table from a plain or gzip-compressed file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading {:?}...", path);
        let now = Instant::now();
        let this: Self = source::read_to_string(path)?.parse()?;
        log::info!(
            "... loaded {}x{} table in {:}ms",
            this.n_row(),
            this.n_column(),
            now.elapsed().as_millis()
        );
        Ok(this)
    }
    /// Number of rows
    pub fn n_row(&self) -> usize {
        if self.n_column == 0 {
            0
        } else {
            self.data.len() / self.n_column
        }
    }
    /// Number of columns
    pub fn n_column(&self) -> usize {
        self.n_column
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Iterator over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.n_column.max(1))
    }
    /// Iterator over the values of a given column
    pub fn column_iter(&self, column: usize) -> Result<impl Iterator<Item = f64> + '_> {
        if column >= self.n_column {
            return Err(TableError::Column {
                column,
                n_column: self.n_column,
            });
        }
        Ok(self.rows().map(move |row| row[column]))
    }
    /// Returns a copy of a given column
    pub fn column(&self, column: usize) -> Result<Vec<f64>> {
        Ok(self.column_iter(column)?.collect())
    }
    /// Iterator over the (x,y) pairs of two columns
    pub fn xy_iter(
        &self,
        x_column: usize,
        y_column: usize,
    ) -> Result<impl Iterator<Item = (f64, f64)> + '_> {
        Ok(self.column_iter(x_column)?.zip(self.column_iter(y_column)?))
    }
    /// Returns the range of a given column
    pub fn column_range(&self, column: usize) -> Result<(f64, f64)> {
        Ok((
            self.column_iter(column)?.fold(f64::INFINITY, f64::min),
            self.column_iter(column)?.fold(f64::NEG_INFINITY, f64::max),
        ))
    }
}
impl FromStr for NumericTable {
    type Err = TableError;

    fn from_str(contents: &str) -> Result<Self> {
        let mut this = Self::default();
        for (k, line) in contents.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|source| TableError::Parse {
                        line: k + 1,
                        token: token.to_owned(),
                        source,
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            if this.data.is_empty() {
                this.n_column = row.len();
            } else if row.len() != this.n_column {
                return Err(TableError::Ragged {
                    line: k + 1,
                    expected: this.n_column,
                    found: row.len(),
                });
            }
            this.data.extend(row);
        }
        if this.data.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(this)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    const PARTICLES: &str = "\
# x y z u v w
0.1 0.2 0.3  1.0 -1.0  0.5
0.4 0.5 0.6  2.0 -2.0  1.5

0.7 0.8 0.9  3.0 -3.0  2.5  # last
";

    #[test]
    fn parse_table() -> std::result::Result<(), Box<dyn Error>> {
        let table: NumericTable = PARTICLES.parse()?;
        assert_eq!(table.n_row(), 3);
        assert_eq!(table.n_column(), 6);
        assert_eq!(table.column(3)?, vec![1.0, 2.0, 3.0]);
        assert_eq!(table.column_range(4)?, (-3.0, -1.0));
        let xy: Vec<_> = table.xy_iter(0, 1)?.collect();
        assert_eq!(xy, vec![(0.1, 0.2), (0.4, 0.5), (0.7, 0.8)]);
        Ok(())
    }

    #[test]
    fn column_selection_is_deterministic() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("particles.test.1201.txt");
        std::fs::write(&path, PARTICLES)?;
        let first = NumericTable::from_path(&path)?.column(5)?;
        let second = NumericTable::from_path(&path)?.column(5)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn malformed_token() {
        let err = "1 2\n3 x\n".parse::<NumericTable>().unwrap_err();
        match err {
            TableError::Parse { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_rows() {
        let err = "1 2 3\n4 5\n".parse::<NumericTable>().unwrap_err();
        assert!(matches!(
            err,
            TableError::Ragged {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn column_out_of_range() -> std::result::Result<(), Box<dyn Error>> {
        let table: NumericTable = "1 2\n3 4\n".parse()?;
        assert!(matches!(
            table.column(5),
            Err(TableError::Column {
                column: 5,
                n_column: 2
            })
        ));
        Ok(())
    }

    #[test]
    fn empty_table() {
        assert!(matches!(
            "# nothing\n\n".parse::<NumericTable>(),
            Err(TableError::Empty)
        ));
    }
}
