//! Scatter and histogram plots of [NumericTable] columns
//!
//! Plots are written to an image file: SVG if the file extension is `svg`,
//! PNG otherwise.

use plotters::{coord::Shift, prelude::*};
use std::{fmt::Display, ops::Range, path::Path};

use crate::{
    histogram::Histogram,
    table::{NumericTable, TableError},
    Error,
};

/// Default number of histogram bins
pub const N_BIN: usize = 20;

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("Failed to select the plotted columns")]
    Table(#[from] TableError),
    #[error("Failed to draw the chart: {0}")]
    Drawing(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
type Result<T> = std::result::Result<T, PlotError>;

fn drawing<E: Display>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

/// Plot type and the columns it is made of
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotKind {
    /// `y` column versus `x` column
    Scatter { x: usize, y: usize },
    /// Histogram of a column with `bins` equal width bins
    Histogram { column: usize, bins: usize },
}

/// Data series drawn by a plot
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Points(Vec<(f64, f64)>),
    Bins(Histogram),
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    kind: PlotKind,
    title: Option<String>,
    x_label: String,
    y_label: String,
    size: (u32, u32),
}
impl PlotConfig {
    pub fn new(kind: PlotKind) -> Self {
        Self {
            kind,
            title: None,
            x_label: String::from("Value"),
            y_label: String::from("Frequency"),
            size: (768, 512),
        }
    }
    pub fn scatter(x: usize, y: usize) -> Self {
        Self::new(PlotKind::Scatter { x, y })
    }
    pub fn histogram(column: usize, bins: usize) -> Self {
        Self::new(PlotKind::Histogram { column, bins })
    }
    pub fn title<S: Into<String>>(self, title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }
    pub fn x_label<S: Into<String>>(self, x_label: S) -> Self {
        Self {
            x_label: x_label.into(),
            ..self
        }
    }
    pub fn y_label<S: Into<String>>(self, y_label: S) -> Self {
        Self {
            y_label: y_label.into(),
            ..self
        }
    }
    /// Image size in pixels
    pub fn size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }
    pub fn kind(&self) -> PlotKind {
        self.kind
    }
    /// Selects the plotted data from the table
    pub fn series(&self, table: &NumericTable) -> Result<Series> {
        match self.kind {
            PlotKind::Scatter { x, y } => Ok(Series::Points(
                table
                    .xy_iter(x, y)?
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .collect(),
            )),
            PlotKind::Histogram { column, bins } => {
                Histogram::new(table.column_iter(column)?, bins)
                    .map(Series::Bins)
                    .ok_or_else(|| {
                        PlotError::InvalidData(format!(
                            "cannot bin column {column} into {bins} bins"
                        ))
                    })
            }
        }
    }
    /// Plots the table into the image file `path`
    pub fn render<P: AsRef<Path>>(&self, table: &NumericTable, path: P) -> Result<()> {
        let path = path.as_ref();
        let series = self.series(table)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("svg") => self.draw(SVGBackend::new(path, self.size).into_drawing_area(), &series),
            _ => self.draw(
                BitMapBackend::new(path, self.size).into_drawing_area(),
                &series,
            ),
        }?;
        log::info!("Plot written to {:?}", path);
        Ok(())
    }
    fn draw<DB: DrawingBackend>(&self, plot: DrawingArea<DB, Shift>, series: &Series) -> Result<()> {
        plot.fill(&WHITE).map_err(drawing)?;

        let (x_range, y_range) = match series {
            Series::Points(points) => {
                if points.is_empty() {
                    return Err(PlotError::InvalidData(String::from("no point to plot")));
                }
                let (x, y): (Vec<f64>, Vec<f64>) = points.iter().cloned().unzip();
                (checked(padded(minmax(&x)))?, checked(padded(minmax(&y)))?)
            }
            Series::Bins(hist) => {
                let (lo, hi) = hist.range();
                (checked(lo..hi)?, 0f64..hist.max_count() as f64 * 1.05)
            }
        };

        let mut builder = ChartBuilder::on(&plot);
        builder
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .margin(10);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 24));
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(drawing)?;
        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .draw()
            .map_err(drawing)?;

        match series {
            Series::Points(points) => {
                let color = colorous::TABLEAU10[2];
                let rgb = RGBColor(color.r, color.g, color.b);
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), 3, rgb.filled())),
                    )
                    .map_err(drawing)?;
            }
            Series::Bins(hist) => {
                let color = colorous::TABLEAU10[4];
                let rgb = RGBColor(color.r, color.g, color.b);
                chart
                    .draw_series(hist.bins().map(|(lo, hi, count)| {
                        Rectangle::new([(lo, 0f64), (hi, count as f64)], rgb.filled())
                    }))
                    .map_err(drawing)?;
                chart
                    .draw_series(hist.bins().map(|(lo, hi, count)| {
                        Rectangle::new([(lo, 0f64), (hi, count as f64)], BLACK.stroke_width(1))
                    }))
                    .map_err(drawing)?;
            }
        }
        plot.present().map_err(drawing)?;
        Ok(())
    }
}

/// Loads the table in `input` and plots it into `output`
pub fn plot_file<P, Q>(input: P, config: &PlotConfig, output: Q) -> std::result::Result<(), Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let table = NumericTable::from_path(input)?;
    config.render(&table, output)?;
    Ok(())
}

fn minmax(x: &[f64]) -> (f64, f64) {
    (
        x.iter().cloned().fold(f64::INFINITY, f64::min),
        x.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    )
}
// Axis range with finite bounds and a finite, non-zero span
fn checked(range: Range<f64>) -> Result<Range<f64>> {
    let span = range.end - range.start;
    if span.is_finite() && span > 0. {
        Ok(range)
    } else {
        Err(PlotError::InvalidData(format!(
            "axis range {:?} cannot be drawn",
            range
        )))
    }
}
// 1% margin around the data, unit width for a single value
fn padded((lo, hi): (f64, f64)) -> Range<f64> {
    if lo == hi {
        lo - 0.5..hi + 0.5
    } else {
        let delta = (hi - lo) * 1e-2;
        lo - delta..hi + delta
    }
}
