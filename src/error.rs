#[cfg(feature = "plot")]
use crate::plot::PlotError;
use crate::{
    aggregate::AggregateError, layout::LayoutError, table::TableError,
    throughput::ThroughputError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `table` module")]
    Table(#[from] TableError),
    #[error("Error in the `throughput` module")]
    Throughput(#[from] ThroughputError),
    #[error("Error in the `layout` module")]
    Layout(#[from] LayoutError),
    #[error("Error in the `aggregate` module")]
    Aggregate(#[from] AggregateError),
    #[cfg(feature = "plot")]
    #[error("Error in the `plot` module")]
    Plot(#[from] PlotError),
}
