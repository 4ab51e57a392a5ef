use thiserror::Error;

use crate::core::PlotKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unsupported plot kind: {kind}")]
    UnsupportedKind { kind: PlotKind },

    #[error("no data could be extracted for plot kind: {kind}")]
    NoDataExtracted { kind: PlotKind },

    #[error("unsupported output format: `{0}` (expected `json` or `html`)")]
    UnsupportedOutputFormat(String),

    #[error("no chart supplied and no current chart is available")]
    MissingChart,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
