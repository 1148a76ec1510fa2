pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid coordinate values: {field} must be a finite number (got {value})")]
    NonFiniteCoordinate { field: &'static str, value: f64 },

    #[error("Invalid point `{input}`: expected `<x>,<y>` with finite numbers")]
    InvalidPoint { input: String },

    #[error("request #{index}: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}
