#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("candidate list has {candidate} results but reference list has {reference}")]
    LengthMismatch { candidate: usize, reference: usize },

    #[error("no queries were compared")]
    NoQueriesCompared,

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
