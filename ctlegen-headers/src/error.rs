use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] ctlegen_core::Error),

    #[error("invalid line pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
