use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
