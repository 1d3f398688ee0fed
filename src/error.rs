use thiserror::Error;

/// Errors that can stop the application.
///
/// Store operations never fail; only the terminal plumbing can.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, AppError>;
