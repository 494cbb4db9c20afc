//! Shell error type. The simulation itself cannot fail; everything here is
//! terminal I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
