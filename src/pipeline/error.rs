use thiserror::Error;

use crate::count::CountOverflow;
use crate::sink::WriteError;
use crate::source::ReadError;

/// Every failure is fatal to the run. The message names the stage; the
/// wrapped error names the path or word.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("read stage: {0}")]
    Read(#[from] ReadError),

    #[error("count stage: {0}")]
    Count(#[from] CountOverflow),

    #[error("write stage: {0}")]
    Write(#[from] WriteError),
}
