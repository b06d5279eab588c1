use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LutError {
    #[error("radius must be at least 1, got {0}")]
    InvalidRadius(i32),
    #[error("radius {radius} exceeds the maximum supported radius of {max}")]
    RadiusTooLarge { radius: i32, max: i32 },
    #[error("shell start radius must be at least 1, got {0}")]
    InvalidShellStartRadius(i32),
    #[error("shell start radius {start} exceeds the maximum of {max}")]
    ShellStartRadiusTooLarge { start: i32, max: i32 },
    #[error("alignment must be a power of two no larger than {max}, got {alignment}")]
    InvalidAlignment { alignment: u32, max: u32 },
    #[error("output path is empty")]
    EmptyOutputPath,
    #[error("failed to write {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LutError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LutError::Io {
            path: path.into(),
            source,
        }
    }
}
