use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    config::config_manager::Config,
    emit::{CppHeaderEmitter, CppInterop, RustSourceEmitter, TableEmitter, TableFormat},
    error::LutError,
    limits::{DEFAULT_ALIGNMENT, DEFAULT_RADIUS, DEFAULT_SHELL_START_RADIUS, MAX_ALIGNMENT},
    table::LutParams,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LutConfig {
    pub radius: i32,
    pub shell_start_radius: i32,
    /// Byte alignment of both generated arrays
    pub alignment: u32,
    pub format: TableFormat,
    pub output_path: PathBuf,
    /// Only used by the C++ format
    pub cpp_interop: Option<CppInterop>,
}

impl Default for LutConfig {
    fn default() -> Self {
        LutConfig {
            radius: DEFAULT_RADIUS,
            shell_start_radius: DEFAULT_SHELL_START_RADIUS,
            alignment: DEFAULT_ALIGNMENT,
            format: TableFormat::Rust,
            output_path: PathBuf::from("chunk_lut.gen.rs"),
            cpp_interop: None,
        }
    }
}

impl Config for LutConfig {
    fn get_path() -> &'static str {
        "lutgen.ron"
    }

    fn validate(&self) -> Result<(), LutError> {
        self.params()?;

        if !self.alignment.is_power_of_two() || self.alignment > MAX_ALIGNMENT {
            return Err(LutError::InvalidAlignment {
                alignment: self.alignment,
                max: MAX_ALIGNMENT,
            });
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(LutError::EmptyOutputPath);
        }

        Ok(())
    }
}

impl LutConfig {
    pub fn params(&self) -> Result<LutParams, LutError> {
        LutParams::new(self.radius, self.shell_start_radius)
    }

    pub fn emitter(&self) -> Box<dyn TableEmitter> {
        match self.format {
            TableFormat::Rust => Box::new(RustSourceEmitter {
                alignment: self.alignment,
            }),
            TableFormat::Cpp => Box::new(CppHeaderEmitter {
                alignment: self.alignment,
                interop: self.cpp_interop.clone(),
            }),
        }
    }
}
