use std::path::PathBuf;

use crate::{
    config::{config_manager::Config, lut_config::LutConfig},
    error::LutError,
    output::write_atomically,
};

pub mod config;
pub mod emit;
pub mod error;
pub mod limits;
pub mod offsets;
pub mod output;
pub mod shells;
pub mod table;

pub use table::{GeneratedTable, LutParams, generate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub output_path: PathBuf,
    pub offset_count: usize,
    pub shell_count: usize,
    pub bytes_written: u64,
}

/// Generates the table described by `config` and writes it to `config.output_path`.
pub fn write_table(config: &LutConfig) -> Result<TableSummary, LutError> {
    config.validate()?;
    let table = generate(config.params()?);
    let emitter = config.emitter();

    let bytes_written = write_atomically(&config.output_path, |out| emitter.emit(&table, out))?;

    let summary = TableSummary {
        output_path: config.output_path.clone(),
        offset_count: table.len(),
        shell_count: table.shell_count(),
        bytes_written,
    };

    log::info!(
        "Wrote {} offsets in {} shells to {:?} ({} bytes)",
        summary.offset_count,
        summary.shell_count,
        summary.output_path,
        summary.bytes_written
    );

    Ok(summary)
}
