use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{limits::OFFSETS_PER_LINE, offsets::ChunkOffset, table::GeneratedTable};

pub mod cpp;
pub mod rust;

pub use cpp::{CppHeaderEmitter, CppInterop};
pub use rust::RustSourceEmitter;

/// Source language of the generated table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableFormat {
    /// Item list meant to be pulled in with `include!`
    #[default]
    Rust,
    /// Header-only C++ with `constexpr` arrays
    Cpp,
}

/// Serializes a generated table as source code.
pub trait TableEmitter {
    fn emit(&self, table: &GeneratedTable, out: &mut dyn Write) -> io::Result<()>;
}

fn write_banner(out: &mut dyn Write, table: &GeneratedTable) -> io::Result<()> {
    let params = table.params();
    writeln!(out, "// Generated file, DO NOT EDIT!")?;
    writeln!(
        out,
        "// Generated for radius {} with shell start radius {}",
        params.radius(),
        params.shell_start_radius()
    )?;
    writeln!(out, "// {} offsets in {} shells", table.len(), table.shell_count())?;
    writeln!(out)
}

/// Writes every shell as a `// Shell i` comment followed by its offsets, a few per line.
fn write_shell_rows(
    out: &mut dyn Write,
    table: &GeneratedTable,
    indent: &str,
    mut write_offset: impl FnMut(&mut dyn Write, ChunkOffset) -> io::Result<()>,
) -> io::Result<()> {
    for (index, shell) in table.shells().enumerate() {
        writeln!(out, "{indent}// Shell {index}")?;
        for row in shell.chunks(OFFSETS_PER_LINE) {
            write!(out, "{indent}")?;
            for (column, offset) in row.iter().enumerate() {
                if column > 0 {
                    write!(out, " ")?;
                }
                write_offset(&mut *out, *offset)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::table::{GeneratedTable, LutParams, generate};

    use super::TableEmitter;

    pub fn emit_to_string(emitter: &dyn TableEmitter, radius: i32) -> String {
        let table: GeneratedTable = generate(LutParams::new(radius, 1).unwrap());
        let mut out = Vec::new();
        emitter.emit(&table, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }
}
