use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{
    emit::{TableEmitter, write_banner, write_shell_rows},
    table::GeneratedTable,
};

/// Engine vector type the C++ consumer converts offsets into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CppInterop {
    pub include: String,
    pub vector_type: String,
}

/// Emits the table as a header-only C++ file.
pub struct CppHeaderEmitter {
    pub alignment: u32,
    pub interop: Option<CppInterop>,
}

impl CppHeaderEmitter {
    fn write_prelude(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "#pragma once")?;
        writeln!(out)?;
        writeln!(out, "#include <cstdint>")?;
        if let Some(interop) = &self.interop {
            writeln!(out, "#include <{}>", interop.include)?;
        }
        writeln!(out)?;

        writeln!(out, "struct ChunkOffset\n{{\n\tint32_t x, y, z;\n}};")?;
        writeln!(out)?;
        writeln!(out, "struct ShellRange\n{{\n\tuint32_t start;\n\tuint32_t end;\n}};")?;
        writeln!(out)?;

        if let Some(CppInterop { vector_type, .. }) = &self.interop {
            writeln!(
                out,
                "inline {vector_type} to_engine_vector(const ChunkOffset &offset)\n{{\n\treturn {vector_type}(offset.x, offset.y, offset.z);\n}}"
            )?;
            writeln!(out)?;
        }

        Ok(())
    }
}

impl TableEmitter for CppHeaderEmitter {
    #[profiling::function]
    fn emit(&self, table: &GeneratedTable, out: &mut dyn Write) -> io::Result<()> {
        let params = table.params();
        let alignment = self.alignment;

        write_banner(out, table)?;
        self.write_prelude(out)?;

        writeln!(out, "static constexpr int32_t CHUNK_LUT_RADIUS = {};", params.radius())?;
        writeln!(
            out,
            "static constexpr int32_t CHUNK_SHELL_START_RADIUS = {};",
            params.shell_start_radius()
        )?;
        writeln!(
            out,
            "static constexpr uint64_t CHUNK_SHELL_RANGE_COUNT = {};",
            table.shell_count()
        )?;
        writeln!(out, "static constexpr uint64_t CHUNK_LUT_LEN = {};", table.len())?;
        writeln!(out)?;

        writeln!(
            out,
            "alignas({alignment}) static constexpr ShellRange CHUNK_SHELL_RANGES[] = {{"
        )?;
        for (index, range) in table.ranges().iter().enumerate() {
            writeln!(
                out,
                "\t{{{}, {}}}, // Shell {index} Count: {}",
                range.start,
                range.end,
                range.len()
            )?;
        }
        writeln!(out, "}};")?;
        writeln!(out)?;

        writeln!(
            out,
            "alignas({alignment}) static constexpr ChunkOffset CHUNK_LUT[] = {{"
        )?;
        write_shell_rows(out, table, "\t", |out, offset| {
            write!(out, "{{{}, {}, {}}},", offset.x(), offset.y(), offset.z())
        })?;
        writeln!(out, "}};")
    }
}
