use std::io::{self, Write};

use crate::{
    emit::{TableEmitter, write_banner, write_shell_rows},
    table::GeneratedTable,
};

const RECORD_TYPES: &str = "\
/// Chunk offset relative to the viewer's chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct ChunkOffset {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkOffset {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        ChunkOffset { x, y, z }
    }
}

/// Half-open range of one shell in `CHUNK_LUT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct ShellRange {
    pub start: u32,
    pub end: u32,
}
";

/// Emits the table as Rust items for `include!`.
pub struct RustSourceEmitter {
    pub alignment: u32,
}

impl TableEmitter for RustSourceEmitter {
    #[profiling::function]
    fn emit(&self, table: &GeneratedTable, out: &mut dyn Write) -> io::Result<()> {
        let params = table.params();
        write_banner(out, table)?;

        writeln!(out, "{RECORD_TYPES}")?;
        writeln!(out, "#[repr(C, align({}))]", self.alignment)?;
        writeln!(out, "pub struct LutAligned<T>(pub T);")?;
        writeln!(out)?;

        writeln!(out, "pub const CHUNK_LUT_RADIUS: i32 = {};", params.radius())?;
        writeln!(
            out,
            "pub const CHUNK_SHELL_START_RADIUS: i32 = {};",
            params.shell_start_radius()
        )?;
        writeln!(
            out,
            "pub const CHUNK_SHELL_RANGE_COUNT: usize = {};",
            table.shell_count()
        )?;
        writeln!(out, "pub const CHUNK_LUT_LEN: usize = {};", table.len())?;
        writeln!(out)?;

        writeln!(
            out,
            "pub static CHUNK_SHELL_RANGES: LutAligned<[ShellRange; CHUNK_SHELL_RANGE_COUNT]> = LutAligned(["
        )?;
        for (index, range) in table.ranges().iter().enumerate() {
            writeln!(
                out,
                "    ShellRange {{ start: {}, end: {} }}, // Shell {index} Count: {}",
                range.start,
                range.end,
                range.len()
            )?;
        }
        writeln!(out, "]);")?;
        writeln!(out)?;

        writeln!(
            out,
            "pub static CHUNK_LUT: LutAligned<[ChunkOffset; CHUNK_LUT_LEN]> = LutAligned(["
        )?;
        write_shell_rows(out, table, "    ", |out, offset| {
            write!(
                out,
                "ChunkOffset::new({}, {}, {}),",
                offset.x(),
                offset.y(),
                offset.z()
            )
        })?;
        writeln!(out, "]);")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_utils::emit_to_string;

    #[test]
    fn test_radius_one_source() {
        let source = emit_to_string(&RustSourceEmitter { alignment: 64 }, 1);

        assert!(source.starts_with("// Generated file, DO NOT EDIT!\n"));
        assert!(source.contains("// Generated for radius 1 with shell start radius 1\n"));
        assert!(source.contains("#[repr(C, align(64))]\npub struct LutAligned<T>(pub T);"));
        assert!(source.contains("pub const CHUNK_SHELL_RANGE_COUNT: usize = 2;"));
        assert!(source.contains("pub const CHUNK_LUT_LEN: usize = 7;"));
        assert!(source.contains(
            "    ShellRange { start: 0, end: 1 }, // Shell 0 Count: 1\n    ShellRange { start: 1, end: 7 }, // Shell 1 Count: 6\n"
        ));
        assert!(source.contains(
            "    // Shell 1\n    ChunkOffset::new(-1, 0, 0), ChunkOffset::new(0, -1, 0), ChunkOffset::new(0, 0, -1), \
             ChunkOffset::new(0, 0, 1), ChunkOffset::new(0, 1, 0), ChunkOffset::new(1, 0, 0),\n"
        ));
    }

    #[test]
    fn test_alignment_is_configurable() {
        let source = emit_to_string(&RustSourceEmitter { alignment: 128 }, 2);
        assert!(source.contains("#[repr(C, align(128))]"));
    }

    #[test]
    fn test_rows_are_wrapped() {
        let source = emit_to_string(&RustSourceEmitter { alignment: 64 }, 3);
        let widest_row = source
            .lines()
            .filter(|line| line.trim_start().starts_with("ChunkOffset::new"))
            .map(|line| line.matches("ChunkOffset::new").count())
            .max();
        assert_eq!(widest_row, Some(8));
    }
}
