use std::path::PathBuf;

use generator::{config::lut_config::LutConfig, emit::TableFormat};

// Chunks within this many chunks of the viewer are considered for loading
const CHUNK_LOAD_RADIUS: i32 = 16;

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());

    let config = LutConfig {
        radius: CHUNK_LOAD_RADIUS,
        shell_start_radius: 1,
        alignment: 64,
        format: TableFormat::Rust,
        output_path: out_dir.join("chunk_lut.gen.rs"),
        cpp_interop: None,
    };

    generator::write_table(&config).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
