use anyhow::Context;
use generator::config::{config_manager::Config, lut_config::LutConfig};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();
    log::info!("Starting chunk LUT generation...");

    let config = LutConfig::load()?;
    log::info!(
        "Generating {:?} table for radius {} (shell start radius {})",
        config.format,
        config.radius,
        config.shell_start_radius
    );

    let summary = generator::write_table(&config)
        .with_context(|| format!("Failed to generate {:?}", config.output_path))?;

    log::info!(
        "Done: {} shells, {} offsets",
        summary.shell_count,
        summary.offset_count
    );

    Ok(())
}
