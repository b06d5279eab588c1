pub mod config_manager;
pub mod lut_config;
