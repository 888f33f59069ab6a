use crate::config::AppConfig;

/// Routes `log` records to the browser console at the configured level
pub fn init(config: &AppConfig) {
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::debug!("logger ready ({}, level {})", config.environment, config.log_level);
}
