fn main() {
    if let Err(e) = power_fitness_pwa::bootstrap::start() {
        log::error!("❌ Startup failed: {}", e);
    }
}
