use std::sync::Arc;

use canvas_backend_config::utils::initialization::{init_env, init_tracing, report};
use canvas_backend_config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the configuration before logging so the configured level applies
    let (config, env_status) = init_env();
    let config: Arc<Config> = Arc::new(config);

    init_tracing(config.log_level());
    report(&config, &env_status);

    println!("{}", serde_json::to_string_pretty(config.as_ref())?);

    Ok(())
}
