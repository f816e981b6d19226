use canvas_backend_config::{get_config, Config};

// One sequential test: the process environment is shared by every test in this binary.
#[test]
fn api_key_follows_process_environment() {
    std::env::remove_var("GEMINI_API_KEY");

    let config = Config::from_env();
    assert_eq!(config.server_url(), "localhost");
    assert_eq!(config.port(), "8900");
    assert_eq!(config.log_level(), "info");
    assert_eq!(config.api_key(), None);

    std::env::set_var("GEMINI_API_KEY", "xyz");
    let config = Config::from_env();
    assert_eq!(config.api_key(), Some("xyz"));

    // An existing variable is never overridden by a .env file.
    let first = get_config();
    let second = get_config();
    assert_eq!(first, second);
    assert_eq!(first.api_key(), Some("xyz"));
    assert_eq!(first.port(), "8900");

    std::env::remove_var("GEMINI_API_KEY");
}
