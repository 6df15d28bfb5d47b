//! BotConfig loading tests. Env-mutating, so serialized.

use std::env;
use std::time::Duration;

use lookup_bot::BotConfig;
use serial_test::serial;

const VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "BOT_TOKEN",
    "WEBHOOK_URL",
    "PORT",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "EXTERNAL_API_TOKEN",
    "API_URL",
    "LOOKUP_LANG",
    "LOOKUP_LIMIT",
    "LOOKUP_TIMEOUT_SECS",
    "REPORT_MAX_LEN",
    "GROUP_ALIASES",
];

fn clear_env() {
    for key in VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
    env::set_var("WEBHOOK_URL", "https://bot.example.com");

    let config = BotConfig::load(None, None, None).unwrap();
    config.validate().unwrap();

    assert_eq!(config.telegram.port, 8080);
    assert_eq!(config.lookup.api_url, "https://leakosintapi.com/");
    assert_eq!(config.lookup.lang, "ru");
    assert_eq!(config.lookup.limit, 300);
    assert_eq!(config.lookup.timeout, Duration::from_secs(10));
    assert_eq!(config.report.max_len, 3500);
    assert_eq!(
        config.report.aliases.display_name("1win"),
        "Professor Anish"
    );
    clear_env();
}

#[test]
#[serial]
fn test_load_config_fails_without_token_or_webhook() {
    clear_env();
    assert!(BotConfig::load(None, None, None).is_err());

    env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
    assert!(BotConfig::load(None, None, None).is_err());

    assert!(BotConfig::load(None, Some("https://bot.example.com".to_string()), None).is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_api_url() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
    env::set_var("WEBHOOK_URL", "https://bot.example.com");
    env::set_var("API_URL", "::not a url::");

    let config = BotConfig::load(None, None, None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_debug_output_hides_secrets() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "123:supersecretbottoken");
    env::set_var("WEBHOOK_URL", "https://bot.example.com");
    env::set_var("EXTERNAL_API_TOKEN", "upstream-secret-token-value");

    let config = BotConfig::load(None, None, None).unwrap();
    let debug = format!("{:?}", config);

    assert!(!debug.contains("supersecretbottoken"));
    assert!(!debug.contains("upstream-secret-token-value"));
    clear_env();
}
