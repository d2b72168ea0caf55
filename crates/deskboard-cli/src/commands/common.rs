use std::io::{self, Write};

use chrono::{TimeZone, Utc};
use deskboard_core::config::StoreConfig;

use crate::error::CliError;

/// Merge command-line overrides with the environment-resolved store config.
pub fn resolve_store_config(store_url: Option<String>, token: Option<String>) -> StoreConfig {
    let env = StoreConfig::from_env();
    StoreConfig::from_values(store_url.or(env.endpoint), token.or(env.token))
}

/// Join word arguments into one trimmed text, `None` when blank.
pub fn joined_text(parts: &[String]) -> Option<String> {
    let text = parts.join(" ");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Destructive-action confirmation prompt.
///
/// Returns `true` without prompting when `assume_yes` is set.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, CliError> {
    if assume_yes {
        return Ok(true);
    }

    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Render a Unix-ms creation marker as a readable UTC timestamp.
pub fn format_timestamp(millis: i64) -> String {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map_or_else(|| millis.to_string(), |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Print a serializable value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
