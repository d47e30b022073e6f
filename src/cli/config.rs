//! CLI commands for configuration
//!
//! Shows the resolved paths and settings, and saves individual settings.

use clap::Subcommand;

use crate::config::settings::SETTING_KEYS;
use crate::config::{FinsightPaths, Settings};
use crate::error::FinsightResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and the settings in effect
    Show,

    /// Save a setting: currency, calendar, page-size or toast-duration
    Set {
        /// Setting name
        key: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Handle config commands
///
/// `effective` is what this run uses, including a `--calendar` override;
/// `set` always edits the saved file.
pub fn handle_config_command(
    paths: &FinsightPaths,
    effective: &Settings,
    cmd: Option<ConfigCommands>,
) -> FinsightResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => print!("{}", format_config(paths, effective)),
        ConfigCommands::Set { key, value } => {
            let mut saved = Settings::load_or_create(paths)?;
            saved.set(&key, &value)?;
            saved.save(paths)?;

            tracing::info!(%key, %value, "setting saved");
            println!("Saved {} = {}", key, value);
        }
    }
    Ok(())
}

fn format_config(paths: &FinsightPaths, settings: &Settings) -> String {
    let mut output = String::from("finsight Configuration\n");
    output.push_str("======================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:    {}\n",
        paths.settings_file().display()
    ));
    output.push_str(&format!(
        "Settings saved:   {}\n",
        if paths.is_initialized() { "yes" } else { "no (defaults)" }
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("  Calendar:        {}\n", settings.calendar));
    output.push_str(&format!("  Page size:       {}\n", settings.page_size));
    output.push_str(&format!(
        "  Toast duration:  {} ms\n",
        settings.toast_duration_ms
    ));
    output.push_str(&format!("\nKeys for 'config set': {}\n", SETTING_KEYS.join(", ")));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists_to_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().join("config"));

        handle_config_command(
            &paths,
            &Settings::default(),
            Some(ConfigCommands::Set {
                key: "page-size".to_string(),
                value: "20".to_string(),
            }),
        )
        .unwrap();

        let saved = Settings::load_or_create(&paths).unwrap();
        assert_eq!(saved.page_size, 20);
        assert_eq!(saved.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_set_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = handle_config_command(
            &paths,
            &Settings::default(),
            Some(ConfigCommands::Set {
                key: "calendar".to_string(),
                value: "+1000000".to_string(),
            }),
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_show_lists_effective_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            calendar: "local".parse().unwrap(),
            ..Settings::default()
        };

        let output = format_config(&paths, &settings);
        assert!(output.contains("Settings saved:   no (defaults)"));
        assert!(output.contains("Calendar:        local"));
        assert!(output.contains("page-size"));
    }
}
