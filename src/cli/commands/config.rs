use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` command
///
/// `--print` shows the active configuration (defaults included), `--edit`
/// opens the configuration file in an editor.
pub fn handle(cmd: &Commands, cfg: &Config, base: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file(base);

        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        if *edit_config {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}. Run `ttrack init` first.",
                    path.display()
                ));
                return Ok(());
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let chosen = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&chosen).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{chosen}'"));
                }
                _ if chosen != default_editor => {
                    warning(format!(
                        "Editor '{chosen}' not available, falling back to '{default_editor}'"
                    ));
                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited using fallback '{default_editor}'"
                        )),
                        _ => error(format!(
                            "Failed to edit configuration file using fallback '{default_editor}'"
                        )),
                    }
                }
                _ => error(format!("Failed to edit configuration file using '{chosen}'")),
            }
        }
    }
    Ok(())
}
