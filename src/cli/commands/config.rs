use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use crate::cli::parser::Commands;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK / MIGRATE ----
        if *check || *run_migrate {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (run `rtimetracker init`)",
                    path.display()
                ));
                return Ok(());
            }

            if *run_migrate {
                let added = migrate::migrate_file(&path)?;
                if added.is_empty() {
                    info("Configuration is up to date.");
                } else {
                    success(format!("Added missing fields: {}", added.join(", ")));
                }
            } else {
                let missing = migrate::check_file(&path)?;
                if missing.is_empty() {
                    success("Configuration is complete.");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `rtimetracker config --migrate`)",
                        missing.join(", ")
                    ));
                }
            }

            if let Err(e) = cfg.validate() {
                warning(format!("{e} (run `rtimetracker config --edit`)"));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        )),
                        Ok(_) | Err(_) => crate::ui::messages::error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
