//! Config subcommand handlers.

use fpp_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, OutputFormat};
use crate::error::CliError;
use crate::output;

fn config_detail(cfg: &Config) -> String {
    let default = cfg.default_profile.as_deref().unwrap_or("default");
    let mut lines = vec![
        format!("Default profile: {default}"),
        format!("Output:          {}", cfg.defaults.output),
        format!("Timeout:         {}s", cfg.defaults.timeout),
    ];
    if cfg.profiles.is_empty() {
        lines.push("Profiles:        (none)".into());
    } else {
        lines.push("Profiles:".into());
        for (name, profile) in &cfg.profiles {
            let marker = if name == default { " *" } else { "" };
            let timeout = profile
                .timeout
                .map_or_else(String::new, |t| format!(" (timeout {t}s)"));
            lines.push(format!("  {name}{marker}: {}{timeout}", profile.host));
        }
    }
    lines.join("\n")
}

pub fn handle(args: ConfigArgs, format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = fpp_config::load_config()?;
            let out = output::render_single(format, &cfg, config_detail, |c| {
                c.profiles.keys().cloned().collect::<Vec<_>>().join("\n")
            })?;
            output::print_output(&out, quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", fpp_config::config_path().display());
            Ok(())
        }

        ConfigCommand::AddProfile {
            name,
            address,
            profile_timeout,
            default,
        } => {
            // Reject unusable addresses before anything is written.
            fpp_config::normalize_host(&address)?;
            if profile_timeout == Some(0) {
                return Err(CliError::Validation {
                    field: "profile-timeout".into(),
                    reason: "must be at least one second".into(),
                });
            }

            let mut cfg = fpp_config::load_config()?;
            cfg.profiles.insert(
                name.clone(),
                Profile {
                    host: address,
                    timeout: profile_timeout,
                },
            );
            if default || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(name.clone());
            }

            let path = fpp_config::save_config(&cfg)?;
            output::confirm(
                &format!("Profile '{name}' written to {}", path.display()),
                quiet,
            );
            Ok(())
        }
    }
}
