use clap::ArgMatches;
use tracing::{error, info, warn};

use ontop_core::OnTopConfig;
use ontop_core::daemon::{DaemonExit, run_daemon};
use ontop_core::events;
use ontop_core::selection::{
    SelectionError, TargetWindow, filter_by_app, find_by_name, find_by_pid, list_targets,
    toggle_target,
};
use ontop_core::window;

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup(matches.subcommand_name().unwrap_or("run"));

    match matches.subcommand() {
        None | Some(("run", _)) => handle_run_command(),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("toggle", sub_matches)) => handle_toggle_command(sub_matches),
        Some(("config", sub_matches)) => handle_config_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load the config hierarchy, falling back to defaults with a warning.
fn load_config_with_warning() -> OnTopConfig {
    match OnTopConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.ontop/config.toml and ./.ontop/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            OnTopConfig::default()
        }
    }
}

fn handle_run_command() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    info!(event = "cli.run_started");

    match run_daemon(&config) {
        Ok(DaemonExit::Completed { events: handled }) => {
            info!(event = "cli.run_completed", events = handled);
            events::log_app_shutdown(handled);
            Ok(())
        }
        Ok(DaemonExit::AlreadyRunning) => {
            println!("ontop is already running.");
            info!(event = "cli.run_already_running");
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to run: {}", e);
            error!(event = "cli.run_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn load_targets() -> Result<Vec<TargetWindow>, SelectionError> {
    let os = window::native()?;
    list_targets(&os)
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let app_filter = matches.get_one::<String>("app");

    info!(
        event = "cli.list_started",
        json_output = json_output,
        app_filter = ?app_filter
    );

    match load_targets() {
        Ok(targets) => {
            let filtered = match app_filter {
                Some(app) => filter_by_app(targets, app),
                None => targets,
            };

            if json_output {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            } else if filtered.is_empty() {
                if app_filter.is_some() {
                    println!("No windows found for app filter.");
                } else {
                    println!("No windows found.");
                }
            } else {
                println!("Windows:");
                table::print_targets_table(&filtered);
            }

            info!(event = "cli.list_completed", count = filtered.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_toggle_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches.get_one::<String>("name");
    let pid = matches.get_one::<u32>("pid").copied();

    info!(event = "cli.toggle_started", name = ?name, pid = ?pid);

    let result = (|| -> Result<(TargetWindow, bool), SelectionError> {
        let os = window::native()?;
        let targets = list_targets(&os)?;
        let found = match (name, pid) {
            (_, Some(pid)) => find_by_pid(&targets, pid),
            (Some(name), None) => find_by_name(&targets, name),
            (None, None) => None,
        };
        let target = found.cloned().ok_or_else(|| SelectionError::TargetNotFound {
            target: describe_target(name, pid),
        })?;
        let topmost = toggle_target(&os, &target)?;
        Ok((target, topmost))
    })();

    match result {
        Ok((target, topmost)) => {
            let verb = if topmost { "Pinned" } else { "Unpinned" };
            println!("{} '{}' (pid {}).", verb, target.name, target.pid);
            info!(
                event = "cli.toggle_completed",
                pid = target.pid,
                topmost = topmost
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to toggle: {}", e);
            error!(event = "cli.toggle_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn describe_target(name: Option<&String>, pid: Option<u32>) -> String {
    match (name, pid) {
        (_, Some(pid)) => format!("pid {}", pid),
        (Some(name), None) => name.clone(),
        (None, None) => String::new(),
    }
}

fn handle_config_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = load_config_with_warning();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    info!(event = "cli.config_completed", json_output = json_output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_target_prefers_pid() {
        let name = "notepad".to_string();
        assert_eq!(describe_target(Some(&name), Some(7)), "pid 7");
        assert_eq!(describe_target(Some(&name), None), "notepad");
    }
}
