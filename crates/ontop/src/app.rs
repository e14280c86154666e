use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("ontop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pin any window above the rest from its system menu")
        .long_about(
            "ontop adds an \"Always on top\" entry to the system menu of every window that \
             receives focus. The entry's checkmark follows the window's stacking state, and \
             clicking it pins or unpins the window. Runs as a single background instance; \
             every injected entry is removed on exit.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        // Run subcommand (default)
        .subcommand(Command::new("run").about(
            "Inject the toggle into focused windows until Ctrl+C (default when no subcommand is given)",
        ))
        // List subcommand
        .subcommand(
            Command::new("list")
                .about("List processes with a visible main window")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("app")
                        .long("app")
                        .short('a')
                        .help("Filter by process name"),
                ),
        )
        // Toggle subcommand
        .subcommand(
            Command::new("toggle")
                .about("Flip the always-on-top state of a process's main window")
                .arg(
                    Arg::new("name")
                        .help("Process name, with or without .exe")
                        .required_unless_present("pid")
                        .conflicts_with("pid"),
                )
                .arg(
                    Arg::new("pid")
                        .long("pid")
                        .short('p')
                        .help("Process id")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        // Config subcommand
        .subcommand(
            Command::new("config")
                .about("Show the effective configuration")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "ontop");
    }

    #[test]
    fn test_cli_no_subcommand_is_run() {
        let matches = build_cli().try_get_matches_from(vec!["ontop"]).unwrap();
        assert!(matches.subcommand().is_none());
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["ontop", "list", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_list_flags() {
        let matches = build_cli()
            .try_get_matches_from(vec!["ontop", "list", "--json", "--app", "notepad"])
            .unwrap();
        let list = matches.subcommand_matches("list").unwrap();
        assert!(list.get_flag("json"));
        assert_eq!(
            list.get_one::<String>("app").map(|s| s.as_str()),
            Some("notepad")
        );
    }

    #[test]
    fn test_cli_toggle_by_name() {
        let matches = build_cli()
            .try_get_matches_from(vec!["ontop", "toggle", "notepad.exe"])
            .unwrap();
        let toggle = matches.subcommand_matches("toggle").unwrap();
        assert_eq!(
            toggle.get_one::<String>("name").map(|s| s.as_str()),
            Some("notepad.exe")
        );
    }

    #[test]
    fn test_cli_toggle_by_pid() {
        let matches = build_cli()
            .try_get_matches_from(vec!["ontop", "toggle", "--pid", "4242"])
            .unwrap();
        let toggle = matches.subcommand_matches("toggle").unwrap();
        assert_eq!(toggle.get_one::<u32>("pid"), Some(&4242));
    }

    #[test]
    fn test_cli_toggle_requires_target() {
        let result = build_cli().try_get_matches_from(vec!["ontop", "toggle"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_toggle_name_conflicts_with_pid() {
        let result =
            build_cli().try_get_matches_from(vec!["ontop", "toggle", "notepad", "--pid", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_toggle_pid_must_be_number() {
        let result = build_cli().try_get_matches_from(vec!["ontop", "toggle", "--pid", "abc"]);
        assert!(result.is_err());
    }
}
