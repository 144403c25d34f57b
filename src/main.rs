use clap::{Arg, ArgAction, ArgMatches, Command};
use log::error;
use std::path::PathBuf;
use std::process;

use pwgate::terminal::{handle_check_command, prompt_check_values, run_form_flow};
use pwgate::utils::logging::initialize_logging;
use pwgate::{FormConfig, FormError, SubmitOutcome};

fn build_cli() -> Command {
    Command::new("pwgate")
        .about("Validate a password update before it is sent anywhere")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON config file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .help("Append logs to this file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log at debug level")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("form").about("Fill in the update-password form interactively"))
        .subcommand(
            Command::new("check")
                .about("Check a password without the interactive form")
                .arg(
                    Arg::new("password")
                        .help("The new password (prompted for without echo when omitted)")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("confirm")
                        .long("confirm")
                        .help("The confirmation value (defaults to the password)")
                        .value_name("VALUE"),
                ),
        )
}

// CLI flags win over the config file
fn load_config(matches: &ArgMatches) -> Result<FormConfig, FormError> {
    let path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let mut config = FormConfig::load_or_default(path)?;

    if let Some(log_file) = matches.get_one::<PathBuf>("log-file") {
        config.log_file = Some(log_file.clone());
    }
    if matches.get_flag("verbose") {
        config.log_level = "debug".to_string();
    }
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<i32, FormError> {
    // Global flags are propagated down, so the innermost matches see them all
    let innermost = matches.subcommand().map(|(_, m)| m).unwrap_or(matches);
    let config = load_config(innermost)?;
    initialize_logging(&config)?;

    match matches.subcommand() {
        Some(("check", sub_matches)) => {
            let outcome = match sub_matches.get_one::<String>("password") {
                Some(password) => {
                    let confirm = sub_matches.get_one::<String>("confirm").map(String::as_str);
                    handle_check_command(password, confirm)
                }
                None => {
                    let (password, confirm) = prompt_check_values()?;
                    handle_check_command(&password, Some(&confirm))
                }
            };

            match outcome {
                SubmitOutcome::Accepted => Ok(0),
                SubmitOutcome::Blocked => Ok(1),
            }
        }
        _ => {
            run_form_flow(&config)?;
            Ok(0)
        }
    }
}

fn main() {
    let matches = build_cli().get_matches();

    match run(&matches) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let matches = build_cli()
            .try_get_matches_from(["pwgate", "check", "Abc123!@", "--log-file", "out.log", "-v"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let config = load_config(sub).unwrap();
        assert_eq!(config.log_file.as_deref(), Some(Path::new("out.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_check_arguments() {
        let matches = build_cli()
            .try_get_matches_from(["pwgate", "check", "Password1", "--confirm", "Password2"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "check");
        assert_eq!(sub.get_one::<String>("password").unwrap(), "Password1");
        assert_eq!(sub.get_one::<String>("confirm").unwrap(), "Password2");
    }

    #[test]
    fn test_check_password_is_optional() {
        let matches = build_cli().try_get_matches_from(["pwgate", "check"]).unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "check");
        assert!(sub.get_one::<String>("password").is_none());
    }
}
