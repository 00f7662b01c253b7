//! learnboard CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::{CommandFactory, Parser, Subcommand};
use learnboard::commands::{
    config_display_command, config_reset_command, config_set_command, login_command,
    logout_command, progress_command, projects_command, select_command, session_command,
    show_command, unselect_command, OutputFormat,
};
use learnboard::completion::{print_completion_script, ShellType};
use learnboard::config::{config_path, get_effective_config};
use learnboard::logging::init_logging;
use learnboard::output::print_error;
use learnboard::{Result, SessionStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "learnboard")]
#[command(
    version,
    about = "Terminal dashboard for practice backend projects",
    after_help = "EXAMPLES:
    # Task-by-task progress for one project
    learnboard progress redis-clone.json

    # Catalog grouped by project, one stack variant shown per group
    learnboard projects catalog.json

    # Always show the Go variant of \"Rate Limiter\"
    learnboard select catalog.json \"Rate Limiter\" rl-go

SNAPSHOTS:
    Snapshot files are JSON exports from the platform API. Bare file names
    that do not exist in the current directory are looked up in data_dir."
)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-task test results and overall completion for a project
    Progress {
        /// Progress snapshot (tasks and test outcomes)
        file: PathBuf,

        /// Print the computed view as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the catalog grouped by project with the displayed stack variant
    #[command(after_help = "MARKERS:
    >  default variant (started and most recently run, else newest)
    *  variant pinned with `learnboard select`")]
    Projects {
        /// Catalog snapshot (catalog and owned projects)
        file: PathBuf,

        /// Print the groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pin the stack variant shown for a project
    Select {
        /// Catalog snapshot used to check the variant exists
        file: PathBuf,

        /// Project name as shown by `learnboard projects`
        group: String,

        /// Project id of the variant to show
        project_id: String,
    },

    /// Remove a pinned variant, restoring the default
    Unselect {
        /// Project name as shown by `learnboard projects`
        group: String,
    },

    /// Show one task with its write-up
    Show {
        /// Progress snapshot containing the task
        file: PathBuf,

        /// Task id
        task_id: String,
    },

    /// View, modify, or reset configuration values
    #[command(after_help = "VALID KEYS:
    progress_bar_width  - Width of progress bars (1-120)
    log_level           - error, warn, info, debug or trace
    data_dir            - Directory searched for snapshot files (empty to unset)
    content_dir         - Directory of <task_id>.md write-ups (empty to unset)")]
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },

    /// Show the local session and pinned variants
    Session,

    /// Record the user the local session belongs to
    Login {
        /// Platform user id
        user_id: String,
    },

    /// Clear the local session, including pinned variants
    Logout,

    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// Shell type to generate completions for (bash, zsh, or fish)
        shell: String,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Set a configuration value
    Set { key: String, value: String },

    /// Reset configuration to default values
    Reset,
}

fn format_flag(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn run(cli: Cli) -> Result<()> {
    // Config and completions must work even when the config file is broken
    match &cli.command {
        Commands::Config { subcommand } => {
            init_logging(cli.verbose, "warn");
            let path = config_path()?;
            return match subcommand {
                None => config_display_command(&path),
                Some(ConfigSubcommand::Set { key, value }) => config_set_command(&path, key, value),
                Some(ConfigSubcommand::Reset) => config_reset_command(&path),
            };
        }
        Commands::Completions { shell } => {
            let shell = ShellType::from_name(shell)?;
            print_completion_script(shell, &mut Cli::command());
            return Ok(());
        }
        _ => {}
    }

    let config = get_effective_config()?;
    init_logging(cli.verbose, &config.log_level);
    let store = SessionStore::new()?;

    match cli.command {
        Commands::Progress { file, json } => progress_command(&config, &file, format_flag(json)),
        Commands::Projects { file, json } => {
            projects_command(&config, &store, &file, format_flag(json))
        }
        Commands::Select {
            file,
            group,
            project_id,
        } => select_command(&config, &store, &file, &group, &project_id),
        Commands::Unselect { group } => unselect_command(&store, &group),
        Commands::Show { file, task_id } => show_command(&config, &file, &task_id),
        Commands::Session => session_command(&store),
        Commands::Login { user_id } => login_command(&store, &user_id),
        Commands::Logout => logout_command(&store),
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_progress_with_json() {
        let cli = Cli::try_parse_from(["learnboard", "progress", "p.json", "--json"]).unwrap();
        match cli.command {
            Commands::Progress { file, json } => {
                assert_eq!(file, PathBuf::from("p.json"));
                assert!(json);
            }
            _ => panic!("expected progress"),
        }
    }

    #[test]
    fn test_parse_select() {
        let cli =
            Cli::try_parse_from(["learnboard", "select", "c.json", "Rate Limiter", "rl-go"]).unwrap();
        match cli.command {
            Commands::Select {
                group, project_id, ..
            } => {
                assert_eq!(group, "Rate Limiter");
                assert_eq!(project_id, "rl-go");
            }
            _ => panic!("expected select"),
        }
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from(["learnboard", "login", "user-1"]).unwrap();
        match cli.command {
            Commands::Login { user_id } => assert_eq!(user_id, "user-1"),
            _ => panic!("expected login"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["learnboard", "session", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["learnboard"]).is_err());
    }
}
