//! Shell completion scripts.
//!
//! Thin layer over `clap_complete` that maps shell names to generators.

use crate::error::{LearnboardError, Result};
use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Supported shell names, for help text.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    /// Parse a shell name or a shell path such as `/usr/bin/zsh`.
    pub fn from_name(name: &str) -> Result<Self> {
        let shell_name = std::path::Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);

        match shell_name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(LearnboardError::ShellCompletion(format!(
                "Unsupported shell: '{}'. Supported shells are: {}.",
                shell_name,
                SUPPORTED_SHELLS.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Write the completion script for `cmd` into `out`.
pub fn write_completion_script(shell: ShellType, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell.to_clap_shell(), cmd, bin_name, out);
}

/// Print the completion script for `cmd` to stdout.
pub fn print_completion_script(shell: ShellType, cmd: &mut Command) {
    write_completion_script(shell, cmd, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cli() -> Command {
        Command::new("learnboard")
            .subcommand(Command::new("progress"))
            .subcommand(Command::new("projects"))
    }

    #[test]
    fn test_from_name_accepts_names_and_paths() {
        assert_eq!(ShellType::from_name("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_name("/bin/zsh").unwrap(), ShellType::Zsh);
        assert_eq!(
            ShellType::from_name("/usr/local/bin/fish").unwrap(),
            ShellType::Fish
        );
    }

    #[test]
    fn test_from_name_rejects_unknown_shell() {
        let err = ShellType::from_name("tcsh").unwrap_err();
        assert!(err.to_string().contains("Unsupported shell: 'tcsh'"));
    }

    #[test]
    fn test_generated_script_mentions_subcommands() {
        for shell in [ShellType::Bash, ShellType::Zsh, ShellType::Fish] {
            let mut buf = Vec::new();
            write_completion_script(shell, &mut sample_cli(), &mut buf);
            let script = String::from_utf8(buf).unwrap();
            assert!(script.contains("learnboard"), "{} script", shell);
            assert!(script.contains("progress"), "{} script", shell);
        }
    }
}
