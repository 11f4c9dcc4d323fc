//! Shell completions command - Generate shell completion scripts

use std::io;

use clap::Command;
use clap_complete::{generate, shells};
use colored::Colorize;
use serde::Serialize;

use crate::output::{CsvOutput, Output, OutputConfig, Outputter};

const BIN: &str = "payscope";

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

/// Instructions for installing completions
#[derive(Debug, Serialize)]
pub struct CompletionInstructions {
    pub shell: String,
    pub instructions: Vec<String>,
}

impl Outputter for CompletionInstructions {
    fn to_table(&self, config: &OutputConfig) -> String {
        let (title, label) = if config.use_colors() {
            (
                format!("{} completions for {}", BIN.cyan().bold(), self.shell.yellow()),
                "Installation:".cyan().bold().to_string(),
            )
        } else {
            (
                format!("{} completions for {}", BIN, self.shell),
                "Installation:".to_string(),
            )
        };

        let mut lines = vec![title, String::new(), label];
        lines.extend(self.instructions.iter().map(|i| format!("  {}", i)));
        lines.join("\n")
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .instructions
            .iter()
            .map(|i| vec![self.shell.clone(), i.clone()])
            .collect();
        CsvOutput::from_rows(&["shell", "instruction"], &rows)
    }
}

/// Get installation instructions for a shell
fn get_instructions(shell: Shell) -> Vec<String> {
    let lines: &[&str] = match shell {
        Shell::Bash => &[
            "# Add to ~/.bashrc:",
            "eval \"$(payscope completions bash)\"",
            "",
            "# Or save to a file:",
            "payscope completions bash > ~/.local/share/bash-completion/completions/payscope",
        ],
        Shell::Zsh => &[
            "# Add to ~/.zshrc:",
            "eval \"$(payscope completions zsh)\"",
            "",
            "# Or save to a file in fpath:",
            "payscope completions zsh > ~/.zfunc/_payscope",
        ],
        Shell::Fish => &[
            "# Save to fish completions directory:",
            "payscope completions fish > ~/.config/fish/completions/payscope.fish",
        ],
        Shell::PowerShell => &[
            "# Add to $PROFILE:",
            "Invoke-Expression (& payscope completions powershell | Out-String)",
        ],
        Shell::Elvish => &[
            "# Add to ~/.elvish/rc.elv:",
            "eval (payscope completions elvish | slurp)",
        ],
    };
    lines.iter().map(|l| l.to_string()).collect()
}

/// Write the completion script for `shell` to stdout.
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    let out = &mut io::stdout();
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, BIN, out),
        Shell::Zsh => generate(shells::Zsh, cmd, BIN, out),
        Shell::Fish => generate(shells::Fish, cmd, BIN, out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, BIN, out),
        Shell::Elvish => generate(shells::Elvish, cmd, BIN, out),
    }
}

/// Print either the completion script or how to install it.
pub fn run(
    shell: Shell,
    show_instructions: bool,
    cmd: &mut Command,
    config: &OutputConfig,
) -> anyhow::Result<()> {
    if show_instructions {
        let instructions = CompletionInstructions {
            shell: shell.to_string(),
            instructions: get_instructions(shell),
        };
        Output::new(instructions, config).render()
    } else {
        generate_completions(shell, cmd);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_display() {
        assert_eq!(Shell::Bash.to_string(), "bash");
        assert_eq!(Shell::PowerShell.to_string(), "powershell");
    }

    #[test]
    fn test_get_instructions() {
        let bash = get_instructions(Shell::Bash);
        assert!(bash.iter().any(|i| i.contains("bashrc")));

        let fish = get_instructions(Shell::Fish);
        assert!(fish.iter().any(|i| i.contains("payscope.fish")));
    }
}
