//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{Result, SyncError};

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "trackersync", &mut std::io::stdout().lock());

    Ok(())
}

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(SyncError::UnsupportedShell {
            shell: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_known() {
        assert_eq!(parse_shell("bash").unwrap(), clap_complete::Shell::Bash);
        assert_eq!(parse_shell("elvish").unwrap(), clap_complete::Shell::Elvish);
        assert_eq!(parse_shell("fish").unwrap(), clap_complete::Shell::Fish);
        assert_eq!(parse_shell("zsh").unwrap(), clap_complete::Shell::Zsh);
    }

    #[test]
    fn test_parse_shell_pwsh_alias() {
        assert_eq!(parse_shell("pwsh").unwrap(), clap_complete::Shell::PowerShell);
        assert_eq!(
            parse_shell("powershell").unwrap(),
            clap_complete::Shell::PowerShell
        );
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert_eq!(parse_shell("BASH").unwrap(), clap_complete::Shell::Bash);
        assert_eq!(parse_shell("Zsh").unwrap(), clap_complete::Shell::Zsh);
    }

    #[test]
    fn test_parse_shell_unknown() {
        let err = parse_shell("tcsh").unwrap_err();
        assert!(matches!(err, SyncError::UnsupportedShell { .. }));
        assert!(err.to_string().contains("tcsh"));
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(&args).is_ok());
    }
}
