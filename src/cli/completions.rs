use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    trackersync completions bash > ~/.bash_completion.d/trackersync\n\n\
                  Generate zsh completions:\n    trackersync completions zsh > ~/.zfunc/_trackersync\n\n\
                  Generate fish completions:\n    trackersync completions fish > ~/.config/fish/completions/trackersync.fish\n\n\
                  Generate PowerShell completions:\n    trackersync completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
