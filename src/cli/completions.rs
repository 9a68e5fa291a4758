use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mgs-build completions bash > ~/.bash_completion.d/mgs-build\n\n\
                  Generate zsh completions:\n    mgs-build completions zsh > ~/.zfunc/_mgs-build\n\n\
                  Generate fish completions:\n    mgs-build completions fish > ~/.config/fish/completions/mgs-build.fish\n\n\
                  Generate PowerShell completions:\n    mgs-build completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
