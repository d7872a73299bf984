use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vvws_cli::{OutputFormat, commands};
use vvws_core::PlatformProfile;

#[derive(Parser)]
#[command(name = "vvws")]
#[command(author, version)]
#[command(
    about = "Launch Vivaldi and switch workspaces using assigned keyboard shortcuts",
    long_about = "vvws starts Vivaldi, sends the keyboard shortcut you assigned to a workspace \
                  and moves to the next tab.",
    after_help = "Requires manual shortcut assignment in Vivaldi Settings and a config file \
                  mapping names to shortcuts (see 'vvws setup-info')."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to the per-user config directory)
    #[arg(short, long, global = true, env = "VVWS_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch Vivaldi and switch to the specified workspace
    Launch {
        /// Exact name of the workspace (must exist in the config file)
        #[arg(value_name = "WORKSPACE_NAME")]
        workspace_name: String,

        /// Path to the Vivaldi executable (skips auto-detection)
        #[arg(long, value_name = "PATH")]
        vivaldi_path: Option<PathBuf>,
    },

    /// List workspaces found in Vivaldi Preferences and mapped in the config
    List {
        /// Vivaldi profile directory containing the Preferences file
        #[arg(long, value_name = "DIR")]
        profile_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show the manual setup steps
    SetupInfo,

    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS:\n  bash, zsh, fish, powershell, elvish\n\n\
                            INSTALLATION:\n  \
                            bash: vvws completion --shell bash >> ~/.bashrc\n  \
                            zsh:  vvws completion --shell zsh > \"${fpath[1]}/_vvws\"\n  \
                            fish: vvws completion --shell fish > ~/.config/fish/completions/vvws.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Create a sample config file if one doesn't exist
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Vivaldi profile directory to read workspace names from
        #[arg(long, value_name = "DIR")]
        profile_dir: Option<PathBuf>,
    },

    /// Show the path to the configuration file
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let platform = PlatformProfile::detect();
    let config_path = cli.config.unwrap_or_else(|| platform.config_path());

    // Execute the command
    match cli.command {
        Commands::Launch {
            workspace_name,
            vivaldi_path,
        } => commands::launch::execute(&workspace_name, &config_path, vivaldi_path, &platform),
        Commands::List {
            profile_dir,
            format,
        } => commands::list::execute(&config_path, profile_dir.as_deref(), format, &platform),
        Commands::Config { action } => match action {
            ConfigCommands::Init { force, profile_dir } => {
                commands::config::init(&config_path, force, profile_dir.as_deref(), &platform)
            }
            ConfigCommands::Path => commands::config::path(&config_path),
        },
        Commands::SetupInfo => commands::setup_info::execute(&config_path, &platform),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("vvws=debug,vvws_cli=debug,vvws_core=debug,vvws_browser=debug")
    } else {
        EnvFilter::new("vvws=info,vvws_cli=info,vvws_core=info,vvws_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
