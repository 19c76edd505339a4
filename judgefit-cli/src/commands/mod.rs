mod athletes;
mod competitions;
mod config_cmd;
mod login;
mod logout;
mod status;
mod videos;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::context::AppContext;

pub use athletes::AthleteCommand;
pub use competitions::CompetitionCommand;
pub use login::LoginCommand;
pub use logout::LogoutCommand;
pub use status::StatusCommand;
pub use videos::VideoCommand;

#[derive(Parser)]
#[command(name = "judgefit")]
#[command(about = "Manage athletes, competitions and workout videos on JudgeFit", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL, overrides the config file and JUDGEFIT_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Login to JudgeFit
    Login(LoginCommand),

    /// Logout from JudgeFit
    Logout(LogoutCommand),

    /// Show session and connection status
    Status(StatusCommand),

    /// Manage athlete profiles
    #[command(subcommand)]
    Athletes(AthleteCommand),

    /// Manage competitions
    #[command(subcommand)]
    Competitions(CompetitionCommand),

    /// Manage workout video submissions
    #[command(subcommand)]
    Videos(VideoCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let api_url = self.api_url.as_deref();

        match self.command {
            Commands::Login(cmd) => cmd.execute(AppContext::load(api_url)?).await,
            Commands::Logout(cmd) => cmd.execute(AppContext::load(api_url)?),
            Commands::Status(cmd) => cmd.execute(AppContext::load(api_url)?),
            Commands::Athletes(cmd) => cmd.execute(&AppContext::load(api_url)?).await,
            Commands::Competitions(cmd) => cmd.execute(&AppContext::load(api_url)?).await,
            Commands::Videos(cmd) => cmd.execute(&AppContext::load(api_url)?).await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(api_url),
                ConfigSubcommands::Init { force } => config_cmd::init_config(force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
