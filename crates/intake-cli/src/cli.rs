use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use intake_core::SubmitterIdentity;
use intake_rules::Step;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Prenatal intake questionnaire: validate, walk, and submit documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the empty start-of-wizard document.
    Template,

    /// Check a document and list what blocks it.
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only the rules gating this step (demographics, medical, std_add,
        /// genetics, gsps, review). Without it every scope is checked.
        #[arg(long)]
        step: Option<Step>,

        /// Print violations as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Drive the step gate from the first step and report how far it gets.
    Walk {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check the submitter details collected before the wizard opens.
    CheckIdentity(IdentityArgs),

    /// Walk a document to Review and submit it to an in-memory store.
    Submit {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        identity: IdentityArgs,
    },

    /// Show or initialise the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct IdentityArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,
}

impl From<IdentityArgs> for SubmitterIdentity {
    fn from(args: IdentityArgs) -> Self {
        SubmitterIdentity::new(args.first_name, args.last_name, args.email)
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective config and where it was read from.
    Show,
    /// Write the effective config back, migrated to the current version.
    Init,
}
