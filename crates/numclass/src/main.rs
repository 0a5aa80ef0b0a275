use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod facts;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify numbers by primality, perfection, Armstrong-ness, parity and digit sum"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the numbers trivia API
    #[clap(
        long,
        env = "NUMCLASS_FACTS_API",
        global = true,
        default_value = crate::facts::FACTS_API_BASE
    )]
    facts_api: String,

    /// Whether to display additional information.
    #[clap(long, env = "NUMCLASS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Classify a single number from the command line
    Classify(crate::classify::ClassifyOptions),

    /// Serve the classification API over HTTP
    Serve(crate::serve::ServeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Classify(options) => crate::classify::run(options, app.global).await,
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
    }
}
