use crate::demo::{
    run_demo, run_pipeline_report, run_prospect_search, DemoArgs, PipelineReportArgs,
    ProspectSearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nexus_crm::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Nexus CRM",
    about = "Run the Nexus sales CRM service or explore its data from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Summarize the deal pipeline
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommand,
    },
    /// Search leads and companies
    Prospects {
        #[command(subcommand)]
        command: ProspectsCommand,
    },
    /// Walk through the seeded workspace: dashboard, prospects, outreach and calendar
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PipelineCommand {
    /// Print per-stage totals and the weighted forecast
    Report(PipelineReportArgs),
}

#[derive(Subcommand, Debug)]
enum ProspectsCommand {
    /// Filter prospects and print one page of results
    Search(ProspectSearchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Start without the demo workspace data
    #[arg(long)]
    pub(crate) empty: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Pipeline {
            command: PipelineCommand::Report(args),
        } => run_pipeline_report(args),
        Command::Prospects {
            command: ProspectsCommand::Search(args),
        } => run_prospect_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
