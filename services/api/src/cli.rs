use crate::demo::{run_assess, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use epsa::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ePSA Screening Calculator",
    about = "Serve the ePSA screening calculator or score assessments from the command line",
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
    /// Score assessment requests from a JSON file and optionally export them as CSV
    Assess(AssessArgs),
    /// Walk through the documented reference patients
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["epsa-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_accepts_input_and_csv_paths() {
        let cli = Cli::try_parse_from([
            "epsa-api",
            "assess",
            "--input",
            "requests.json",
            "--csv",
            "out.csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.input, PathBuf::from("requests.json"));
                assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn serve_port_must_be_numeric() {
        assert!(Cli::try_parse_from(["epsa-api", "serve", "--port", "http"]).is_err());
    }
}
