use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transit_catalogue::requests::{self, RequestDocument, RequestError};

/// Transit catalogue: build a snapshot, then answer queries from it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load base requests, build the routing graph and save a snapshot
    #[command(name = "make_base")]
    MakeBase {
        /// Request document (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Load a snapshot and answer stat requests as a JSON array
    #[command(name = "process_requests")]
    ProcessRequests {
        /// Request document (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Where to write responses (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn read_document(input: Option<&Path>) -> Result<RequestDocument, RequestError> {
    let document = match input {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            serde_json::from_str(&text)?
        }
    };
    Ok(document)
}

fn run(command: Commands) -> Result<(), RequestError> {
    match command {
        Commands::MakeBase { input } => {
            let document = read_document(input.as_deref())?;
            let network = requests::make_base(&document)?;
            info!(
                stops = network.catalogue().stop_count(),
                buses = network.catalogue().bus_count(),
                edges = network.graph().edge_count(),
                "base built"
            );
        }
        Commands::ProcessRequests { input, output } => {
            let document = read_document(input.as_deref())?;
            let responses = requests::process_requests(&document)?;

            let writer: Box<dyn Write> = match output {
                Some(path) => Box::new(File::create(path)?),
                None => Box::new(io::stdout().lock()),
            };
            let mut writer = BufWriter::new(writer);
            serde_json::to_writer_pretty(&mut writer, &responses)?;
            writeln!(writer)?;
            writer.flush()?;

            info!(responses = responses.len(), "requests processed");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed");
            ExitCode::FAILURE
        }
    }
}
