//! rrdc CLI Client
//!
//! Command-line interface for talking to rrdcached.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rrdc::{Client, Config, Transport};
use tracing_subscriber::{fmt, EnvFilter};

/// rrdc CLI
#[derive(Parser, Debug)]
#[command(name = "rrdc")]
#[command(about = "CLI for the rrdcached RRD caching daemon")]
#[command(version)]
struct Args {
    /// Daemon address (host[:port], or a socket path with --unix)
    #[arg(short, long, default_value = rrdc::config::DEFAULT_ADDRESS)]
    address: String,

    /// Treat the address as a Unix domain socket path
    #[arg(short, long)]
    unix: bool,

    /// Dial / read / write timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a raw command and print the reply lines
    Exec {
        /// Command verb, e.g. STATS
        verb: String,

        /// Command arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the configuration of an RRD file
    Info {
        /// The RRD file
        file: String,

        /// Collapse into a key map and print it sorted by key
        #[arg(long)]
        map: bool,
    },

    /// List RRD files known to the daemon
    List {
        /// Path prefix
        #[arg(default_value = "/")]
        prefix: String,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rrdc=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let transport = if args.unix {
        Transport::Unix
    } else {
        Transport::Tcp
    };
    let config = Config::builder()
        .address(&args.address)
        .transport(transport)
        .timeout(Duration::from_secs(args.timeout_secs))
        .build();

    let client = match Client::connect(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&client, args.command);
    let closed = client.close();

    match result.and(closed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(client: &Client, command: Commands) -> rrdc::Result<()> {
    match command {
        Commands::Exec { verb, args } => {
            let command = rrdc::protocol::Command::new(verb).args(args);
            for line in client.execute(&command)? {
                println!("{}", line);
            }
        }
        Commands::Info { file, map } => {
            if map {
                let mut entries: Vec<_> = client.info_map(&file)?.into_iter().collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                for (key, value) in entries {
                    println!("{} = {}", key, value);
                }
            } else {
                for entry in client.info(&file)? {
                    println!("{} = {}", entry.key, entry.value);
                }
            }
        }
        Commands::List { prefix } => {
            for line in client.list(&prefix)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
