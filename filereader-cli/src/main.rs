//! filereader: read text, XML and JSON files with optional decryption and
//! role-based authorization.
//!
//! Usage:
//!   filereader                                  # interactive menu
//!   filereader read notes.txt
//!   filereader read report.xml --format xml --decrypt --role user --policy access.toml

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filereader_cli::{build_reader, render_document, render_error, run_interactive};
use filereader_core::{Format, ReadRequest};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "filereader")]
#[command(about = "Read text, XML and JSON files with optional decryption and role checks")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Access policy file (TOML) listing paths non-admin roles may read
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    /// Additional path non-admin roles may read (repeatable)
    #[arg(long = "allow", global = true)]
    allow: Vec<String>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Menu-driven session (default)
    Interactive,

    /// Read a single file and print it
    Read {
        path: String,

        /// text, xml or json
        #[arg(short, long, default_value = "text")]
        format: Format,

        /// Decrypt the content with the reverse transform before parsing
        #[arg(long)]
        decrypt: bool,

        /// Authorize the read for this role
        #[arg(long)]
        role: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let reader = build_reader(args.policy.as_deref(), &args.allow);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            info!("Starting interactive session");
            run_interactive(&reader, std::io::stdin().lock(), std::io::stdout()).await?;
        }
        Command::Read {
            path,
            format,
            decrypt,
            role,
        } => {
            let mut request = ReadRequest::new(format, path);
            if decrypt {
                request = request.encrypted();
            }
            if let Some(role) = role {
                request = request.authorized_as(role);
            }

            match reader.read_async(&request).await {
                Ok(doc) => println!("{}", render_document(&doc)),
                Err(err) => {
                    eprintln!("{}", render_error(&err));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
