//! csv-matrix CLI - square matrix operations over CSV files
//!
//! ```bash
//! csv-matrix serve                      # Start HTTP server (port 3000)
//! csv-matrix run sum matrix.csv         # Apply one operation to a local file
//! csv-matrix validate matrix.csv        # Only check the matrix
//! csv-matrix operations                 # List available operations
//! ```

use clap::{Parser, Subcommand};
use csv_matrix::api::log_error;
use csv_matrix::{
    operations_description, process_upload, run_validations, Operation, ServerConfig,
    UploadRequest, UploadedFile,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csv-matrix")]
#[command(about = "Echo, transpose, flatten, sum or multiply square CSV matrices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        #[command(flatten)]
        config: ServerConfig,
    },

    /// Apply an operation to a CSV file and print the result
    Run {
        /// Operation to apply
        #[arg(value_enum)]
        operation: Operation,

        /// Input CSV file
        input: PathBuf,
    },

    /// Validate a CSV matrix without transforming it
    Validate {
        /// Input CSV file
        input: PathBuf,
    },

    /// Show available operations
    Operations,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { config } => cmd_serve(config).await,
        Commands::Run { operation, input } => cmd_run(operation, &input),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Operations => cmd_operations(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = csv_matrix::server::start_server(config).await {
        log_error(format!("Server stopped: {}", e));
        return Err(e.into());
    }
    Ok(())
}

fn load_request(input: &Path) -> Result<UploadRequest, Box<dyn std::error::Error>> {
    let file = UploadedFile::from_path(input)
        .map_err(|e| format!("Cannot read file '{}': {}", input.display(), e))?;
    Ok(UploadRequest::post(file))
}

fn cmd_run(operation: Operation, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let request = load_request(input)?;
    let rendered = process_upload(&request, operation)?.render();

    // Scalars carry no trailing newline of their own
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Validating: {}", input.display());

    let request = load_request(input)?;
    let matrix = run_validations(&request)?;

    eprintln!(
        "✅ Valid {} x {} integer matrix",
        matrix.dimension(),
        matrix.dimension()
    );
    Ok(())
}

fn cmd_operations() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", operations_description());
    Ok(())
}
