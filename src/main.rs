// Entrypoint for the uploader.
// - Keeps `main` small: validate the input file, build the payload, hand it
//   to the API client and print whatever JSON comes back.
// - Returns `anyhow::Result`: any failure is reported on stderr with a
//   non-zero exit and nothing is written to stdout.

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use image_upload::{payload, ApiClient, UploadRequest, DEFAULT_BASE_URL};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "image-upload", version)]
#[command(about = "Upload a local image file to the file server")]
struct Cli {
    /// Path to the local file to upload
    file_path: PathBuf,

    /// Authentication token, sent as the X-Token header
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    token: String,

    /// Identifier of the parent folder on the server
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    parent_id: String,

    /// Base URL of the file server
    #[arg(long, env = "FILES_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Nothing touches the network until the file is known to be readable.
    payload::validate_file(&cli.file_path)?;
    let req = UploadRequest::from_file(&cli.file_path, &cli.parent_id)?;

    let api = ApiClient::new(cli.base_url, &cli.token).context("Failed to build HTTP client")?;
    log::info!("uploading {} to {}", req.name, api.files_url());
    let response = api.upload(&req)?;

    writeln!(std::io::stdout().lock(), "{response}").context("Failed to write response")?;
    Ok(())
}
