//! Convert the audio files in a directory to Opus companion encodes.

use clap::Parser;
use tracing::error;

use audiopress_cli::{init_tracing, run, ConvertArgs};
use audiopress_core::Codec;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = ConvertArgs::parse();

    match run(Codec::Opus, args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(2);
        }
    }
}
