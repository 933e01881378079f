//! youtune-bridge CLI entry point

use std::env;
use std::io;
use std::process::ExitCode;

use youtune_bridge::cli::{run, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = telemetry::initialise() {
        eprintln!("youtune-bridge: {e}");
    }

    run(env::args_os(), io::stdin(), io::stdout()).await
}
