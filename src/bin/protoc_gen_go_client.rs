//! protoc-gen-go-client: Go client facade generator
//!
//! protoc plugin that merges every service in the requested `.proto` files
//! into one Go `Client` interface with a `New` factory and per-method
//! call-option wrappers.
//!
//! ## Usage
//! ```text
//! protoc --go-client_out=. --go-client_opt=package=client api/*.proto
//! ```
//!
//! ## Configuration
//! - PROTOC_GEN_GO_CLIENT_LOG: tracing filter (default: warn)
//! - PROTOC_GEN_GO_CLIENT_CONFIG: YAML file with generator settings (optional)
//! - PROTOC_GEN_GO_CLIENT__<SETTING>: per-setting override

use std::io::{Read, Write};

use protoc_gen_go_client::plugin;
use protoc_gen_go_client::utils::bootstrap::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;

    let output = plugin::run(&input)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}
