//! Transmission decoding utility
//! Decodes a hex-encoded transmission and reports its version sum and value

use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};
use transmission_rs::cli::Options;
use transmission_rs::Transmission;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.hex | --example N> [--max-depth N]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} day16_input          # Decode a hex file", args[0]);
        eprintln!("  {} --example 1          # Decode built-in example #1", args[0]);
        std::process::exit(1);
    }

    let options = Options::parse(args.iter().skip(1))?;
    let text = options.input_text()?;

    let transmission = Transmission::from_hex_with_config(&text, options.config())?;
    tracing::info!(
        "Decoded {} packets from {} bytes ({} padding bits)",
        transmission.root().packet_count(),
        transmission.bytes().len(),
        transmission.padding_bits()
    );

    let sum_versions = transmission.version_sum();
    tracing::info!("Part 1: sum of version numbers = {}", sum_versions);

    let result = transmission.evaluate()?;
    tracing::info!("Part 2: result of packet = {}", result);

    println!("{}", sum_versions);
    println!("{}", result);

    Ok(())
}
