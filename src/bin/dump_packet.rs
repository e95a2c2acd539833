//! Packet tree dump utility
//! Decodes a hex-encoded transmission and prints its packet tree

use std::env;
use transmission_rs::cli::Options;
use transmission_rs::formats::{render_tree, to_json};
use transmission_rs::Transmission;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.hex | --example N> [--json] [--max-depth N]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} day16_input          # Indented tree", args[0]);
        eprintln!("  {} --example 2 --json   # JSON tree of example #2", args[0]);
        std::process::exit(1);
    }

    let options = Options::parse(args.iter().skip(1))?;
    let text = options.input_text()?;

    let transmission = Transmission::from_hex_with_config(&text, options.config())?;

    if options.json {
        println!("{}", to_json(transmission.root())?);
    } else {
        println!(
            "=== {} bytes, {} bits used, {} padding bits ===\n",
            transmission.bytes().len(),
            transmission.bits_used(),
            transmission.padding_bits()
        );
        print!("{}", render_tree(transmission.root()));
    }

    Ok(())
}
