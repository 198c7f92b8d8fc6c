use lzw_text::{decode, Encoder};
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Encodes a text file, verifies the round trip and prints the statistics.
///
/// Usage: cargo run --example main <filename>
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let text = fs::read_to_string(filename).unwrap_or_else(|err| {
        eprintln!("Cannot read \"{}\" as UTF-8 text: {}", filename, err);
        std::process::exit(1);
    });

    let (codes, stats) = Encoder::new().report_details(true).encode_with_stats(&text);

    // Verify by reconstructing
    match decode(&codes) {
        Ok(decoded) if decoded == text => {}
        Ok(decoded) => {
            let position = decoded
                .chars()
                .zip(text.chars())
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| decoded.chars().count().min(text.chars().count()));
            eprintln!("Mismatch at character {}", position);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Decoding failed: {}", err);
            std::process::exit(1);
        }
    }

    println!("\n{}", stats);
}
