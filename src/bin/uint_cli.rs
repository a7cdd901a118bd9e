//! Simple CLI for inspecting engine uint buffers.
//!
//! Usage:
//!   uint_cli encode <n>
//!   uint_cli decode <hex>
//!   uint_cli page <hex>
//!   uint_cli append <hex> <n>...
//!   uint_cli layout
//!
//! Buffers are hex strings in host byte order, as the engine stores them.

use std::env;
use std::process::exit;

use uint_codec::{try_uint, CodecError, Data, Layout, Result, UintData, UintMulti};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: uint_cli <command> [args...]");
        eprintln!("Commands:");
        eprintln!("  encode <n>           - Encode a value as engine uint bytes");
        eprintln!("  decode <hex>         - Decode one engine uint");
        eprintln!("  page <hex>           - List the values in a multi-value page");
        eprintln!("  append <hex> <n>...  - Append values to a page");
        eprintln!("  layout               - Show the compiled-in widths as JSON");
        exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "encode" => {
            if args.len() < 3 {
                eprintln!("Usage: uint_cli encode <n>");
                exit(1);
            }
            let x = parse_value(&args[2]);

            match try_uint(x) {
                Ok(v) => println!("{}", hex::encode(v.as_bytes())),
                Err(e) => fail(e),
            }
        }

        "decode" => {
            if args.len() < 3 {
                eprintln!("Usage: uint_cli decode <hex>");
                exit(1);
            }
            let bytes = parse_hex(&args[2]).unwrap_or_else(|e| fail(e));

            match decode_value(&bytes) {
                Ok(Some(x)) => println!("{}", x),
                Ok(None) => println!("NOT_REPRESENTABLE"),
                Err(e) => fail(e),
            }
        }

        "page" => {
            if args.len() < 3 {
                eprintln!("Usage: uint_cli page <hex>");
                exit(1);
            }
            let bytes = parse_hex(&args[2]).unwrap_or_else(|e| fail(e));
            let page = UintMulti::try_wrap(&bytes).unwrap_or_else(|e| fail(e));

            println!("LEN: {}", page.len());
            println!("STRIDE: {}", page.stride());
            println!("SIZE: {}", page.size());
            for i in 0..page.len() {
                match page.try_get(i) {
                    Ok(x) => println!("{} -> {}", i, x),
                    Err(e) => fail(e),
                }
            }
        }

        "append" => {
            if args.len() < 4 {
                eprintln!("Usage: uint_cli append <hex> <n>...");
                exit(1);
            }
            let bytes = parse_hex(&args[2]).unwrap_or_else(|e| fail(e));
            let mut page = UintMulti::try_wrap(&bytes).unwrap_or_else(|e| fail(e));

            for arg in &args[3..] {
                page = page.try_with(parse_value(arg)).unwrap_or_else(|e| fail(e));
            }

            println!("LEN: {}", page.len());
            println!("{}", hex::encode(page.page()));
        }

        "layout" => match serde_json::to_string_pretty(&Layout::native()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                exit(1);
            }
        },

        _ => {
            eprintln!("Unknown command: {}", command);
            exit(1);
        }
    }
}

fn parse_value(arg: &str) -> usize {
    match arg.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("ERROR: Invalid value: {}", arg);
            exit(1);
        }
    }
}

/// Decode one value. A wrong-length buffer is an error; a value the host
/// cannot hold is `None`.
fn decode_value(bytes: &[u8]) -> Result<Option<usize>> {
    let v = UintData::try_from_bytes(bytes)?;
    Ok(v.try_uint().ok())
}

fn parse_hex(arg: &str) -> Result<Vec<u8>> {
    hex::decode(arg).map_err(|e| CodecError::invalid_hex(e.to_string()))
}

fn fail(err: CodecError) -> ! {
    eprintln!("ERROR: {}", err);
    exit(1);
}
