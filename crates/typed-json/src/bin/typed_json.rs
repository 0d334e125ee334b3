//! `typed-json` — decode a document, optionally select a value, re-encode it.
//!
//! Usage:
//!   typed-json [--sort-keys] [--pretty] [<pointer>]
//!
//! The document is read from stdin. The optional argument is a JSON Pointer.
//! Set `RUST_LOG=debug` to see decoder diagnostics on stderr.

use std::io::{self, Read, Write};
use std::process::exit;

use tracing_subscriber::EnvFilter;
use typed_json::{decode, encode, EncodeOptions};

const USAGE: &str = "usage: typed-json [--sort-keys] [--pretty] [<pointer>]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut options = EncodeOptions::default();
    let mut pointer: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--sort-keys" {
            options.sort_keys = true;
        } else if arg == "--pretty" {
            options.pretty = true;
        } else if arg == "-h" || arg == "--help" {
            println!("{USAGE}");
            return;
        } else if pointer.is_none() && (arg.is_empty() || arg.starts_with('/')) {
            pointer = Some(arg);
        } else {
            eprintln!("{USAGE}");
            exit(2);
        }
    }

    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        exit(1);
    }

    let doc = match decode(&buf) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    let selected = match pointer.as_deref() {
        Some(p) => match doc.pointer(p) {
            Some(v) => v,
            None => {
                eprintln!("NOT_FOUND: {p}");
                exit(1);
            }
        },
        None => &doc,
    };

    let mut out = encode(selected, &options);
    out.push(b'\n');
    if let Err(e) = io::stdout().write_all(&out) {
        eprintln!("{e}");
        exit(1);
    }
}
