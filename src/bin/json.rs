//! Decode a save and write the whole game graph to stdout as JSON.
//!
//! The screenshot is omitted. Pass `--pretty` for indented output.

use std::error;
use std::io::{self, BufWriter, Write};

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    let (file_path, pretty) = match args.as_slice() {
        [_, path] => (path, false),
        [_, flag, path] if flag == "--pretty" => (path, true),
        _ => {
            eprintln!("Usage: {} [--pretty] <file>", args[0]);
            std::process::exit(1);
        }
    };

    let save = dsv::from_file(file_path)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if pretty {
        serde_json::to_writer_pretty(&mut out, &save)?;
    } else {
        serde_json::to_writer(&mut out, &save)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
