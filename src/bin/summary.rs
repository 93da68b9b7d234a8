//! Print the resources found on each planet with a factory.
//!
//! ```text
//! Successfully parsed save file: Lindholm
//!
//! Factory planet 103
//!     Iron Ore: 1536000
//!     Crude Oil: 1.28
//! ```
//!
//! Pass `--veins` to also list every vein and vein group. Set
//! `RUST_LOG=dsv=debug` to trace the decode.

use dsv::{SaveDecoder, VeinType};
use std::error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    let (file_path, veins) = match args.as_slice() {
        [_, path] => (path, false),
        [_, flag, path] if flag == "--veins" => (path, true),
        _ => {
            eprintln!("Usage: {} [--veins] <file>", args[0]);
            std::process::exit(1);
        }
    };

    let save = match SaveDecoder::new().decode_file(file_path) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("ERROR: Failed to parse save file: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Successfully parsed save file: {}", save.data.game_name)?;
    writeln!(out)?;

    for factory in &save.data.factories {
        writeln!(out, "Factory planet {}", factory.planet_id)?;

        if veins {
            writeln!(out, "  Vein pool:")?;
            for vein in &factory.vein_pool {
                if vein.id != 0 || vein.amount != 0 || vein.kind != VeinType::None {
                    writeln!(
                        out,
                        "    id={}, amount={}, type={}",
                        vein.id,
                        vein.amount,
                        vein.kind.display_name()
                    )?;
                }
            }

            writeln!(out, "  Vein amounts:")?;
        }

        for (vein, amount) in factory.planet.vein_totals() {
            writeln!(
                out,
                "    {}: {}",
                vein.display_name(),
                vein.display_amount(amount)
            )?;
        }

        if veins {
            writeln!(out, "  Vein groups:")?;
            for group in &factory.planet.vein_groups {
                writeln!(
                    out,
                    "    amount={}, count={}, type={}",
                    group.amount,
                    group.count,
                    group.kind.display_name()
                )?;
            }
        }
    }

    Ok(())
}
