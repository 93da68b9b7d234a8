/*!

A decoder for [Dyson Sphere Program](https://store.steampowered.com/app/1366540/Dyson_Sphere_Program/)
save files (`.dsv`).

A save is a little endian, tightly packed binary stream starting with the
`VFSAVE` signature. After a short header, the entire game is serialized as a
tree of records, each opening with a version tag. This crate decodes that tree
into plain Rust structs.

## Features

- ✔ Strict: every version tag is checked, so a save written by an unsupported
  game version fails loudly instead of producing garbage
- ✔ Diagnostic: errors carry the byte offset and the chain of records being
  decoded
- ✔ Safe: no unsafe code, and hostile counts cannot trigger huge allocations
- ✔ Serializable: enable the `serde` feature to serialize the decoded graph

## Quick Start

```rust,no_run
use dsv::SaveDecoder;

let save = SaveDecoder::new().decode_file("my-factory.dsv")?;
println!("{} ({})", save.data.game_name, save.header.game_version);
for factory in &save.data.factories {
    for (vein, amount) in factory.planet.vein_totals() {
        println!("planet {}: {} {}", factory.planet_id, vein.display_name(), amount);
    }
}
# Ok::<(), dsv::Error>(())
```

When only the header is needed (eg: to list saves), skip the game data:

```rust,no_run
let data = std::fs::read("my-factory.dsv")?;
let header = dsv::SaveDecoder::new().decode_header(&data)?;
println!("written by {}", header.game_version);
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Errors

Decoding stops at the first problem. The error reports what went wrong and
where:

```rust
let err = dsv::from_slice(b"VFSAVE").unwrap_err();
assert_eq!(
    err.to_string(),
    "unexpected end of stream (needed 8 bytes at offset 6)"
);
```

## One Level Lower

Records are declared with `#[derive(Decode)]` in the order their fields are
written. The same machinery is available for decoding fragments by hand.

```rust
use dsv::{Decode, Reader};

#[derive(Decode, Debug, PartialEq)]
#[dsv(version = 0)]
struct Beacon {
    id: i32,
    #[dsv(prefixed)]
    targets: Vec<i16>,
}

let data = [0, 0, 0, 0, 7, 0, 0, 0, 2, 0, 0, 0, 1, 0, 2, 0];
let mut reader = Reader::new(&data);
let beacon = Beacon::decode(&mut reader).unwrap();
assert_eq!(beacon, Beacon { id: 7, targets: vec![1, 2] });
```

*/

#![forbid(unsafe_code)]

extern crate self as dsv;

mod container;
mod decode;
mod errors;
mod pool;
mod reader;
mod save;
mod schema;

pub use self::container::{read_blob, read_map, read_parallel2, read_parallel3, read_seq, DecodeLen};
pub use self::decode::{check_limit, check_version, read_marker, Decode, Record};
pub use self::errors::*;
pub use self::pool::{
    live, read_dense, read_flag_gated, read_gated, read_index_gated, read_recycle, Gate, Slots,
};
pub use self::reader::Reader;
pub use self::save::*;
pub use self::schema::*;

pub use dsv_derive::Decode;
