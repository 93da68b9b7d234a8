use crate::{Error, ErrorKind, Reader, Violation};

/// A value that can be decoded from the front of a save stream
///
/// Implemented for the wire primitives and, through `#[derive(Decode)]`, for
/// every record in the save graph.
pub trait Decode: Sized {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error>;
}

/// Metadata that `#[derive(Decode)]` attaches to a record
pub trait Record: Decode {
    /// Name used in diagnostics
    const NAME: &'static str;

    /// The version tag the record opens with, if it carries one
    const VERSION: Option<i32>;
}

macro_rules! decode_primitive {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Decode for $ty {
                #[inline]
                fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
                    reader.$method()
                }
            }
        )*
    };
}

decode_primitive! {
    u8 => read_u8,
    i8 => read_i8,
    u16 => read_u16,
    i16 => read_i16,
    u32 => read_u32,
    i32 => read_i32,
    u64 => read_u64,
    i64 => read_i64,
    f32 => read_f32,
    f64 => read_f64,
    bool => read_bool,
    String => read_string,
}

/// Reads a version tag of width `T` and fails unless it is `expected`
pub fn check_version<T>(
    reader: &mut Reader<'_>,
    record: &'static str,
    expected: i32,
) -> Result<(), Error>
where
    T: Decode + Into<i32>,
{
    let offset = reader.position();
    let found = T::decode(reader)?.into();
    if found != expected {
        return Err(Error::new(ErrorKind::VersionMismatch {
            record,
            expected,
            found,
            offset,
        }));
    }

    Ok(())
}

/// Reads an `i32` format marker that must hold a fixed value
pub fn read_marker(
    reader: &mut Reader<'_>,
    field: &'static str,
    expected: i32,
) -> Result<i32, Error> {
    let offset = reader.position();
    let found = reader.read_i32()?;
    if found != expected {
        let violation = Violation::Marker {
            field,
            expected,
            found,
        };
        return Err(Error::invariant(violation, offset));
    }

    Ok(found)
}

/// Rejects counts the format caps at `limit`
pub fn check_limit(
    reader: &Reader<'_>,
    field: &'static str,
    count: i32,
    limit: i32,
) -> Result<(), Error> {
    if count > limit {
        let violation = Violation::LimitExceeded {
            field,
            limit,
            found: count,
        };
        return Err(Error::invariant(violation, reader.position()));
    }

    Ok(())
}
