use crate::{Decode, Error, Reader, Violation};
use std::collections::BTreeMap;
use std::convert::TryFrom;

/// Capacity to reserve for `count` elements without trusting the count
/// further than the bytes that remain could satisfy.
#[inline]
fn capacity(reader: &Reader<'_>, count: usize) -> usize {
    count.min(reader.remainder().len())
}

#[inline]
fn count_or_empty(count: i32) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// A collection whose element count is supplied by an earlier field
pub trait DecodeLen: Sized {
    fn decode_len(reader: &mut Reader<'_>, len: i32) -> Result<Self, Error>;
}

impl<T: Decode> DecodeLen for Vec<T> {
    fn decode_len(reader: &mut Reader<'_>, len: i32) -> Result<Self, Error> {
        read_seq(reader, len, T::decode)
    }
}

impl<K: Decode + Ord, V: Decode> DecodeLen for BTreeMap<K, V> {
    fn decode_len(reader: &mut Reader<'_>, len: i32) -> Result<Self, Error> {
        read_map(reader, len)
    }
}

/// Invokes `element` exactly `count` times. A negative count is an empty
/// sequence.
pub fn read_seq<'a, T, F>(reader: &mut Reader<'a>, count: i32, mut element: F) -> Result<Vec<T>, Error>
where
    F: FnMut(&mut Reader<'a>) -> Result<T, Error>,
{
    let count = count_or_empty(count);
    let mut out = Vec::with_capacity(capacity(reader, count));
    for _ in 0..count {
        out.push(element(reader)?);
    }
    Ok(out)
}

/// Reads `count` pairs in lockstep: `a0 b0 a1 b1 ...`
pub fn read_parallel2<A, B>(reader: &mut Reader<'_>, count: i32) -> Result<(Vec<A>, Vec<B>), Error>
where
    A: Decode,
    B: Decode,
{
    let count = count_or_empty(count);
    let mut a = Vec::with_capacity(capacity(reader, count));
    let mut b = Vec::with_capacity(capacity(reader, count));
    for _ in 0..count {
        a.push(A::decode(reader)?);
        b.push(B::decode(reader)?);
    }
    Ok((a, b))
}

/// Reads `count` triples in lockstep: `a0 b0 c0 a1 b1 c1 ...`
pub fn read_parallel3<A, B, C>(
    reader: &mut Reader<'_>,
    count: i32,
) -> Result<(Vec<A>, Vec<B>, Vec<C>), Error>
where
    A: Decode,
    B: Decode,
    C: Decode,
{
    let count = count_or_empty(count);
    let mut a = Vec::with_capacity(capacity(reader, count));
    let mut b = Vec::with_capacity(capacity(reader, count));
    let mut c = Vec::with_capacity(capacity(reader, count));
    for _ in 0..count {
        a.push(A::decode(reader)?);
        b.push(B::decode(reader)?);
        c.push(C::decode(reader)?);
    }
    Ok((a, b, c))
}

/// Reads `count` key value pairs. Later duplicates of a key win.
pub fn read_map<K, V>(reader: &mut Reader<'_>, count: i32) -> Result<BTreeMap<K, V>, Error>
where
    K: Decode + Ord,
    V: Decode,
{
    let mut out = BTreeMap::new();
    for _ in 0..count_or_empty(count) {
        let key = K::decode(reader)?;
        let value = V::decode(reader)?;
        out.insert(key, value);
    }
    Ok(out)
}

/// Reads `len` opaque bytes. Unlike sequences, a negative length is an error
/// as it sizes raw data.
pub fn read_blob(reader: &mut Reader<'_>, len: i32, field: &'static str) -> Result<Vec<u8>, Error> {
    let len = usize::try_from(len).map_err(|_| {
        Error::invariant(Violation::NegativeLength { field, len }, reader.position())
    })?;
    reader.read_bytes(len).map(|x| x.to_vec())
}
