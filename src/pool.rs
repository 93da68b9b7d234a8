//! The object pool idiom that most collections in a save are stored with.
//!
//! A pool is written as a `capacity`, a `cursor` and a `recycle cursor`
//! (in an order that varies by record), followed by the slots and then the
//! ids of recycled slots. Slot zero is never written, so a pool usually holds
//! `cursor - 1` slots. Slots are either always present (dense) or preceded by
//! a gate that says whether the slot is occupied.

use crate::{container::read_seq, Decode, Error, Reader, Violation};
use std::convert::TryFrom;

/// How the presence of each slot is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// An `i32` index precedes each slot. Zero means the slot is empty,
    /// otherwise the index is retained along with the record.
    Index,

    /// An `i32` flag precedes each slot. Zero means the slot is empty,
    /// otherwise only the record is retained.
    Flag,

    /// Every slot holds a record
    Dense,
}

/// The occupied slots of a gated pool in the order they were encountered.
///
/// For index gated pools, `indices[i]` is the index that preceded
/// `records[i]`. Other gates leave `indices` empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Slots<T> {
    pub indices: Vec<i32>,
    pub records: Vec<T>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Slots {
            indices: Vec::new(),
            records: Vec::new(),
        }
    }
}

impl<T> Slots<T> {
    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the occupied slots alongside their index
    pub fn iter(&self) -> impl Iterator<Item = (i32, &T)> + '_ {
        self.indices.iter().copied().zip(self.records.iter())
    }

    /// Looks up the record that was stored under the given slot index
    pub fn get(&self, index: i32) -> Option<&T> {
        self.iter().find(|(i, _)| *i == index).map(|(_, x)| x)
    }
}

/// Number of slots a pool with the given cursor holds
#[inline]
pub const fn live(cursor: i32) -> i32 {
    cursor.saturating_sub(1)
}

/// Reads `count` slots under the given gate, decoding each occupied slot with
/// `element`. A negative count reads nothing.
pub fn read_gated<'a, T, F>(
    reader: &mut Reader<'a>,
    count: i32,
    gate: Gate,
    mut element: F,
) -> Result<Slots<T>, Error>
where
    F: FnMut(&mut Reader<'a>) -> Result<T, Error>,
{
    if gate == Gate::Dense {
        let records = read_seq(reader, count, element)?;
        return Ok(Slots {
            indices: Vec::new(),
            records,
        });
    }

    let mut slots = Slots::default();
    for _ in 0..count.max(0) {
        let gate_value = reader.read_i32()?;
        if gate_value == 0 {
            continue;
        }

        if gate == Gate::Index {
            slots.indices.push(gate_value);
        }
        slots.records.push(element(reader)?);
    }

    log::trace!(
        "{:?} gated pool: {} of {} slots occupied",
        gate,
        slots.len(),
        count
    );
    Ok(slots)
}

/// Slots preceded by an index, where a zero index is an empty slot
pub fn read_index_gated<T: Decode>(reader: &mut Reader<'_>, count: i32) -> Result<Slots<T>, Error> {
    read_gated(reader, count, Gate::Index, T::decode)
}

/// Slots preceded by a presence flag, where a zero flag is an empty slot
pub fn read_flag_gated<T: Decode>(reader: &mut Reader<'_>, count: i32) -> Result<Vec<T>, Error> {
    read_gated(reader, count, Gate::Flag, T::decode).map(|x| x.records)
}

/// Slots that are all occupied
pub fn read_dense<T: Decode>(reader: &mut Reader<'_>, count: i32) -> Result<Vec<T>, Error> {
    read_gated(reader, count, Gate::Dense, T::decode).map(|x| x.records)
}

/// Reads the ids of recycled slots. A negative recycle cursor means the pool
/// bookkeeping is corrupt.
pub fn read_recycle(
    reader: &mut Reader<'_>,
    count: i32,
    field: &'static str,
) -> Result<Vec<i32>, Error> {
    if usize::try_from(count).is_err() {
        let violation = Violation::NegativeLength { field, len: count };
        return Err(Error::invariant(violation, reader.position()));
    }

    read_seq(reader, count, |r| r.read_i32())
}
