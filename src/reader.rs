use crate::Error;

#[inline]
fn get_split<const N: usize>(data: &[u8]) -> Option<([u8; N], &[u8])> {
    if data.len() < N {
        return None;
    }

    let (head, rest) = data.split_at(N);
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    Some((out, rest))
}

/// A forward only cursor over a little endian, packed byte stream
///
/// ```rust
/// use dsv::Reader;
///
/// let data = [0x2a, 0x00, 0x00, 0x00, 0x01, 0x03, b'a', b'b', b'c'];
/// let mut reader = Reader::new(&data);
/// assert_eq!(reader.read_i32().unwrap(), 42);
/// assert_eq!(reader.read_bool().unwrap(), true);
/// assert_eq!(reader.read_string().unwrap(), "abc");
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    original_length: usize,
}

macro_rules! read_le {
    ($($name:ident => $ty:ty : $width:literal),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&mut self) -> Result<$ty, Error> {
                let (head, rest) =
                    get_split::<$width>(self.data).ok_or_else(|| self.eof_error($width))?;
                self.data = rest;
                Ok(<$ty>::from_le_bytes(head))
            }
        )*
    };
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of the data
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Reader {
            data,
            original_length: data.len(),
        }
    }

    /// Returns the byte offset of the next read
    #[inline]
    pub fn position(&self) -> usize {
        self.original_length - self.data.len()
    }

    /// Returns the data that has yet to be read
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        self.data
    }

    /// Returns true once every byte has been read
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn eof_error(&self, needed: usize) -> Error {
        Error::eof(self.position(), needed)
    }

    /// Reads exactly `len` bytes
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if len > self.data.len() {
            return Err(self.eof_error(len));
        }

        let (head, rest) = self.data.split_at(len);
        self.data = rest;
        Ok(head)
    }

    /// Reads a fixed number of bytes
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let (head, rest) = get_split::<N>(self.data).ok_or_else(|| self.eof_error(N))?;
        self.data = rest;
        Ok(head)
    }

    read_le! {
        read_u8 => u8 : 1,
        read_i8 => i8 : 1,
        read_u16 => u16 : 2,
        read_i16 => i16 : 2,
        read_u32 => u32 : 4,
        read_i32 => i32 : 4,
        read_u64 => u64 : 8,
        read_i64 => i64 : 8,
        read_f32 => f32 : 4,
        read_f64 => f64 : 8,
    }

    /// A single byte where any nonzero value is true
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        self.read_u8().map(|x| x != 0)
    }

    /// A string with a one byte length prefix. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn read_string(&mut self) -> Result<String, Error> {
        let start = self.position();
        let len = usize::from(self.read_u8()?);
        if len > self.data.len() {
            return Err(Error::eof(start, len + 1));
        }

        let text = self.read_bytes(len)?;
        Ok(String::from_utf8_lossy(text).into_owned())
    }
}
