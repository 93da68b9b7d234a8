use crate::{read_blob, Decode, Error, ErrorKind, GameData, Reader, Violation};
use std::convert::TryFrom;
use std::fmt;
use std::path::Path;

/// The bytes every save starts with
pub const SIGNATURE: [u8; 6] = *b"VFSAVE";

/// The only envelope format this decoder understands
pub const FORMAT_VERSION: i32 = 4;

/// Version of the game that wrote the save
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameVersion {
    pub major: i32,
    pub minor: i32,
    pub release: i32,
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.release)
    }
}

/// Everything in a save that precedes the game data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaveHeader {
    /// Length of the whole save as recorded by the game
    pub stream_length: i64,
    pub format_version: i32,
    pub game_version: GameVersion,
    pub game_tick: i64,

    /// Wall clock time the save was written, in .NET ticks
    pub now_ticks: i64,

    /// The thumbnail shown in the load menu, kept as the raw image bytes
    #[cfg_attr(feature = "serde", serde(skip))]
    pub screenshot: Vec<u8>,
}

/// A fully decoded save
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSave {
    pub header: SaveHeader,
    pub data: GameData,
}

/// Decodes VFSAVE files
///
/// ```rust
/// use dsv::{ErrorKind, SaveDecoder};
///
/// let decoder = SaveDecoder::builder().reject_trailing_data(true).build();
/// let err = decoder.decode_slice(b"VFSAVX").unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::InvalidSignature { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SaveDecoder {
    verify_stream_length: bool,
    reject_trailing_data: bool,
}

impl SaveDecoder {
    /// A decoder with the default (lenient) options
    pub fn new() -> Self {
        SaveDecoder::default()
    }

    /// Initializes a default [SaveDecoderBuilder]
    pub fn builder() -> SaveDecoderBuilder {
        SaveDecoderBuilder::default()
    }

    /// Decodes only the header of a save, leaving the game data untouched.
    /// Useful for listing saves cheaply.
    pub fn decode_header(&self, data: &[u8]) -> Result<SaveHeader, Error> {
        let mut reader = Reader::new(data);
        self.read_header(&mut reader)
    }

    /// Decodes an entire save held in memory
    pub fn decode_slice(&self, data: &[u8]) -> Result<GameSave, Error> {
        let mut reader = Reader::new(data);
        let header = self.read_header(&mut reader)?;
        let game = GameData::decode(&mut reader)?;

        log::debug!(
            "decoded {}: {} factories, {} dyson spheres",
            game.game_name,
            game.factories.len(),
            game.dyson_spheres.len()
        );

        let remaining = reader.remainder().len();
        if remaining != 0 {
            if self.reject_trailing_data {
                let violation = Violation::TrailingData { remaining };
                return Err(Error::invariant(violation, reader.position()));
            }

            log::debug!("ignoring {} trailing bytes", remaining);
        }

        Ok(GameSave { header, data: game })
    }

    /// Reads and decodes the save at the given path
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<GameSave, Error> {
        let data = std::fs::read(path.as_ref())?;
        log::debug!("read {} bytes from {}", data.len(), path.as_ref().display());
        self.decode_slice(&data)
    }

    fn read_header(&self, reader: &mut Reader<'_>) -> Result<SaveHeader, Error> {
        let found = reader.read_array::<6>()?;
        if found != SIGNATURE {
            return Err(Error::new(ErrorKind::InvalidSignature { found }));
        }

        let offset = reader.position();
        let stream_length = reader.read_i64()?;
        if self.verify_stream_length {
            let actual = reader.position() + reader.remainder().len();
            if i64::try_from(actual).map_or(true, |x| x != stream_length) {
                let violation = Violation::StreamLength {
                    declared: stream_length,
                    actual,
                };
                return Err(Error::invariant(violation, offset));
            }
        }

        let offset = reader.position();
        let format_version = reader.read_i32()?;
        if format_version != FORMAT_VERSION {
            return Err(Error::new(ErrorKind::VersionMismatch {
                record: "GameSave",
                expected: FORMAT_VERSION,
                found: format_version,
                offset,
            }));
        }

        let game_version = GameVersion {
            major: reader.read_i32()?,
            minor: reader.read_i32()?,
            release: reader.read_i32()?,
        };
        let game_tick = reader.read_i64()?;
        let now_ticks = reader.read_i64()?;
        let screenshot_len = reader.read_i32()?;
        let screenshot = read_blob(reader, screenshot_len, "screenshot")?;

        log::debug!(
            "save header: game version {}, tick {}, {} byte screenshot",
            game_version,
            game_tick,
            screenshot.len()
        );

        Ok(SaveHeader {
            stream_length,
            format_version,
            game_version,
            game_tick,
            now_ticks,
            screenshot,
        })
    }
}

/// Creates a [SaveDecoder]
#[derive(Debug, Clone, Default)]
pub struct SaveDecoderBuilder {
    verify_stream_length: bool,
    reject_trailing_data: bool,
}

impl SaveDecoderBuilder {
    /// Require the stream length recorded in the header to equal the length
    /// of the input. Off by default.
    pub fn verify_stream_length(mut self, val: bool) -> SaveDecoderBuilder {
        self.verify_stream_length = val;
        self
    }

    /// Fail when bytes remain after the game data. Off by default.
    pub fn reject_trailing_data(mut self, val: bool) -> SaveDecoderBuilder {
        self.reject_trailing_data = val;
        self
    }

    pub fn build(self) -> SaveDecoder {
        SaveDecoder {
            verify_stream_length: self.verify_stream_length,
            reject_trailing_data: self.reject_trailing_data,
        }
    }
}

/// Decodes a save held in memory with the default options
pub fn from_slice(data: &[u8]) -> Result<GameSave, Error> {
    SaveDecoder::new().decode_slice(data)
}

/// Decodes the save at the given path with the default options
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<GameSave, Error> {
    SaveDecoder::new().decode_file(path)
}
