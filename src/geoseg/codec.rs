// ---------------------------------------------------------------------------
// codec – versioned, checksummed binary encoding of a Segment
// ---------------------------------------------------------------------------
//
// Layout (16 byte header, little-endian):
//   [0..4]   Magic bytes: "GSEG"
//   [4..8]   Format version (u32)
//   [8..12]  Payload size (u32)
//   [12..16] xxHash32 checksum of the payload
//   [16..]   Payload: bitcode encoding of (distance, from, to)

use crate::geoseg::{ReferenceablePoint, Segment, SegmentError, SegmentRecord};

use log::trace;
use serde::de::DeserializeOwned;
use serde::Serialize;
use xxhash_rust::xxh32::xxh32;

use std::fmt;

pub const MAGIC: [u8; 4] = *b"GSEG";

pub const HEADER_SIZE: usize = 16;

/// Bump whenever the payload layout changes
pub const FORMAT_VERSION: u32 = 1;

const XXHASH_SEED: u32 = 0;

#[derive(Debug)]
pub enum CodecError {
    /// The bytes don't start with the segment magic
    BadMagic,
    /// Fewer bytes than a header needs
    Truncated { len: usize },
    /// Encoded by a newer build
    VersionMismatch { expected_max: u32, found: u32 },
    /// The header's payload size disagrees with the bytes present
    LengthMismatch { expected: u32, found: usize },
    ChecksumMismatch { expected: u32, computed: u32 },
    Encode(String),
    Decode(String),
    /// The payload decoded, but doesn't describe a valid segment
    Segment(SegmentError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::BadMagic => write!(f, "Not an encoded segment: bad magic bytes"),
            CodecError::Truncated { len } => {
                write!(f, "Encoded segment is too short ({len} bytes, need at least {HEADER_SIZE})")
            }
            CodecError::VersionMismatch { expected_max, found } => write!(
                f,
                "Version mismatch: segment is v{found}, but this build only supports up to v{expected_max}"
            ),
            CodecError::LengthMismatch { expected, found } => {
                write!(f, "Payload size mismatch: header says {expected} bytes, found {found}")
            }
            CodecError::ChecksumMismatch { expected, computed } => write!(
                f,
                "Encoded segment is corrupted: checksum mismatch (expected {expected:#010X}, got {computed:#010X})"
            ),
            CodecError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            CodecError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            CodecError::Segment(e) => write!(f, "Invalid segment: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Segment(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SegmentError> for CodecError {
    fn from(e: SegmentError) -> Self {
        CodecError::Segment(e)
    }
}

impl From<bitcode::Error> for CodecError {
    fn from(e: bitcode::Error) -> Self {
        CodecError::Decode(e.to_string())
    }
}

/// Encode a segment, header included
pub fn encode<P: Serialize>(segment: &Segment<P>) -> Result<Vec<u8>, CodecError> {
    let payload = bitcode::serialize(segment).map_err(|e| CodecError::Encode(e.to_string()))?;
    let size = u32::try_from(payload.len())
        .map_err(|_| CodecError::Encode(format!("payload of {} bytes is too large", payload.len())))?;

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&size.to_le_bytes());
    out.extend_from_slice(&xxh32(&payload, XXHASH_SEED).to_le_bytes());
    out.extend_from_slice(&payload);

    trace!("Encoded segment into {} bytes", out.len());
    Ok(out)
}

/// Decode a segment produced by `encode`.
///
/// The header is checked before the payload is touched, and the decoded segment goes through
/// the same endpoint and distance checks as `Segment::new`.
pub fn decode<P>(bytes: &[u8]) -> Result<Segment<P>, CodecError>
where
    P: ReferenceablePoint + DeserializeOwned,
{
    if bytes.len() < MAGIC.len() || bytes[..4] != MAGIC {
        return Err(CodecError::BadMagic);
    }
    if bytes.len() < HEADER_SIZE {
        return Err(CodecError::Truncated { len: bytes.len() });
    }

    let format_version = read_u32(bytes, 4);
    let size = read_u32(bytes, 8);
    let checksum = read_u32(bytes, 12);

    if format_version > FORMAT_VERSION {
        return Err(CodecError::VersionMismatch { expected_max: FORMAT_VERSION, found: format_version });
    }

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != size as usize {
        return Err(CodecError::LengthMismatch { expected: size, found: payload.len() });
    }

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != checksum {
        return Err(CodecError::ChecksumMismatch { expected: checksum, computed });
    }

    // Decoded unchecked first, so a bad segment surfaces as a SegmentError instead of a
    // stringly decode error
    let record: SegmentRecord<P> = bitcode::deserialize(payload)?;
    let segment = Segment::try_from(record)?;
    trace!("Decoded segment v{} from {} bytes", format_version, bytes.len());
    Ok(segment)
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
