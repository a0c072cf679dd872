use std::str;

use super::{parse_utils, HeaderFormatError, Kind};

/// The `<type> <size>\0` prefix of an inflated loose object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    pub kind: Kind,
    pub declared_size: u64,

    /// Offset of the first content byte, just past the NUL.
    pub content_start: usize,
}

/// Splits the header off an inflated object.
///
/// Unrecognized type tags are returned as [`Kind::Other`] rather than
/// rejected.
pub fn parse_header(data: &[u8]) -> Result<Header, HeaderFormatError> {
    let sp = parse_utils::find(b' ', 0, data).ok_or(HeaderFormatError::MissingSpace)?;
    let kind = Kind::from_tag(parse_utils::trim(&data[..sp]));

    let nul = parse_utils::find(0, sp, data).ok_or(HeaderFormatError::MissingNul)?;
    let size = parse_utils::trim(&data[sp..nul]);

    let declared_size = str::from_utf8(size)
        .ok()
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| {
            HeaderFormatError::InvalidSize(String::from_utf8_lossy(size).into_owned())
        })?;

    Ok(Header {
        kind,
        declared_size,
        content_start: nul + 1,
    })
}
