use std::io::{self, ErrorKind};

use flate2::{Decompress, FlushDecompress, Status};

use super::{Error, Result};

/// Inflates a complete zlib stream.
///
/// Fails if `raw` has a bad zlib header, fails its checksum, or ends before
/// the stream does. Bytes after the end of the stream are ignored.
pub fn inflate(raw: &[u8]) -> Result<Vec<u8>> {
    let mut d = Decompress::new(true);
    let mut out: Vec<u8> = Vec::with_capacity(raw.len().saturating_mul(2).max(64));

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity());
        }

        let in_before = d.total_in();
        let out_before = d.total_out();

        let status = d
            .decompress_vec(&raw[in_before as usize..], &mut out, FlushDecompress::None)
            .map_err(|err| Error::Decompress(io::Error::new(ErrorKind::InvalidData, err)))?;

        match status {
            Status::StreamEnd => return Ok(out),
            _ if d.total_in() == in_before && d.total_out() == out_before => {
                return Err(Error::Decompress(io::Error::new(
                    ErrorKind::UnexpectedEof,
                    "zlib stream is truncated",
                )));
            }
            _ => (),
        }
    }
}
