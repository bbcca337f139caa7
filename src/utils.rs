use std::io::{self, Read};

use crate::error::PcapError;

/// Fill `buf` from `reader`, stopping early only at end of stream
///
/// Returns the number of bytes actually read. Unlike `Read::read_exact`, a short count is not an
/// error here: callers decide how a short read must be classified.
pub fn read_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read a fixed-size header block
///
/// Nothing read at all means the stream ended cleanly (`Eof`), a partial read is
/// `InsufficientLength`.
pub(crate) fn read_fixed<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), PcapError> {
    match read_block(reader, buf)? {
        0 => Err(PcapError::Eof),
        n if n < buf.len() => Err(PcapError::InsufficientLength),
        _ => Ok(()),
    }
}
