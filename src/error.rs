use nom::error::{ErrorKind, ParseError};
use std::io;
use thiserror::Error;

/// Errors raised while decoding a legacy pcap stream
#[derive(Debug, Error)]
pub enum PcapError {
    /// No more data: the stream ended cleanly on a record boundary
    #[error("end of file")]
    Eof,
    /// A fixed-size field (magic, file header, packet header) could not be fully read
    #[error("not enough data to read a fixed-size header")]
    InsufficientLength,
    /// The magic number matches neither byte ordering
    #[error("not a pcap file (magic number not recognized)")]
    NotACaptureFile,
    /// The stream ended before the declared packet data could be read
    #[error("unexpected end of file while reading packet data")]
    UnexpectedEof,
    /// Ethernet packet data is the 4-byte all-zero marker (packet not captured)
    #[error("packet data was size-limited by the capture device")]
    PacketSizeLimited,

    /// Link-layer data is too short for the frame header
    #[error("frame too short: needed {needed} bytes, got {got}")]
    FrameTooShort { needed: usize, got: usize },

    #[error("nom error: {0:?}")]
    NomError(ErrorKind),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl<I> ParseError<I> for PcapError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        PcapError::NomError(kind)
    }
    fn append(_input: I, kind: ErrorKind, _other: Self) -> Self {
        PcapError::NomError(kind)
    }
}

/// Unwrap a nom error into a `PcapError`
///
/// Parsers in this crate only run over complete buffers, so `Incomplete` means a fixed-size
/// structure was cut short.
pub(crate) fn from_nom(e: nom::Err<PcapError>) -> PcapError {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => PcapError::InsufficientLength,
    }
}
