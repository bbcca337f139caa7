use log::debug;
use nom::IResult;
use std::io::Read;

use crate::endianness::{parse_i32, parse_u16, parse_u32};
use crate::error::{from_nom, PcapError};
use crate::linktype::Linktype;
use crate::utils::{read_block, read_fixed};

/// Magic number, as stored by a big-endian writer
pub const PCAP_MAGIC: [u8; 4] = [0xa1, 0xb2, 0xc3, 0xd4];
/// Magic number, as stored by a writer using the opposite byte order
pub const PCAP_MAGIC_FLIPPED: [u8; 4] = [0xd4, 0xc3, 0xb2, 0xa1];

/// Size of the global header following the magic number
pub const PCAP_HEADER_LEN: usize = 20;

/// PCAP global header
///
/// The magic number is not part of this structure: it only determines the byte ordering,
/// returned separately as the `flipped` flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcapHeader {
    /// Version major number (currently 2)
    pub version_major: u16,
    /// Version minor number (currently 4)
    pub version_minor: u16,
    /// The correction time in seconds between GMT (UTC) and the local timezone of the following packet header timestamps
    pub thiszone: i32,
    /// In theory, the accuracy of time stamps in the capture; in practice, all tools set it to 0
    pub sigfigs: u32,
    /// max len of captured packets, in octets
    pub snaplen: u32,
    /// Data link type
    pub network: Linktype,
}

impl PcapHeader {
    /// Version as a `(major, minor)` pair
    pub fn version(&self) -> (u16, u16) {
        (self.version_major, self.version_minor)
    }
}

/// Read the magic number and resolve the byte ordering
///
/// Returns `true` if all following fields are flipped.
pub fn read_magic<R: Read>(reader: &mut R) -> Result<bool, PcapError> {
    let mut magic = [0u8; 4];
    // end of stream is accepted here as long as the 4 bytes are there
    if read_block(reader, &mut magic)? != magic.len() {
        return Err(PcapError::InsufficientLength);
    }
    match magic {
        PCAP_MAGIC => Ok(false),
        PCAP_MAGIC_FLIPPED => Ok(true),
        _ => Err(PcapError::NotACaptureFile),
    }
}

/// Parse the PCAP global header (without magic)
pub fn parse_pcap_header(i: &[u8], flipped: bool) -> IResult<&[u8], PcapHeader, PcapError> {
    let (i, version_major) = parse_u16(flipped)(i)?;
    let (i, version_minor) = parse_u16(flipped)(i)?;
    let (i, thiszone) = parse_i32(flipped)(i)?;
    let (i, sigfigs) = parse_u32(flipped)(i)?;
    let (i, snaplen) = parse_u32(flipped)(i)?;
    let (i, network) = parse_u32(flipped)(i)?;
    let header = PcapHeader {
        version_major,
        version_minor,
        thiszone,
        sigfigs,
        snaplen,
        network: Linktype(network),
    };
    Ok((i, header))
}

/// Read the PCAP global header (without magic) from a stream
pub fn read_pcap_header<R: Read>(reader: &mut R, flipped: bool) -> Result<PcapHeader, PcapError> {
    let mut buf = [0u8; PCAP_HEADER_LEN];
    read_fixed(reader, &mut buf)?;
    let (_, header) = parse_pcap_header(&buf, flipped).map_err(from_nom)?;
    debug!(
        "pcap header version {}.{}, flipped: {}, linktype {}, snaplen {}",
        header.version_major, header.version_minor, flipped, header.network, header.snaplen
    );
    Ok(header)
}
