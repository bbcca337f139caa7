use log::trace;
use nom::IResult;
use std::io::Read;
use std::time::Duration;

use crate::data::LinkLayer;
use crate::endianness::parse_u32;
use crate::error::{from_nom, PcapError};
use crate::utils::read_fixed;

/// Size of a PCAP record header
pub const PACKET_HEADER_LEN: usize = 16;

/// PCAP record header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketHeader {
    pub ts_sec: u32,
    pub ts_usec: u32,
    /// Number of bytes of packet data saved in the file
    pub caplen: u32,
    /// Length of the packet as it appeared on the network
    pub origlen: u32,
}

impl PacketHeader {
    /// Capture time, as an offset from the epoch
    pub fn timestamp(&self) -> Duration {
        Duration::from_secs(u64::from(self.ts_sec)) + Duration::from_micros(u64::from(self.ts_usec))
    }
}

/// A decoded packet: record header and link-layer frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    pub timestamp: Duration,
    /// Number of bytes actually captured
    pub included_len: u32,
    /// Original length on the wire. If larger than `included_len`, the packet was limited by
    /// the snap length
    pub actual_len: u32,
    pub data: LinkLayer,
}

impl Packet {
    /// True if the packet was not captured entirely
    pub fn is_truncated(&self) -> bool {
        self.included_len < self.actual_len
    }

    pub fn timestamp_secs(&self) -> u64 {
        self.timestamp.as_secs()
    }

    /// Sub-second part of the timestamp
    pub fn timestamp_micros(&self) -> u32 {
        self.timestamp.subsec_micros()
    }
}

/// Parse a PCAP record header
///
/// The record header is followed by `caplen` bytes of packet data, not consumed here.
pub fn parse_packet_header(i: &[u8], flipped: bool) -> IResult<&[u8], PacketHeader, PcapError> {
    let (i, ts_sec) = parse_u32(flipped)(i)?;
    let (i, ts_usec) = parse_u32(flipped)(i)?;
    let (i, caplen) = parse_u32(flipped)(i)?;
    let (i, origlen) = parse_u32(flipped)(i)?;
    let header = PacketHeader {
        ts_sec,
        ts_usec,
        caplen,
        origlen,
    };
    Ok((i, header))
}

/// Read a PCAP record header from a stream
///
/// Returns `PcapError::Eof` if the stream ended exactly before the header.
pub fn read_packet_header<R: Read>(
    reader: &mut R,
    flipped: bool,
) -> Result<PacketHeader, PcapError> {
    let mut buf = [0u8; PACKET_HEADER_LEN];
    read_fixed(reader, &mut buf)?;
    let (_, header) = parse_packet_header(&buf, flipped).map_err(from_nom)?;
    Ok(header)
}

/// Read one complete record (header and data), and decode data using `decode`
pub(crate) fn read_packet<R, F>(reader: &mut R, flipped: bool, decode: F) -> Result<Packet, PcapError>
where
    R: Read,
    F: FnOnce(&[u8]) -> Result<LinkLayer, PcapError>,
{
    let header = read_packet_header(reader, flipped)?;
    trace!(
        "record: ts {}.{:06}, caplen {}, origlen {}",
        header.ts_sec,
        header.ts_usec,
        header.caplen,
        header.origlen
    );
    // grows with the data actually present, so a corrupted caplen does not allocate up front
    let mut data = Vec::new();
    let sz = Read::take(&mut *reader, u64::from(header.caplen)).read_to_end(&mut data)?;
    if sz != header.caplen as usize {
        return Err(PcapError::UnexpectedEof);
    }
    let data = decode(&data)?;
    Ok(Packet {
        timestamp: header.timestamp(),
        included_len: header.caplen,
        actual_len: header.origlen,
        data,
    })
}
