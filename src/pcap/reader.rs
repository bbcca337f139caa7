use log::debug;
use std::io::Read;

use crate::data::{dispatch_link_layer, LinkLayerRegistry};
use crate::error::PcapError;
use crate::linktype::Linktype;
use crate::pcap::frame::{read_packet, Packet};
use crate::pcap::header::{read_magic, read_pcap_header, PcapHeader};

/// Read the magic number and global header of a capture
///
/// Returns the header and the `flipped` flag, to be passed to every following
/// [`read_next_packet`] call for this stream.
pub fn open_capture<R: Read>(reader: &mut R) -> Result<(PcapHeader, bool), PcapError> {
    let flipped = read_magic(reader)?;
    let header = read_pcap_header(reader, flipped)?;
    Ok((header, flipped))
}

/// Read and decode the next packet, using the decoders shipped by this crate
///
/// Returns `PcapError::Eof` if the stream ends cleanly before the next record. After any other
/// error, the stream position is undefined.
pub fn read_next_packet<R: Read>(
    reader: &mut R,
    flipped: bool,
    linktype: Linktype,
) -> Result<Packet, PcapError> {
    read_packet(reader, flipped, |data| dispatch_link_layer(data, linktype))
}

/// Read and decode the next packet, using the decoders from `registry`
pub fn read_next_packet_with<R: Read>(
    reader: &mut R,
    flipped: bool,
    linktype: Linktype,
    registry: &LinkLayerRegistry,
) -> Result<Packet, PcapError> {
    read_packet(reader, flipped, |data| registry.decode(data, linktype))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReaderState {
    Ready,
    Done,
}

/// Decoding session over a legacy pcap stream
///
/// The magic number and global header are read when the reader is created. Packets are then
/// read one at a time, either with [`next_packet`](PcapReader::next_packet) or through the
/// `Iterator` implementation.
///
/// Once an error (or end of file) has been returned, the session is over: the reader will not
/// try to resynchronize on the stream.
///
/// ## Example
///
/// ```rust
/// use legacy_pcap::*;
///
/// # let file: &[u8] = &[
/// #     0xa1, 0xb2, 0xc3, 0xd4, 0, 2, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0, 0, 0, 1,
/// # ];
/// let mut reader = PcapReader::new(file).expect("PcapReader");
/// println!("linktype: {}", reader.linktype());
/// for packet in &mut reader {
///     match packet {
///         Ok(packet) => println!("{:?}: {} bytes", packet.timestamp, packet.included_len),
///         Err(e) => {
///             println!("error while reading: {}", e);
///             break;
///         }
///     }
/// }
/// ```
pub struct PcapReader<R>
where
    R: Read,
{
    header: PcapHeader,
    flipped: bool,
    reader: R,
    registry: LinkLayerRegistry,
    state: ReaderState,
}

impl<R> PcapReader<R>
where
    R: Read,
{
    /// Open a capture, decoding packet data with the default registry
    pub fn new(reader: R) -> Result<PcapReader<R>, PcapError> {
        Self::with_registry(reader, LinkLayerRegistry::default())
    }

    /// Open a capture, decoding packet data with `registry`
    pub fn with_registry(
        mut reader: R,
        registry: LinkLayerRegistry,
    ) -> Result<PcapReader<R>, PcapError> {
        let (header, flipped) = open_capture(&mut reader)?;
        Ok(PcapReader {
            header,
            flipped,
            reader,
            registry,
            state: ReaderState::Ready,
        })
    }

    pub fn header(&self) -> &PcapHeader {
        &self.header
    }

    /// True if the file byte order is the reverse of the magic number natural order
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn linktype(&self) -> Linktype {
        self.header.network
    }

    pub fn snaplen(&self) -> u32 {
        self.header.snaplen
    }

    pub fn registry(&self) -> &LinkLayerRegistry {
        &self.registry
    }

    /// Read the next packet
    ///
    /// Returns `PcapError::Eof` at end of stream, and after any error.
    pub fn next_packet(&mut self) -> Result<Packet, PcapError> {
        if self.state == ReaderState::Done {
            return Err(PcapError::Eof);
        }
        let res = read_next_packet_with(
            &mut self.reader,
            self.flipped,
            self.header.network,
            &self.registry,
        );
        if let Err(ref e) = res {
            debug!("pcap reader stopped: {}", e);
            self.state = ReaderState::Done;
        }
        res
    }

    /// Get a reference to the underlying reader
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume the session, returning the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> Iterator for PcapReader<R>
where
    R: Read,
{
    type Item = Result<Packet, PcapError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_packet() {
            Err(PcapError::Eof) => None,
            r => Some(r),
        }
    }
}
