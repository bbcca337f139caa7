//! PCAP file format
//!
//! See <https://wiki.wireshark.org/Development/LibpcapFileFormat> for details.
//!
//! A capture starts with a 4-byte magic number, which also gives the byte ordering of all
//! following integers, and a 20-byte global header. It is followed by records, each made of a
//! 16-byte header and `caplen` bytes of packet data.
//!
//! There are 2 ways of reading a PCAP stream. The first method is to use
//! [`PcapReader`](struct.PcapReader.html), which keeps the session state (header, byte order,
//! link-layer decoders) and iterates over packets.
//!
//! The second method is to first call [`open_capture`](fn.open_capture.html), then loop over
//! [`read_next_packet`](fn.read_next_packet.html), passing the byte order and linktype
//! explicitly. This lets the caller decide how to handle errors, for example skipping packets
//! rejected by the link-layer decoder.

mod frame;
mod header;
mod reader;

pub use frame::*;
pub use header::*;
pub use reader::*;
