//! # Legacy PCAP decoder
//!
//! This crate decodes capture files in the legacy libpcap format into structured records: the
//! global header describing the capture, followed by packets with their timestamp, lengths and
//! decoded link-layer frame.
//!
//! Both byte orderings are supported. The byte order is resolved from the magic number when the
//! capture is opened, and passed explicitly to every decoding function, so independent streams
//! can be decoded concurrently without sharing state.
//!
//! The stream is any type implementing `std::io::Read`. It is never opened or closed by this
//! crate.
//!
//! # Example: session reader
//!
//! ```rust
//! use legacy_pcap::*;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! fn count_packets(path: &str) -> Result<usize, PcapError> {
//!     let file = File::open(path)?;
//!     let reader = PcapReader::new(BufReader::new(file))?;
//!     let mut num_packets = 0;
//!     for packet in reader {
//!         let packet = packet?;
//!         if let LinkLayer::Ethernet(frame) = &packet.data {
//!             println!("{} -> {}", frame.source, frame.destination);
//!         }
//!         num_packets += 1;
//!     }
//!     Ok(num_packets)
//! }
//! ```
//!
//! # Example: explicit decoding functions
//!
//! ```rust
//! use legacy_pcap::*;
//! use std::io::Read;
//!
//! fn dump<R: Read>(mut stream: R) -> Result<(), PcapError> {
//!     let (header, flipped) = open_capture(&mut stream)?;
//!     loop {
//!         match read_next_packet(&mut stream, flipped, header.network) {
//!             Ok(packet) => println!("{:?}", packet),
//!             Err(PcapError::Eof) => return Ok(()),
//!             // packet data was read entirely, the next record can be decoded
//!             Err(PcapError::PacketSizeLimited) => continue,
//!             Err(e) => return Err(e),
//!         }
//!     }
//! }
//! ```
//!
//! Link-layer decoders are selected by linktype, see the [`data`](data/index.html) module.

mod endianness;
mod error;
mod linktype;
mod utils;
pub use endianness::{get_i32, get_u16, get_u32};
pub use error::*;
pub use linktype::*;
pub use utils::read_block;

pub mod data;
pub mod pcap;
pub use data::{LinkLayer, LinkLayerRegistry};
pub use pcap::*;
