//! Link-layer decoding of packet data (depending on linktype)
//!
//! Packet data is decoded by a function selected from the file linktype. Decoders are stored in a
//! [`LinkLayerRegistry`]; linktypes without a decoder fall back to [`LinkLayer::Unknown`], which
//! keeps the raw bytes.
//!
//! ## Example
//!
//! ```rust
//! use legacy_pcap::data::{LinkLayer, LinkLayerRegistry};
//! use legacy_pcap::{Linktype, PcapError};
//!
//! fn decode_loopback(i: &[u8]) -> Result<LinkLayer, PcapError> {
//!     Ok(LinkLayer::Unknown(i.get(4..).unwrap_or_default().to_vec()))
//! }
//!
//! let mut registry = LinkLayerRegistry::default();
//! registry.register(Linktype::LOOP, decode_loopback);
//! let l = registry.decode(&[0, 0, 0, 2, 0x45], Linktype::LOOP).expect("decode");
//! assert_eq!(l.payload(), &[0x45]);
//! ```

mod ethernet;
mod linux_sll;
mod null;
mod raw;

pub use crate::data::ethernet::*;
pub use crate::data::linux_sll::*;
pub use crate::data::null::*;
pub use crate::data::raw::*;

use std::collections::HashMap;

use crate::error::PcapError;
use crate::linktype::Linktype;

/// Signature of a link-layer decoder
pub type LinkLayerDecoder = fn(&[u8]) -> Result<LinkLayer, PcapError>;

/// Decoded link-layer content of a packet
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkLayer {
    Ethernet(EthernetFrame),
    Loopback(LoopbackFrame),
    RawIp(RawIpFrame),
    LinuxSll(LinuxSllFrame),
    /// Data of a linktype without decoder, stored verbatim
    Unknown(Vec<u8>),
}

impl LinkLayer {
    /// Data following the link-layer header
    pub fn payload(&self) -> &[u8] {
        match self {
            LinkLayer::Ethernet(f) => &f.payload,
            LinkLayer::Loopback(f) => &f.payload,
            LinkLayer::RawIp(f) => &f.payload,
            LinkLayer::LinuxSll(f) => &f.payload,
            LinkLayer::Unknown(data) => data,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, LinkLayer::Unknown(_))
    }
}

/// Linktypes with a decoder shipped by this crate
const BUILTIN_LINKTYPES: &[Linktype] = &[
    Linktype::NULL,
    Linktype::ETHERNET,
    Linktype::RAW,
    Linktype::LINUX_SLL,
    Linktype::IPV4,
    Linktype::IPV6,
];

/// Decoder shipped by this crate for `linktype`, if any
///
/// Ethernet is always available; other decoders require the `data` feature.
pub fn builtin_decoder(linktype: Linktype) -> Option<LinkLayerDecoder> {
    match linktype {
        Linktype::ETHERNET => Some(decode_ethernet as LinkLayerDecoder),
        #[cfg(feature = "data")]
        Linktype::NULL => Some(decode_null as LinkLayerDecoder),
        #[cfg(feature = "data")]
        Linktype::RAW | Linktype::IPV4 | Linktype::IPV6 => Some(decode_raw as LinkLayerDecoder),
        #[cfg(feature = "data")]
        Linktype::LINUX_SLL => Some(decode_linux_sll as LinkLayerDecoder),
        _ => None,
    }
}

/// Set of link-layer decoders, keyed by linktype
#[derive(Clone, Debug)]
pub struct LinkLayerRegistry {
    decoders: HashMap<Linktype, LinkLayerDecoder>,
}

impl LinkLayerRegistry {
    /// Create an empty registry: all data will be decoded as `LinkLayer::Unknown`
    pub fn new() -> LinkLayerRegistry {
        LinkLayerRegistry {
            decoders: HashMap::new(),
        }
    }

    /// Set the decoder for `linktype`, returning the previous one
    pub fn register(
        &mut self,
        linktype: Linktype,
        decoder: LinkLayerDecoder,
    ) -> Option<LinkLayerDecoder> {
        self.decoders.insert(linktype, decoder)
    }

    pub fn unregister(&mut self, linktype: Linktype) -> Option<LinkLayerDecoder> {
        self.decoders.remove(&linktype)
    }

    pub fn contains(&self, linktype: Linktype) -> bool {
        self.decoders.contains_key(&linktype)
    }

    /// Decode packet data, falling back to `LinkLayer::Unknown`
    ///
    /// Errors from the decoder are returned unchanged.
    pub fn decode(&self, data: &[u8], linktype: Linktype) -> Result<LinkLayer, PcapError> {
        match self.decoders.get(&linktype) {
            Some(decode) => decode(data),
            None => Ok(LinkLayer::Unknown(data.to_vec())),
        }
    }
}

impl Default for LinkLayerRegistry {
    /// Registry with all decoders shipped by this crate
    fn default() -> Self {
        let mut registry = LinkLayerRegistry::new();
        for &linktype in BUILTIN_LINKTYPES {
            if let Some(decoder) = builtin_decoder(linktype) {
                registry.register(linktype, decoder);
            }
        }
        registry
    }
}

/// Decode packet data using the decoders shipped by this crate
pub fn dispatch_link_layer(data: &[u8], linktype: Linktype) -> Result<LinkLayer, PcapError> {
    match builtin_decoder(linktype) {
        Some(decode) => decode(data),
        None => Ok(LinkLayer::Unknown(data.to_vec())),
    }
}
