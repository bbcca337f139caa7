use log::warn;
use nom::combinator::rest;
use nom::number::complete::be_u16;
use nom::IResult;
use rusticata_macros::newtype_enum;
use std::fmt;

use crate::data::LinkLayer;
use crate::endianness::take_array;
use crate::error::{from_nom, PcapError};

/// Payload written by some capture devices when the packet itself was not saved
pub const SIZE_LIMITED_MARKER: [u8; 4] = [0, 0, 0, 0];

const ETHERNET_HEADER_LEN: usize = 14;
const VLAN_TAG_LEN: usize = 4;

/// Ethernet type field
///
/// Values up to 1500 are an IEEE 802.3 length rather than a protocol.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct EtherType(pub u16);

newtype_enum! {
impl display EtherType {
    IPV4 = 0x0800,
    ARP = 0x0806,
    VLAN = 0x8100,
    IPV6 = 0x86dd,
}
}

impl EtherType {
    /// True if the field holds an IEEE 802.3 payload length
    pub fn is_length(self) -> bool {
        self.0 <= 1500
    }
}

/// 48-bit hardware address
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let a = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a[0], a[1], a[2], a[3], a[4], a[5]
        )
    }
}

/// IEEE 802.1Q tag
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VlanTag {
    pub priority: u8,
    pub drop_eligible: bool,
    pub vlan_id: u16,
}

impl From<u16> for VlanTag {
    fn from(tci: u16) -> Self {
        VlanTag {
            priority: (tci >> 13) as u8,
            drop_eligible: tci & 0x1000 != 0,
            vlan_id: tci & 0x0fff,
        }
    }
}

/// Ethernet II / IEEE 802.3 frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EthernetFrame {
    pub destination: MacAddress,
    pub source: MacAddress,
    pub vlan: Option<VlanTag>,
    pub ethertype: EtherType,
    pub payload: Vec<u8>,
}

impl EthernetFrame {
    /// Decode a frame from raw bytes (without FCS)
    pub fn from_bytes(i: &[u8]) -> Result<EthernetFrame, PcapError> {
        if i.len() < ETHERNET_HEADER_LEN {
            return Err(PcapError::FrameTooShort {
                needed: ETHERNET_HEADER_LEN,
                got: i.len(),
            });
        }
        let (_, frame) = parse_ethernet_frame(i).map_err(from_nom)?;
        Ok(frame)
    }
}

fn parse_ethernet_frame(i: &[u8]) -> IResult<&[u8], EthernetFrame, PcapError> {
    let orig_len = i.len();
    let (i, destination) = take_array::<6>(i)?;
    let (i, source) = take_array::<6>(i)?;
    let (i, ethertype) = be_u16(i)?;
    let (i, vlan, ethertype) = if EtherType(ethertype) == EtherType::VLAN {
        if orig_len < ETHERNET_HEADER_LEN + VLAN_TAG_LEN {
            return Err(nom::Err::Error(PcapError::FrameTooShort {
                needed: ETHERNET_HEADER_LEN + VLAN_TAG_LEN,
                got: orig_len,
            }));
        }
        let (i, tci) = be_u16(i)?;
        let (i, inner) = be_u16(i)?;
        (i, Some(VlanTag::from(tci)), inner)
    } else {
        (i, None, ethertype)
    };
    let (i, payload) = rest(i)?;
    let frame = EthernetFrame {
        destination: MacAddress(destination),
        source: MacAddress(source),
        vlan,
        ethertype: EtherType(ethertype),
        payload: payload.to_vec(),
    };
    Ok((i, frame))
}

/// Decoder for LINKTYPE_ETHERNET (1)
///
/// IEEE 802.3 Ethernet (10Mb, 100Mb, 1000Mb, and up); the 10MB in the DLT_ name is historical.
/// A 4-byte all-zero payload is the size-limited marker, and is reported as
/// `PcapError::PacketSizeLimited` instead of being decoded.
pub fn decode_ethernet(i: &[u8]) -> Result<LinkLayer, PcapError> {
    if i == SIZE_LIMITED_MARKER {
        warn!("ethernet: size-limited packet marker");
        return Err(PcapError::PacketSizeLimited);
    }
    EthernetFrame::from_bytes(i).map(LinkLayer::Ethernet)
}
