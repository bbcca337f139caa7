use crate::data::ethernet::EtherType;
use crate::data::LinkLayer;
use crate::error::PcapError;

const AF_INET: u32 = 2;
const AF_INET6_BSD: u32 = 24;
const AF_INET6_FREEBSD: u32 = 28;
const AF_INET6_DARWIN: u32 = 30;

/// BSD loopback encapsulation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopbackFrame {
    /// Address family, normalized to the reading host value
    pub family: u32,
    pub payload: Vec<u8>,
}

impl LoopbackFrame {
    /// Protocol of the payload, if the family is an IP one
    pub fn ethertype(&self) -> Option<EtherType> {
        match self.family {
            AF_INET => Some(EtherType::IPV4),
            AF_INET6_BSD | AF_INET6_FREEBSD | AF_INET6_DARWIN => Some(EtherType::IPV6),
            _ => None,
        }
    }
}

/// Decoder for LINKTYPE_NULL (0)
///
/// The link layer header is a 4-byte field, in host byte order of the machine on which the
/// packets were captured, which is not necessarily the byte order of the file. Family values
/// are small, so the order is guessed from the value itself.
pub fn decode_null(i: &[u8]) -> Result<LinkLayer, PcapError> {
    if i.len() < 4 {
        return Err(PcapError::FrameTooShort {
            needed: 4,
            got: i.len(),
        });
    }
    let raw = [i[0], i[1], i[2], i[3]];
    let le = u32::from_le_bytes(raw);
    let family = if le > 0xffff {
        u32::from_be_bytes(raw)
    } else {
        le
    };
    Ok(LinkLayer::Loopback(LoopbackFrame {
        family,
        payload: i[4..].to_vec(),
    }))
}
