use nom::combinator::rest;
use nom::number::complete::be_u16;
use nom::IResult;

use crate::data::ethernet::EtherType;
use crate::data::LinkLayer;
use crate::endianness::take_array;
use crate::error::{from_nom, PcapError};

const SLL_HEADER_LEN: usize = 16;

/// Linux "cooked" capture header, followed by packet data
///
/// See <http://www.tcpdump.org/linktypes/LINKTYPE_LINUX_SLL.html>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinuxSllFrame {
    pub packet_type: u16,
    pub arphrd_type: u16,
    /// Link-layer address, at most 8 bytes
    pub ll_addr: Vec<u8>,
    pub protocol: EtherType,
    pub payload: Vec<u8>,
}

fn parse_sll_frame(i: &[u8]) -> IResult<&[u8], LinuxSllFrame, PcapError> {
    let (i, packet_type) = be_u16(i)?;
    let (i, arphrd_type) = be_u16(i)?;
    let (i, ll_addr_len) = be_u16(i)?;
    let (i, ll_addr) = take_array::<8>(i)?;
    let (i, protocol) = be_u16(i)?;
    let (i, payload) = rest(i)?;
    let addr_len = usize::from(ll_addr_len).min(ll_addr.len());
    let frame = LinuxSllFrame {
        packet_type,
        arphrd_type,
        ll_addr: ll_addr[..addr_len].to_vec(),
        protocol: EtherType(protocol),
        payload: payload.to_vec(),
    };
    Ok((i, frame))
}

/// Decoder for LINKTYPE_LINUX_SLL (113)
pub fn decode_linux_sll(i: &[u8]) -> Result<LinkLayer, PcapError> {
    if i.len() < SLL_HEADER_LEN {
        return Err(PcapError::FrameTooShort {
            needed: SLL_HEADER_LEN,
            got: i.len(),
        });
    }
    let (_, frame) = parse_sll_frame(i).map_err(from_nom)?;
    Ok(LinkLayer::LinuxSll(frame))
}
