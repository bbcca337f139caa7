use crate::data::LinkLayer;
use crate::error::PcapError;

/// Raw IP packet, without link-layer header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawIpFrame {
    /// IP version, from the first nibble
    pub version: u8,
    pub payload: Vec<u8>,
}

/// Decoder for LINKTYPE_RAW (101), LINKTYPE_IPV4 (228) and LINKTYPE_IPV6 (229)
///
/// The packet begins with an IPv4 or IPv6 header, with the "version" field of the header
/// indicating whether it's an IPv4 or IPv6 header.
pub fn decode_raw(i: &[u8]) -> Result<LinkLayer, PcapError> {
    match i.first() {
        Some(b) => Ok(LinkLayer::RawIp(RawIpFrame {
            version: b >> 4,
            payload: i.to_vec(),
        })),
        None => Err(PcapError::FrameTooShort { needed: 1, got: 0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw() {
        let l = decode_raw(&[0x60, 0, 0, 0]).expect("raw");
        assert!(matches!(l, LinkLayer::RawIp(RawIpFrame { version: 6, .. })));
        assert_eq!(l.payload(), &[0x60, 0, 0, 0]);
        assert!(decode_raw(&[]).is_err());
    }
}
