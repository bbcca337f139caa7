use hex_literal::hex;
use legacy_pcap::data::{EtherType, LinkLayer, LinkLayerRegistry};
use legacy_pcap::*;
use std::io::{self, Read};
use std::time::Duration;

/// Big-endian capture: 2 ethernet packets, the second one truncated by the snaplen
static TEST_BE: &[u8] = &hex!(
    "a1 b2 c3 d4 00 02 00 04 00 00 00 00 00 00 00 00 00 00 00 40 00 00 00 01"
    // packet 1: ts 1000.000250, 16 bytes
    "00 00 03 e8 00 00 00 fa 00 00 00 10 00 00 00 10"
    "ff ff ff ff ff ff 00 11 22 33 44 55 08 06 00 01"
    // packet 2: ts 1001.5, 18 bytes of 100
    "00 00 03 e9 00 07 a1 20 00 00 00 12 00 00 00 64"
    "00 11 22 33 44 55 66 77 88 99 aa bb 08 00 45 00 00 64"
);

/// Swap every 16/32-bit field of `TEST_BE`, giving the same capture written in the other order
fn flip_capture(be: &[u8]) -> Vec<u8> {
    fn swap(v: &mut Vec<u8>, field: &[u8]) {
        v.extend(field.iter().rev());
    }
    let mut v = Vec::new();
    v.extend(be[..4].iter().rev());
    swap(&mut v, &be[4..6]);
    swap(&mut v, &be[6..8]);
    for f in be[8..24].chunks(4) {
        swap(&mut v, f);
    }
    let mut i = &be[24..];
    while !i.is_empty() {
        for f in i[..16].chunks(4) {
            swap(&mut v, f);
        }
        let caplen = u32::from_be_bytes([i[8], i[9], i[10], i[11]]) as usize;
        v.extend_from_slice(&i[16..16 + caplen]);
        i = &i[16 + caplen..];
    }
    v
}

fn check_capture(data: &[u8], expect_flipped: bool) {
    let mut stream = data;
    let (header, flipped) = open_capture(&mut stream).expect("open_capture");
    assert_eq!(flipped, expect_flipped);
    assert_eq!(header.version(), (2, 4));
    assert_eq!(header.snaplen, 64);
    assert_eq!(header.network, Linktype::ETHERNET);

    let p1 = read_next_packet(&mut stream, flipped, header.network).expect("packet 1");
    assert_eq!(p1.timestamp, Duration::from_secs(1000) + Duration::from_micros(250));
    assert_eq!(p1.included_len, 16);
    assert!(!p1.is_truncated());
    match &p1.data {
        LinkLayer::Ethernet(frame) => {
            assert_eq!(frame.ethertype, EtherType::ARP);
            assert_eq!(frame.payload, &[0, 1]);
        }
        l => panic!("unexpected link layer {:?}", l),
    }

    let p2 = read_next_packet(&mut stream, flipped, header.network).expect("packet 2");
    assert_eq!(p2.timestamp_secs(), 1001);
    assert_eq!(p2.timestamp_micros(), 500_000);
    assert_eq!(p2.included_len, 18);
    assert_eq!(p2.actual_len, 100);
    assert!(p2.is_truncated());
    assert_eq!(p2.data.payload(), &hex!("45 00 00 64"));

    assert!(matches!(
        read_next_packet(&mut stream, flipped, header.network),
        Err(PcapError::Eof)
    ));
}

#[test]
fn test_capture_be() {
    check_capture(TEST_BE, false);
}

#[test]
fn test_capture_flipped() {
    let le = flip_capture(TEST_BE);
    assert_eq!(&le[..4], &hex!("d4 c3 b2 a1"));
    check_capture(&le, true);
}

#[test]
fn test_reader_iter() {
    let reader = PcapReader::new(TEST_BE).expect("PcapReader");
    let packets: Vec<_> = reader.collect::<Result<_, _>>().expect("packets");
    assert_eq!(packets.len(), 2);
    // decoding independently twice gives the same result
    let again: Vec<_> = PcapReader::new(TEST_BE)
        .expect("PcapReader")
        .collect::<Result<_, _>>()
        .expect("packets");
    assert_eq!(packets, again);

    let le = flip_capture(TEST_BE);
    let flipped: Vec<Packet> = PcapReader::new(&le[..])
        .expect("PcapReader")
        .collect::<Result<_, _>>()
        .expect("packets");
    assert_eq!(packets, flipped);
}

#[test]
fn test_not_a_capture() {
    // pcapng section header block
    let data = hex!("0a 0d 0d 0a 1c 00 00 00");
    assert!(matches!(
        PcapReader::new(&data[..]),
        Err(PcapError::NotACaptureFile)
    ));
    // nanosecond resolution magic is not supported
    let data = hex!("a1 b2 3c 4d 00 02 00 04");
    assert!(matches!(
        open_capture(&mut &data[..]),
        Err(PcapError::NotACaptureFile)
    ));
}

#[test]
fn test_truncated_headers() {
    for len in 0..4 {
        assert!(matches!(
            open_capture(&mut &TEST_BE[..len]),
            Err(PcapError::InsufficientLength)
        ));
    }
    for len in 5..24 {
        assert!(matches!(
            open_capture(&mut &TEST_BE[..len]),
            Err(PcapError::InsufficientLength)
        ));
    }
    // nothing after the magic number
    assert!(matches!(
        open_capture(&mut &TEST_BE[..4]),
        Err(PcapError::Eof)
    ));
    for len in 25..40 {
        let mut stream = &TEST_BE[24..len];
        assert!(matches!(
            read_next_packet(&mut stream, false, Linktype::ETHERNET),
            Err(PcapError::InsufficientLength)
        ));
    }
}

#[test]
fn test_truncated_data() {
    let mut stream = &TEST_BE[24..24 + 16 + 10];
    assert!(matches!(
        read_next_packet(&mut stream, false, Linktype::ETHERNET),
        Err(PcapError::UnexpectedEof)
    ));
    let mut reader = PcapReader::new(&TEST_BE[..TEST_BE.len() - 1]).expect("PcapReader");
    assert!(reader.next().expect("packet 1").is_ok());
    assert!(matches!(reader.next(), Some(Err(PcapError::UnexpectedEof))));
    assert!(reader.next().is_none());
}

#[test]
fn test_size_limited_marker() {
    let data = hex!(
        "a1 b2 c3 d4 00 02 00 04 00 00 00 00 00 00 00 00 00 00 00 40 00 00 00 01"
        "00 00 00 01 00 00 00 00 00 00 00 04 00 00 05 dc 00 00 00 00"
        "00 00 00 02 00 00 00 00 00 00 00 04 00 00 05 dc 00 00 00 00"
    );
    let mut stream = &data[..];
    let (header, flipped) = open_capture(&mut stream).expect("open_capture");
    // the record is read entirely, so the next one can still be decoded
    for _ in 0..2 {
        assert!(matches!(
            read_next_packet(&mut stream, flipped, header.network),
            Err(PcapError::PacketSizeLimited)
        ));
    }
    assert!(stream.is_empty());

    // the marker only exists for ethernet
    let mut stream = &data[24..];
    let pkt = read_next_packet(&mut stream, flipped, Linktype::RAW).expect("packet");
    match pkt.data {
        LinkLayer::Unknown(ref d) => assert_eq!(d, &[0, 0, 0, 0]),
        #[cfg(feature = "data")]
        LinkLayer::RawIp(ref f) => assert_eq!(f.version, 0),
        ref l => panic!("unexpected link layer {:?}", l),
    }
}

#[test]
fn test_custom_registry() {
    fn drop_data(_i: &[u8]) -> Result<LinkLayer, PcapError> {
        Ok(LinkLayer::Unknown(Vec::new()))
    }
    let mut registry = LinkLayerRegistry::new();
    registry.register(Linktype::ETHERNET, drop_data);
    let reader = PcapReader::with_registry(TEST_BE, registry).expect("PcapReader");
    assert!(reader.registry().contains(Linktype::ETHERNET));
    for pkt in reader {
        assert_eq!(pkt.expect("packet").data, LinkLayer::Unknown(Vec::new()));
    }

    let mut stream = &TEST_BE[24..];
    let empty = LinkLayerRegistry::new();
    let pkt = read_next_packet_with(&mut stream, false, Linktype::ETHERNET, &empty)
        .expect("packet");
    assert_eq!(pkt.data.payload(), &TEST_BE[40..56]);
}

#[test]
fn test_io_error_passthrough() {
    struct Failing<'a> {
        data: &'a [u8],
    }
    impl<'a> Read for Failing<'a> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            let n = self.data.read(buf)?;
            Ok(n)
        }
    }
    let mut stream = Failing { data: &TEST_BE[..30] };
    let (header, flipped) = open_capture(&mut stream).expect("open_capture");
    match read_next_packet(&mut stream, flipped, header.network) {
        Err(PcapError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
        r => panic!("unexpected result {:?}", r),
    }
    let reader = PcapReader::new(Failing { data: &TEST_BE[..24] }).expect("PcapReader");
    assert_eq!(reader.get_ref().data.len(), 0);
    assert!(reader.into_inner().data.is_empty());
}
