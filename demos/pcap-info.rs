use legacy_pcap::*;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

fn main() {
    for arg in env::args().skip(1) {
        if let Err(e) = print_pcap_info(&arg) {
            eprintln!("{}: {}", arg, e);
        }
    }
}

fn print_pcap_info(arg: &str) -> Result<(), Box<dyn Error>> {
    println!("Name: {}", arg);

    let file = File::open(arg)?;
    let file_size = file.metadata()?.len();
    println!("\tfile size: {}", file_size);

    let mut stream = BufReader::new(file);
    let (header, flipped) = open_capture(&mut stream)?;
    println!("\tversion: {}.{}", header.version_major, header.version_minor);
    println!("\tbyte order: {}", if flipped { "flipped" } else { "natural" });
    println!("\tthiszone: {}", header.thiszone);
    println!("\tsnaplen: {}", header.snaplen);
    println!("\tData Link Type: {}", header.network);

    let mut num_packets = 0;
    let mut num_truncated = 0;
    let mut num_size_limited = 0;

    loop {
        match read_next_packet(&mut stream, flipped, header.network) {
            Ok(packet) => {
                print_packet_info(&packet);
                num_packets += 1;
                if packet.is_truncated() {
                    num_truncated += 1;
                }
            }
            Err(PcapError::Eof) => break,
            // record data was consumed, decoding can go on
            Err(PcapError::PacketSizeLimited) => num_size_limited += 1,
            Err(e @ PcapError::FrameTooShort { .. }) => println!("\t\t<invalid frame: {}>", e),
            Err(e) => return Err(e.into()),
        }
    }

    println!("\tnum_packets: {}", num_packets);
    println!("\ttruncated: {}", num_truncated);
    println!("\tsize-limited: {}", num_size_limited);

    Ok(())
}

fn print_packet_info(packet: &Packet) {
    print!(
        "\t\t{}.{:06} {}/{} bytes",
        packet.timestamp_secs(),
        packet.timestamp_micros(),
        packet.included_len,
        packet.actual_len
    );
    match &packet.data {
        LinkLayer::Ethernet(frame) => {
            print!(" {} -> {} {}", frame.source, frame.destination, frame.ethertype);
            if let Some(vlan) = frame.vlan {
                print!(" vlan {}", vlan.vlan_id);
            }
            println!();
        }
        LinkLayer::Unknown(_) => println!(" (not decoded)"),
        l => println!(" {} bytes of payload", l.payload().len()),
    }
}
