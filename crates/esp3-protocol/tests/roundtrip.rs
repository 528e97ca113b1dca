//! Cross-module round-trip tests for the ESP3 codec.

use esp3_protocol::{
    radio_advanced, radio_erp1, radio_message, radio_sub_tel, remote_man_command, response,
    DeviceAddress, FrameCodec, Packet, PacketType, Response, ReturnCode,
};

const SENDER: DeviceAddress = DeviceAddress([0x01, 0x82, 0x5D, 0xAB]);
const DEST: DeviceAddress = DeviceAddress([0xAA, 0xBB, 0xCC, 0xDD]);

fn sample_packets() -> Vec<Packet> {
    let parts = vec![
        radio_erp1(0xD5, &[0x09], SENDER, 0x00, DeviceAddress::BROADCAST),
        radio_erp1(
            0xA5,
            &[0x00, 0x00, 0x64, 0x08],
            SENDER,
            0x00,
            DeviceAddress::BROADCAST,
        ),
        radio_sub_tel(0xF6, &[0x30], SENDER, 0x20, 1, DEST, 0x2D, 0),
        radio_advanced(&[0x20, 0x01, 0x02, 0x03], 3, 0x45),
        radio_message(0xB0, &[0x11, 0x22, 0x33], DEST, SENDER),
        remote_man_command(0x0004, 0x07FF, &[0x01], DEST, SENDER, false),
        response(ReturnCode::Ok, &[0x10, 0x20]),
        response(ReturnCode::OperationDenied, &[]),
    ];

    parts
        .into_iter()
        .map(|(ty, data, opt)| Packet::new(ty, data, opt).unwrap())
        .collect()
}

#[test]
fn test_every_builder_roundtrips() {
    for packet in sample_packets() {
        let decoded = Packet::decode(&packet.encode()).unwrap();
        assert_eq!(decoded, packet, "round-trip mismatch for {:?}", packet);
    }
}

#[test]
fn test_stream_reassembly_across_chunk_sizes() {
    let packets = sample_packets();
    let mut stream = Vec::new();
    for packet in &packets {
        stream.extend_from_slice(&packet.encode());
    }

    // Every chunking of the same byte stream must yield the same packets.
    for chunk_size in [1, 2, 3, 5, 7, 16, 64, stream.len()] {
        let mut codec = FrameCodec::new();
        let mut decoded = Vec::new();

        for chunk in stream.chunks(chunk_size) {
            codec.push(chunk);
            while let Some(packet) = codec.next_packet().unwrap() {
                decoded.push(packet);
            }
        }

        assert_eq!(decoded, packets, "chunk size {} diverged", chunk_size);
    }
}

#[test]
fn test_response_reinterpretation_end_to_end() {
    let (ty, data, opt) = response(ReturnCode::OperationDenied, &[]);
    let wire = Packet::new(ty, data, opt).unwrap().encode();

    let packet = Packet::decode(&wire).unwrap();
    assert_eq!(packet.packet_type(), PacketType::Response);

    let resp = Response::try_from(&packet).unwrap();
    assert!(resp.ret_operation_denied());
    assert!(!resp.ret_ok());
}
