//! Byte-exact reference vectors for commands and LPP telemetry.
//!
//! Expected bytes were produced independently of this crate, by building each
//! frame by hand from the firmware's documented layouts.

use meshcore_codec::{
    encode_command, encode_lpp_entry, CodecError, Command, CommandKind, Destination, FieldValue,
    LppEntry, LppFrame, PublicKeyPrefix, SensorKind, StatsKind,
};

const TIMESTAMP: u32 = 1_704_067_200; // 2024-01-01 00:00:00 UTC

fn h(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).expect("valid hex in test vector")
}

fn cat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

fn prefix() -> PublicKeyPrefix {
    PublicKeyPrefix::from_hex("0123456789AB").unwrap()
}

fn dst32() -> Destination {
    Destination::from_hex("0123456789AB").unwrap()
}

fn padded_dst() -> Vec<u8> {
    let mut out = h("0123456789AB");
    out.resize(32, 0);
    out
}

fn encode(cmd: Command) -> Vec<u8> {
    cmd.encode().unwrap().to_vec()
}

#[test]
fn test_device_commands() {
    assert_eq!(
        encode(Command::AppStart {
            client_id: "MCore".into()
        }),
        cat(&[&[0x01, 0x03], b"      ", b"MCore"])
    );
    assert_eq!(encode(Command::DeviceQuery), h("16 03"));
    assert_eq!(encode(Command::GetBattery), h("14"));
    assert_eq!(encode(Command::GetTime), h("05"));
    assert_eq!(
        encode(Command::SetTime {
            timestamp: TIMESTAMP
        }),
        h("06 80 00 92 65")
    );
    assert_eq!(
        encode(Command::SetName {
            name: "TestNode".into()
        }),
        cat(&[&[0x08], b"TestNode"])
    );
    assert_eq!(
        encode(Command::SetCoords {
            latitude: 37.7749,
            longitude: -122.4194
        }),
        h("0E 34 66 40 02 38 07 B4 F8 00 00 00 00")
    );
    assert_eq!(encode(Command::SetTxPower { power: 20 }), h("0C 14 00 00 00"));
    assert_eq!(
        encode(Command::SetRadio {
            frequency_mhz: 906.875,
            bandwidth_khz: 250.0,
            spreading_factor: 11,
            coding_rate: 8,
        }),
        h("0B 7B D6 0D 00 90 D0 03 00 0B 08")
    );
    assert_eq!(encode(Command::SendAdvertisement { flood: false }), h("07"));
    assert_eq!(encode(Command::SendAdvertisement { flood: true }), h("07 01"));
    assert_eq!(encode(Command::Reboot), cat(&[&[0x13], b"reboot"]));
    assert_eq!(encode(Command::GetContacts), h("04"));
    assert_eq!(encode(Command::GetMessage), h("0A"));
}

#[test]
fn test_messaging_commands() {
    let ts = TIMESTAMP.to_le_bytes();
    let dst = h("0123456789AB");

    assert_eq!(
        encode(Command::SendMessage {
            attempt: 0,
            timestamp: TIMESTAMP,
            destination: prefix(),
            text: "Hello".into(),
        }),
        cat(&[&[0x02, 0x00, 0x00], &ts, &dst, b"Hello"])
    );
    assert_eq!(
        encode(Command::SendCommand {
            timestamp: TIMESTAMP,
            destination: prefix(),
            command: "status".into(),
        }),
        cat(&[&[0x02, 0x01, 0x00], &ts, &dst, b"status"])
    );
    assert_eq!(
        encode(Command::SendChannelMessage {
            channel: 0,
            timestamp: TIMESTAMP,
            text: "Hi".into(),
        }),
        cat(&[&[0x03, 0x00, 0x00], &ts, b"Hi"])
    );
}

#[test]
fn test_session_commands_use_full_identity() {
    let dst = padded_dst();

    assert_eq!(
        encode(Command::SendLogin {
            destination: dst32(),
            password: "secret".into(),
        }),
        cat(&[&[0x1A], &dst, b"secret"])
    );
    assert_eq!(
        encode(Command::SendLogout {
            destination: dst32()
        }),
        cat(&[&[0x1D], &dst])
    );
    assert_eq!(
        encode(Command::SendStatusRequest {
            destination: dst32()
        }),
        cat(&[&[0x1B], &dst])
    );
    assert_eq!(
        encode(Command::PathDiscovery {
            destination: dst32()
        }),
        cat(&[&[0x34, 0x00], &dst])
    );
}

#[test]
fn test_channel_and_stats_commands() {
    assert_eq!(encode(Command::GetChannel { index: 0 }), h("1F 00"));

    let mut name = b"General".to_vec();
    name.resize(32, 0);
    let secret: [u8; 16] = std::array::from_fn(|i| i as u8);
    assert_eq!(
        encode(Command::SetChannel {
            index: 0,
            name: "General".into(),
            secret,
        }),
        cat(&[&[0x20, 0x00], &name, &secret])
    );

    assert_eq!(
        encode(Command::GetStats {
            stats: StatsKind::Core
        }),
        h("38 00")
    );
    assert_eq!(
        encode(Command::GetStats {
            stats: StatsKind::Radio
        }),
        h("38 01")
    );
    assert_eq!(
        encode(Command::GetStats {
            stats: StatsKind::Packets
        }),
        h("38 02")
    );
}

#[test]
fn test_key_and_trace_commands() {
    assert_eq!(encode(Command::GetSelfTelemetry), h("27 00 00 00"));
    assert_eq!(encode(Command::ExportPrivateKey), h("17"));
    assert_eq!(encode(Command::SignStart), h("21"));
    assert_eq!(encode(Command::SignFinish), h("23"));
    assert_eq!(
        encode(Command::SendTrace {
            tag: 12345,
            auth: 67890,
            flags: 0,
            path: Vec::new(),
        }),
        h("24 39 30 00 00 32 09 01 00 00")
    );
}

#[test]
fn test_contact_and_maintenance_commands() {
    let dst = padded_dst();

    assert_eq!(
        encode(Command::RemoveContact {
            destination: dst32()
        }),
        cat(&[&[0x0F], &dst])
    );
    assert_eq!(
        encode(Command::ResetPath {
            destination: dst32()
        }),
        cat(&[&[0x0D], &dst])
    );
    assert_eq!(
        encode(Command::HasConnection {
            destination: dst32()
        }),
        cat(&[&[0x1C], &dst])
    );
    assert_eq!(encode(Command::GetTuningParams), h("2B"));
    assert_eq!(encode(Command::GetCustomVars), h("28"));
    assert_eq!(encode(Command::SetDevicePin { pin: 123_456 }), h("25 40 E2 01 00"));
    assert_eq!(encode(Command::FactoryReset), cat(&[&[0x33], b"reset"]));
}

#[test]
fn test_remote_request_commands() {
    let dst = padded_dst();

    // Four zero bytes after the opcode, so the key starts at offset 5.
    let frame = encode(Command::SendTelemetryRequest {
        destination: dst32(),
    });
    assert_eq!(frame.len(), 37);
    assert_eq!(frame, cat(&[&[0x27, 0x00, 0x00, 0x00, 0x00], &dst]));

    assert_eq!(
        encode(Command::SendBinaryRequest {
            destination: dst32(),
            data: vec![0x01, 0x02, 0x03],
        }),
        cat(&[&[0x32], &dst, &[0x01, 0x02, 0x03]])
    );
}

#[test]
fn test_signing_and_key_import_commands() {
    assert_eq!(
        encode(Command::SignData {
            data: vec![0xDE, 0xAD, 0xBE, 0xEF],
        }),
        h("22 DE AD BE EF")
    );

    let identity: [u8; 64] = std::array::from_fn(|i| i as u8);
    let frame = encode(Command::ImportPrivateKey { identity });
    assert_eq!(frame.len(), 65);
    assert_eq!(frame, cat(&[&[0x18], &identity]));
}

#[test]
fn test_generic_entry_point_matches_typed() {
    let typed = Command::SetTime {
        timestamp: TIMESTAMP,
    }
    .encode()
    .unwrap();
    let generic = encode_command(CommandKind::SetTime, &[FieldValue::from(TIMESTAMP)]).unwrap();
    assert_eq!(typed, generic);

    let kind: CommandKind = "send_login".parse().unwrap();
    let frame = encode_command(
        kind,
        &[FieldValue::from(dst32()), FieldValue::from("secret")],
    )
    .unwrap();
    assert_eq!(frame.opcode(), 0x1A);
    assert_eq!(frame.len(), 1 + 32 + 6);
}

#[test]
fn test_unknown_identifiers() {
    let err = "warp_drive".parse::<CommandKind>().unwrap_err();
    assert_eq!(err, CodecError::UnknownKind("warp_drive".into()));

    let err = "radiation".parse::<SensorKind>().unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedSensorKind(_)));
}

#[test]
fn test_encoding_is_idempotent() {
    let cmd = Command::SendMessage {
        attempt: 2,
        timestamp: TIMESTAMP,
        destination: prefix(),
        text: "again".into(),
    };
    assert_eq!(cmd.encode().unwrap(), cmd.encode().unwrap());

    let entry = LppEntry::gps(4, 37.7749, -122.4194, 10.0);
    assert_eq!(entry.encode().unwrap(), entry.encode().unwrap());
}

#[test]
fn test_lpp_entries() {
    let mut frame = LppFrame::new();
    frame.add_temperature(1, 25.5);
    assert_eq!(frame.to_bytes().unwrap(), h("01 67 00 FF"));

    let mut frame = LppFrame::new();
    frame.add_humidity(2, 65.0);
    assert_eq!(frame.to_bytes().unwrap(), h("02 68 82"));

    let mut frame = LppFrame::new();
    frame.add_analog_input(3, 3.3);
    assert_eq!(frame.to_bytes().unwrap(), h("03 02 01 4A"));

    let mut frame = LppFrame::new();
    frame.add_gps(4, 37.7749, -122.4194, 10.0);
    assert_eq!(frame.to_bytes().unwrap(), h("04 88 05 C3 95 ED 51 FE 00 03 E8"));

    // 10132.5 rounds up
    let mut frame = LppFrame::new();
    frame.add_barometric_pressure(5, 1013.25);
    assert_eq!(frame.to_bytes().unwrap(), h("05 73 27 95"));

    let mut frame = LppFrame::new();
    frame.add_accelerometer(6, 0.0, 0.0, 1.0);
    assert_eq!(frame.to_bytes().unwrap(), h("06 71 00 00 00 00 03 E8"));
}

#[test]
fn test_lpp_multi_entry_frame() {
    let mut frame = LppFrame::new();
    frame
        .add_temperature(1, 25.5)
        .add_humidity(2, 65.0)
        .add_gps(4, 37.7749, -122.4194, 10.0);
    assert_eq!(
        frame.to_bytes().unwrap(),
        h("01 67 00 FF 02 68 82 04 88 05 C3 95 ED 51 FE 00 03 E8")
    );
    assert_eq!(
        encode_lpp_entry(2, SensorKind::Humidity, &[65.0]).unwrap(),
        h("02 68 82")
    );
}
