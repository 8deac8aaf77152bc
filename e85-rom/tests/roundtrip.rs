//! Encode/decode round trips across serial lengths and both layouts

use e85_rom::{FOOTER, Mode, Serial, Status, decode, encode, is_valid_serial};

/// Serials of every length from 1 to 12 with varied digits
fn sample_serials() -> Vec<String> {
    let digits = "918273645509";
    let mut serials = Vec::new();
    for len in 1..=12 {
        serials.push(digits[..len].to_string());
        serials.push("0".repeat(len));
        serials.push("9".repeat(len));
        serials.push(format!("{}1", "0".repeat(len - 1)));
    }
    serials
}

fn assert_round_trip(input: &str, mode: Mode) {
    assert!(is_valid_serial(input), "{input} should be valid");
    let serial = Serial::parse(input).unwrap();
    let image = encode(&serial, mode);
    assert_eq!(image.bytes.len(), mode.image_len());

    let report = decode(&image.bytes).unwrap();
    assert_eq!(report.mode, mode, "mode for {input}");
    assert_eq!(report.serial, format!("{input:0>12}"), "serial for {input}");
    assert_eq!(report.checksum_status, Status::Ok, "checksum for {input}");
    assert_eq!(report.footer_status, Status::Ok, "footer for {input}");
    assert_eq!(report.stored_checksum, image.checksum);
    assert_eq!(report.footer, FOOTER);
    assert!(report.is_valid());
}

#[test]
fn test_plain_round_trip() {
    for serial in sample_serials() {
        assert_round_trip(&serial, Mode::Plain);
    }
}

#[test]
fn test_interleaved_round_trip() {
    for serial in sample_serials() {
        assert_round_trip(&serial, Mode::Interleaved);
    }
}

#[test]
fn test_every_single_digit() {
    for digit in 0..=9 {
        let serial = digit.to_string();
        assert_round_trip(&serial, Mode::Plain);
        assert_round_trip(&serial, Mode::Interleaved);
    }
}

#[test]
fn test_interleaved_checksum_flip() {
    let mut image = encode(&Serial::parse("123456789012").unwrap(), Mode::Interleaved).bytes;
    // Low checksum byte sits at data index 6, file offset 12
    image[12] ^= 0x80;

    let report = decode(&image).unwrap();
    assert_eq!(report.mode, Mode::Interleaved);
    assert_eq!(report.checksum_status, Status::Invalid);
    assert_eq!(report.footer_status, Status::Ok);
}

#[test]
fn test_interleaved_footer_corruption() {
    let mut image = encode(&Serial::parse("123456789012").unwrap(), Mode::Interleaved).bytes;
    // Keep the filler bytes zero so the layout is still detected as Xhomer
    image[50] = 0x11;

    let report = decode(&image).unwrap();
    assert_eq!(report.mode, Mode::Interleaved);
    assert_eq!(report.footer_status, Status::Invalid);
    assert_eq!(report.checksum_status, Status::Ok);
    assert_eq!(report.footer[1], 0x11);
}
