//! Header validation: magic, bounds, maxval, comments, truncation.

use enough::Unstoppable;
use zenppm::*;

/// A P6 file image with `header` followed by `w * h * 3` pixel bytes.
fn file(header: &str, w: usize, h: usize) -> Vec<u8> {
    let mut out = header.as_bytes().to_vec();
    out.extend((0..w * h * 3).map(|i| (i * 7) as u8));
    out
}

fn decode_err(data: &[u8]) -> PpmError {
    decode(data, Unstoppable).expect_err("decode should fail")
}

// ── magic ────────────────────────────────────────────────────────────

#[test]
fn wrong_magic_rejected() {
    for header in ["P3\n2 2\n255\n", "P5\n2 2\n255\n", "p6\n2 2\n255\n", "XY\n2 2\n255\n"] {
        let err = decode_err(&file(header, 2, 2));
        assert!(matches!(err, PpmError::BadMagic), "{header:?}: {err:?}");
    }
}

#[test]
fn magic_must_be_followed_by_separator() {
    let err = decode_err(&file("P66 2 2 255\n", 2, 2));
    assert!(matches!(err, PpmError::BadMagic));
    let err = decode_err(&file("P6x2 2 255\n", 2, 2));
    assert!(matches!(err, PpmError::BadMagic));
}

#[test]
fn short_input_is_truncated_header() {
    for data in [&b""[..], b"P6", b"P6\n1 1\n255\n\x00"] {
        let err = decode_err(data);
        assert!(
            matches!(err, PpmError::TruncatedHeader { len } if len == data.len()),
            "{err:?}"
        );
    }
}

// ── dimensions ───────────────────────────────────────────────────────

#[test]
fn width_out_of_range() {
    let err = decode_err(&file("P6\n0 1\n255\n", 1, 1));
    assert!(matches!(err, PpmError::BadWidth(Some(0))));
    let err = decode_err(&file("P6\n8193 1\n255\n", 1, 1));
    assert!(matches!(err, PpmError::BadWidth(Some(8193))));
    let err = decode_err(&file("P6\n99999999999 1\n255\n", 1, 1));
    assert!(matches!(err, PpmError::BadWidth(Some(u32::MAX))));
}

#[test]
fn height_out_of_range() {
    let err = decode_err(&file("P6\n1 0\n255\n", 1, 1));
    assert!(matches!(err, PpmError::BadHeight(Some(0))));
    let err = decode_err(&file("P6\n1 8193\n255\n", 1, 1));
    assert!(matches!(err, PpmError::BadHeight(Some(8193))));
}

#[test]
fn missing_fields() {
    let err = decode_err(b"P6\n  # only a comment\n");
    assert!(matches!(err, PpmError::BadWidth(None)));
    let err = decode_err(b"P6\n12 abcdefghijk");
    assert!(matches!(err, PpmError::BadHeight(None)));
    let err = decode_err(b"P6\n12 12 -255\n\x00\x00");
    assert!(matches!(err, PpmError::BadMaxval(None)));
}

#[test]
fn largest_dimensions_accepted() {
    let info = ImageInfo::from_bytes(b"P6\n8192 8192\n255\n").unwrap();
    assert_eq!((info.width, info.height), (8192, 8192));
    assert_eq!(info.pixel_bytes(), 8192 * 8192 * 3);

    let wide = decode(&file("P6\n8192 1\n255\n", 8192, 1), Unstoppable).unwrap();
    assert_eq!(wide.width(), 8192);
    let tall = decode(&file("P6\n1 8192\n255\n", 1, 8192), Unstoppable).unwrap();
    assert_eq!(tall.height(), 8192);
}

// ── maxval ───────────────────────────────────────────────────────────

#[test]
fn maxval_must_be_255() {
    for (header, maxval) in [("P6\n2 2\n254\n", 254), ("P6\n2 2\n256\n", 256), ("P6\n2 2\n65535\n", 65535)] {
        let err = decode_err(&file(header, 2, 2));
        assert!(matches!(err, PpmError::BadMaxval(Some(v)) if v == maxval), "{err:?}");
    }
    assert!(decode(&file("P6\n2 2\n255\n", 2, 2), Unstoppable).is_ok());
}

// ── comments ─────────────────────────────────────────────────────────

#[test]
fn comments_between_tokens_are_transparent() {
    let plain = decode(&file("P6\n3 2\n255\n", 3, 2), Unstoppable).unwrap();
    for header in [
        "P6#right after magic\n3 2\n255\n",
        "P6\n# before width\n3 2\n255\n",
        "P6\n3\n# between width and height\n2\n255\n",
        "P6\n3 2 # trailing\n# another\n255\n",
        "P6 3 2\r\n# crlf comment\r\n255\n",
        "P6\t3\t2\t255\r",
    ] {
        let decoded = decode(&file(header, 3, 2), Unstoppable).unwrap();
        assert_eq!(decoded, plain, "{header:?}");
    }
}

#[test]
fn nul_byte_inside_comment_is_skipped() {
    let decoded = decode(b"P6\n# a\x00b\n1 1\n255\n\x01\x02\x03", Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &[1, 2, 3]);
}

#[test]
fn comment_after_maxval_then_separator() {
    let plain = decode(&file("P6\n3 2\n255\n", 3, 2), Unstoppable).unwrap();
    let decoded = decode(&file("P6\n3 2\n255# tail\n\n", 3, 2), Unstoppable).unwrap();
    assert_eq!(decoded, plain);
}

#[test]
fn pixel_region_may_start_with_whitespace_or_hash() {
    // Only one separator byte is consumed; the rest is pixel data.
    let data = b"P6\n2 1\n255\n \n#\t\r\x00";
    let decoded = decode(data, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), b" \n#\t\r\x00");
}

#[test]
fn strict_separator_option() {
    let data = file("P6\n1 1\n255x", 1, 1);
    assert!(decode(&data, Unstoppable).is_ok());
    let err = DecodeRequest::new(&data)
        .with_strict_separator(true)
        .decode(Unstoppable)
        .unwrap_err();
    assert!(matches!(err, PpmError::BadSeparator { offset: 10, byte: b'x' }));

    let ok = DecodeRequest::new(&file("P6\n1 1\n255\t", 1, 1))
        .with_strict_separator(true)
        .decode(Unstoppable);
    assert!(ok.is_ok());
}

// ── pixel data ───────────────────────────────────────────────────────

#[test]
fn truncated_pixel_data() {
    let mut data = file("P6\n4 4\n255\n", 4, 4);
    data.pop();
    let err = decode_err(&data);
    assert!(matches!(
        err,
        PpmError::TruncatedPixelData {
            needed: 48,
            actual: 47
        }
    ));
}

#[test]
fn exact_and_trailing_pixel_data() {
    let data = file("P6\n4 4\n255\n", 4, 4);
    let exact = decode(&data, Unstoppable).unwrap();
    assert_eq!(exact.pixels(), &data[data.len() - 48..]);

    let mut padded = data.clone();
    padded.extend_from_slice(b"trailing garbage");
    assert_eq!(decode(&padded, Unstoppable).unwrap(), exact);
}

#[test]
fn minimal_fourteen_byte_file() {
    let data = b"P6 1 1 255\n\x0a\x0b\x0c";
    assert_eq!(data.len(), 14);
    let r = decode(data, Unstoppable).unwrap();
    assert_eq!(r.pixels(), &[0x0a, 0x0b, 0x0c]);
}

#[test]
fn errors_have_specific_messages() {
    assert_eq!(
        decode_err(&file("P6\n1 1\n254\n", 1, 1)).to_string(),
        "unsupported maxval: 254 (only 255 is supported)"
    );
    assert_eq!(
        decode_err(b"P6\n#no numbers here\n").to_string(),
        "invalid width: missing"
    );
}
