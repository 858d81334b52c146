#![no_main]
use libfuzzer_sys::fuzz_target;
use zenppm::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce an identical raster
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    let info = ImageInfo::from_bytes(data).expect("decodable input must probe");
    assert_eq!(info.width, decoded.width());
    assert_eq!(info.height, decoded.height());

    let reencoded = encode(&decoded, enough::Unstoppable).expect("valid raster must encode");
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
});
