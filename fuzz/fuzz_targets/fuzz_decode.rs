#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    let _ = zenppm::ImageInfo::from_bytes(data);
    let _ = zenppm::decode(data, enough::Unstoppable);
    let _ = zenppm::DecodeRequest::new(data)
        .with_strict_separator(true)
        .decode(enough::Unstoppable);
});
