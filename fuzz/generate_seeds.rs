#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // Comments everywhere a token boundary allows one
    let commented = b"P6#a\n2#b\n1 #c\r\n255#d\n\n\x01\x02\x03\x04\x05\x06";
    fs::write(format!("{dir}/ppm_comments.ppm"), commented).unwrap();

    // Minimal 14-byte file
    fs::write(format!("{dir}/ppm_min.ppm"), b"P6 1 1 255 abc").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p6_no_pixels.bin"), b"P6\n4 4\n255\n").unwrap();
    fs::write(format!("{dir}/p6_maxval_16bit.bin"), b"P6\n1 1\n65535\n\x00\x00\x00\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/p6_huge.bin"), b"P6\n99999999999 99999999999\n255\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
