#![no_main]

use libfuzzer_sys::fuzz_target;
use xception::literal_encode;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let out = literal_encode(Some(s));

        assert!(out.len() >= 2);
        assert!(out.starts_with('"') && out.ends_with('"'));
        assert!(out.bytes().all(|b| (b' '..=b'~').contains(&b)));
        // 1, 2 or 6 bytes per UTF-16 code unit, plus the quotes
        assert!(out.len() <= s.encode_utf16().count() * 6 + 2);
    }
});
