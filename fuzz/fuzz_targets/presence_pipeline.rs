#![no_main]

use copresence::{analyze, compute_total_presence, IntervalMap};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the bytes into three little-endian u64 streams: lesson, pupil, tutor
    let words: Vec<u64> = data
        .chunks_exact(8)
        .map(|c| u64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect();
    if words.len() < 2 {
        return;
    }

    let rest = &words[2..];
    let split = rest.len() / 2;

    let mut map = IntervalMap::new();
    map.insert("lesson".to_string(), words[..2].to_vec());
    map.insert("pupil".to_string(), rest[..split].to_vec());
    map.insert("tutor".to_string(), rest[split..].to_vec());

    // Must never panic; valid input must agree between both entry points
    if let Ok(total) = compute_total_presence(&map) {
        let report = analyze(&map).expect("analyze rejected input that compute accepted");
        assert_eq!(report.total, total);
        assert!(total <= report.pupil_presence.min(report.tutor_presence));
    }
});
