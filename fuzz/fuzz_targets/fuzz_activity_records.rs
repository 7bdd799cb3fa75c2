#![no_main]

use libfuzzer_sys::fuzz_target;

use ghgcalc::ActivityRecord;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever deserializes must convert to an input or fail cleanly
        if let Ok(records) = serde_json::from_str::<Vec<ActivityRecord>>(content) {
            for record in &records {
                let _ = record.to_raw_input();
            }
        }
    }
});
