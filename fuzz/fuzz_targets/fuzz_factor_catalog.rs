#![no_main]

use libfuzzer_sys::fuzz_target;

use ghgcalc::infrastructure::InMemoryFactorRepository;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = InMemoryFactorRepository::from_json_str(content);
    }
});
