#![no_main]

use libfuzzer_sys::fuzz_target;

use ghgcalc::UnitConverterRegistry;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (value, units) = data.split_at(8);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(value);
    let value = f64::from_le_bytes(bytes);

    if let Ok(units) = std::str::from_utf8(units) {
        let mut parts = units.splitn(2, '|');
        let from = parts.next().unwrap_or_default();
        let to = parts.next().unwrap_or_default();
        let _ = UnitConverterRegistry::new().convert(value, from, to);
    }
});
