#![no_main]

use libfuzzer_sys::fuzz_target;
use ntr::domain::services::OrderedDocument;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing arbitrary package.json text must never panic
        if let Ok(mut doc) = OrderedDocument::parse(content) {
            doc.set("lint-staged", serde_json::json!({}));
            let _ = doc.to_pretty_string();
        }
    }
});
