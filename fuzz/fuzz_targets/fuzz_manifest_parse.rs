#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // A manifest that parses must survive a render/parse round trip
        if let Ok(manifest) = tagdeploy::Manifest::parse(content) {
            let again = tagdeploy::Manifest::parse(&manifest.render());
            assert_eq!(again.as_ref().ok(), Some(&manifest));
        }
    }
});
