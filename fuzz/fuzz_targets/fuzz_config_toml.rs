//! Fuzz target for config TOML parsing and resolution.
//!
//! Goal: parsing and resolving arbitrary config text should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = branchguard_settings::parse_config_toml(text) {
            // Resolution may reject the config, but must not panic.
            let _ = branchguard_settings::resolve_config(
                cfg,
                branchguard_settings::Overrides::default(),
            );
        }
    }
});
