// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;

use katapad::services::safety::is_safe;
use katapad::services::sanitizer::sanitize;

fuzz_target!(|code: &str| {
    let sanitized = sanitize(code);

    // Inputs the classifier passes must come back byte-for-byte
    if is_safe(code) {
        assert_eq!(sanitized, code);
    }
});
