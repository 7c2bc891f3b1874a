// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;

use katapad::services::safety::{is_safe, violations};

fuzz_target!(|code: &str| {
    // The boolean verdict and the category listing must always agree
    assert_eq!(is_safe(code), violations(code).is_empty());
});
