// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use crate::services::patterns::denylist;

/// True iff no denylisted pattern matches `code`.
///
/// Every matcher is tested against the unmodified input independently of
/// the others; the scan short-circuits on the first hit but the verdict is
/// the same as checking the whole table. This is a lexical filter, not a
/// security boundary.
pub fn is_safe(code: &str) -> bool {
    !denylist().iter().any(|p| p.matcher.is_match(code))
}

/// Category labels of every pattern that matches `code`, in table order,
/// without duplicates. Empty exactly when [`is_safe`] returns true.
pub fn violations(code: &str) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for pattern in denylist() {
        if pattern.matcher.is_match(code) && !found.contains(&pattern.category) {
            found.push(pattern.category);
        }
    }
    found
}
