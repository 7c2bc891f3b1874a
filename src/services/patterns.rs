// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::sync::LazyLock;

use regex::Regex;

/// One denylisted lexical shape: a case-insensitive, non-anchored matcher
/// plus an informal category label.
pub struct SourcePattern {
    pub category: &'static str,
    pub matcher: Regex,
}

/// The denylist, in application order.
///
/// Both the sanitizer and the safety classifier consume this exact list;
/// the sanitizer is order-sensitive, the classifier is not. Only code
/// patterns appear here; markup-like syntax is never targeted.
static DENYLIST: LazyLock<Vec<SourcePattern>> = LazyLock::new(|| {
    vec![
        SourcePattern {
            category: "dynamic-eval",
            matcher: Regex::new(r"(?i)eval\s*\(").unwrap(),
        },
        SourcePattern {
            category: "dynamic-eval",
            matcher: Regex::new(r"(?i)Function\s*\(").unwrap(),
        },
        SourcePattern {
            category: "deferred-eval",
            matcher: Regex::new(r"(?i)setTimeout\s*\(").unwrap(),
        },
        SourcePattern {
            category: "deferred-eval",
            matcher: Regex::new(r"(?i)setInterval\s*\(").unwrap(),
        },
        SourcePattern {
            category: "dynamic-eval",
            matcher: Regex::new(r"(?i)new\s+Function").unwrap(),
        },
        SourcePattern {
            category: "global-object-access",
            matcher: Regex::new(r"(?i)document\.").unwrap(),
        },
        SourcePattern {
            category: "global-object-access",
            matcher: Regex::new(r"(?i)window\.").unwrap(),
        },
        SourcePattern {
            category: "storage-access",
            matcher: Regex::new(r"(?i)localStorage").unwrap(),
        },
        SourcePattern {
            category: "storage-access",
            matcher: Regex::new(r"(?i)sessionStorage").unwrap(),
        },
        SourcePattern {
            category: "storage-access",
            matcher: Regex::new(r"(?i)indexedDB").unwrap(),
        },
        SourcePattern {
            category: "network-access",
            matcher: Regex::new(r"(?i)fetch\s*\(").unwrap(),
        },
        SourcePattern {
            category: "network-access",
            matcher: Regex::new(r"(?i)XMLHttpRequest").unwrap(),
        },
        SourcePattern {
            category: "network-access",
            matcher: Regex::new(r"(?i)WebSocket").unwrap(),
        },
        SourcePattern {
            category: "worker-spawn",
            matcher: Regex::new(r"(?i)Worker").unwrap(),
        },
        SourcePattern {
            category: "module-load",
            matcher: Regex::new(r"(?i)import\s*\(").unwrap(),
        },
        SourcePattern {
            category: "module-load",
            matcher: Regex::new(r"(?i)require\s*\(").unwrap(),
        },
    ]
});

pub fn denylist() -> &'static [SourcePattern] {
    &DENYLIST
}
