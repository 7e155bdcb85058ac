// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use borsh_schema::TypeExpr;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    // Whatever parses must print back to an equivalent expression.
    if let Ok(expr) = src.parse::<TypeExpr>() {
        let reparsed: TypeExpr = expr.to_string().parse().expect("display reparses");
        assert_eq!(reparsed, expr);
    }
});
