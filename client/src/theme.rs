//! Design tokens and the utility stylesheet generated from them.
//!
//! DESIGN
//! ======
//! Tokens are plain constants so pages reference class names, never raw hex
//! values. `stylesheet` emits CSS custom properties on `:root` and one utility
//! class per token and property, inlined by the app shell.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt::Write;

pub const PRIMARY: &str = "#2563EB";
pub const PRIMARY_600: &str = "#1E40AF";
pub const SURFACE: &str = "#F8FAFC";
pub const SHADOW_CARD: &str = "0 6px 18px rgba(15,23,42,0.06)";

/// A named design value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub value: &'static str,
}

pub const COLORS: [Token; 3] = [
    Token { name: "primary", value: PRIMARY },
    Token { name: "primary-600", value: PRIMARY_600 },
    Token { name: "surface", value: SURFACE },
];

pub const SHADOWS: [Token; 1] = [Token { name: "card", value: SHADOW_CARD }];

/// Render the token stylesheet.
pub fn stylesheet() -> String {
    let mut css = String::from(":root {\n");
    for token in &COLORS {
        let _ = writeln!(css, "  --color-{}: {};", token.name, token.value);
    }
    for token in &SHADOWS {
        let _ = writeln!(css, "  --shadow-{}: {};", token.name, token.value);
    }
    css.push_str("}\n");

    for token in &COLORS {
        let name = token.name;
        let _ = writeln!(css, ".bg-{name} {{ background-color: var(--color-{name}); }}");
        let _ = writeln!(css, ".text-{name} {{ color: var(--color-{name}); }}");
        let _ = writeln!(css, ".border-{name} {{ border-color: var(--color-{name}); }}");
    }
    for token in &SHADOWS {
        let name = token.name;
        let _ = writeln!(css, ".shadow-{name} {{ box-shadow: var(--shadow-{name}); }}");
    }
    css
}
