//! Escaping of template bodies for JavaScript single-quoted string literals.
//!
//! The transform is, in order:
//! 1. `\` becomes `\\`
//! 2. `'` becomes `\'`
//! 3. a newline becomes the two characters `\n`
//! 4. a carriage return is deleted
//!
//! Step 4 is lossy on purpose: CRLF sources come out with `\n` line markers only,
//! so the embedded string never reproduces Windows line endings. Generated files
//! already in the wild depend on this, so it must not change.
//!
//! Each input character maps to its replacement independently of its neighbours,
//! so the four steps collapse into a single pass over the input.

/// Escape `text` so it can sit between single quotes in a JavaScript source file.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Decode a literal body produced by [`escape`].
///
/// Understands `\\`, `\'` and `\n`. Any other backslash sequence, and a trailing
/// lone backslash, is kept as written.
pub fn unescape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
