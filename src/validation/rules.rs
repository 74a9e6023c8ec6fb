//! Rule predicates.
//!
//! Each rule receives a [`FieldContext`] and answers whether the field passes.
//! Built-in rules are installed by [`Validator::new`](super::Validator::new);
//! [`password`] is the one custom rule and is registered by the application.

use regex::Regex;

use super::engine::FieldContext;

/// Name of the `required` rule.
pub const REQUIRED: &str = "required";
/// Name of the `email` rule.
pub const EMAIL: &str = "email";
/// Name of the `oneof` rule.
pub const ONE_OF: &str = "oneof";
/// Name of the `required_with` rule.
pub const REQUIRED_WITH: &str = "required_with";
/// Name of the custom `password` rule.
pub const PASSWORD: &str = "password";

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(&email_pattern()).unwrap();

    // Unanchored: a run anywhere in the value is enough.
    static ref PASSWORD_RE: Regex = Regex::new(r"[0-9A-Za-z_]{8,}").unwrap();
}

// Letters outside ASCII count as word characters in both the local part and
// the domain.
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

fn email_pattern() -> String {
    let atom = format!(r"[a-zA-Z0-9!#$%&'*+/=?^_`{{|}}~\-{UCS}]+");
    let quoted = format!(r#""(?:[\x20\x21\x23-\x5B\x5D-\x7E{UCS}]|\\[\x20-\x7E])*""#);
    let label = format!(r"[a-zA-Z0-9{UCS}](?:[a-zA-Z0-9\-.~{UCS}]*[a-zA-Z0-9{UCS}])?");
    let tld = format!(r"[a-zA-Z{UCS}](?:[a-zA-Z0-9\-{UCS}]*[a-zA-Z{UCS}])?");

    format!(r"^(?:{atom}(?:\.{atom})*|{quoted})@(?:{label}\.)+{tld}\.?$")
}

/// Value must be non-empty.
pub fn required(ctx: &FieldContext<'_>) -> bool {
    !ctx.value.is_empty()
}

/// Value must be a syntactically valid email address.
pub fn email(ctx: &FieldContext<'_>) -> bool {
    EMAIL_RE.is_match(ctx.value)
}

/// Value must equal one of the rule parameters.
pub fn one_of(ctx: &FieldContext<'_>) -> bool {
    ctx.params.contains(&ctx.value)
}

/// Value must be non-empty whenever any sibling named in the parameters is.
pub fn required_with(ctx: &FieldContext<'_>) -> bool {
    let sibling_present = ctx
        .params
        .iter()
        .any(|name| ctx.sibling(name).is_some_and(|v| !v.is_empty()));

    !sibling_present || !ctx.value.is_empty()
}

/// Value must contain at least 8 consecutive word characters.
pub fn password(ctx: &FieldContext<'_>) -> bool {
    PASSWORD_RE.is_match(ctx.value)
}
