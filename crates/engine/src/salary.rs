//! Digit extraction from free-text salary strings.
//!
//! Salaries are display strings ("$100k - $130k"), so every numeric
//! comparison in the engine works on digits pulled out of that text. The
//! extraction rules deliberately reproduce the shipped behavior:
//!
//! - the *head key* is the first three digits of the digit-stripped string
//!   ("$100k - $130k" -> "100130" -> 100) and is the lower-bound proxy used
//!   by the min-salary check and both salary sort directions;
//! - the *tail key* is the last three digits ("100130" -> 130) and is the
//!   upper-bound proxy used only by the max-salary check;
//! - a filter *bound* parses every digit in the user's input ("$1,200" ->
//!   1200), with no slicing.
//!
//! The head/tail asymmetry is inherited, not designed. Changing it would
//! change which postings match a live query, so it stays.

/// All ASCII digits of `s`, in order.
fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// First three digits of the digit-stripped string, if any.
pub fn head_key(s: &str) -> Option<u64> {
    let d = digits(s);
    if d.is_empty() {
        return None;
    }
    let cut = d.len().min(3);
    d[..cut].parse().ok()
}

/// Last three digits of the digit-stripped string, if any.
pub fn tail_key(s: &str) -> Option<u64> {
    let d = digits(s);
    if d.is_empty() {
        return None;
    }
    let start = d.len().saturating_sub(3);
    d[start..].parse().ok()
}

/// Parse a user-entered salary bound. `None` when the input has no digits
/// (the bound then fails its own branch of the range check, nothing more).
pub fn parse_bound(s: &str) -> Option<u64> {
    digits(s).parse().ok()
}
