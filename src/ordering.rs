//! Kind-specific ordering of the final collections.

use std::cmp::Ordering;

/// 2D field that always sorts last.
pub const PINNED_LAST_FIELD2D: &str = "Evergreen";

/// 2D fields: ordinal ascending, with [`PINNED_LAST_FIELD2D`] at the end.
pub fn field2d_order(a: &str, b: &str) -> Ordering {
    match (a == PINNED_LAST_FIELD2D, b == PINNED_LAST_FIELD2D) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}

/// 3D fields and joysticks: ordinal descending.
pub fn descending_order(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Natural, case-insensitive ascending order.
///
/// Both names are read as one stream of tokens ranked whitespace, then
/// punctuation, then digit runs, then letters. Digit runs compare by numeric
/// value, so `"Robot 2"` precedes `"Robot 10"` and `"Team 254"` precedes
/// `"Team254"`. Letters compare case-folded. Names equal under that comparison
/// are ordered lowercase-first, then ordinally, so the result is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = tokens(a);
    let right = tokens(b);
    left.iter()
        .zip(&right)
        .map(|(l, r)| l.primary_cmp(r))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
        .then_with(|| lowercase_first(&left, &right))
        .then_with(|| a.cmp(b))
}

// Collation order for common punctuation and symbols; anything not listed
// sorts after these by code point.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Space(char),
    Punct(char),
    Digits(&'a str),
    Letter(char),
}

impl Token<'_> {
    fn rank(&self) -> u8 {
        match self {
            Token::Space(_) => 0,
            Token::Punct(_) => 1,
            Token::Digits(_) => 2,
            Token::Letter(_) => 3,
        }
    }

    fn primary_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Space(x), Token::Space(y)) => x.cmp(y),
            (Token::Punct(x), Token::Punct(y)) => punct_key(*x).cmp(&punct_key(*y)),
            (Token::Digits(x), Token::Digits(y)) => cmp_digits(x, y),
            (Token::Letter(x), Token::Letter(y)) => x.to_lowercase().cmp(y.to_lowercase()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn tokens(s: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut chars = s.char_indices().peekable();
    while let Some((start, ch)) = chars.next() {
        let token = if ch.is_ascii_digit() {
            let mut end = start + ch.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            Token::Digits(&s[start..end])
        } else if ch.is_whitespace() {
            Token::Space(ch)
        } else if ch.is_alphanumeric() {
            Token::Letter(ch)
        } else {
            Token::Punct(ch)
        };
        out.push(token);
    }
    out
}

fn punct_key(ch: char) -> (usize, char) {
    let position = PUNCTUATION_ORDER
        .chars()
        .position(|p| p == ch)
        .unwrap_or(PUNCTUATION_ORDER.len());
    (position, ch)
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// Only reached for token streams that are equal case-folded, so letters line up.
fn lowercase_first(left: &[Token<'_>], right: &[Token<'_>]) -> Ordering {
    for (l, r) in left.iter().zip(right) {
        if let (Token::Letter(x), Token::Letter(y)) = (l, r) {
            if x != y {
                match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }
        }
    }
    Ordering::Equal
}
