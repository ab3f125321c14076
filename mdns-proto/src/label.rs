use std::fmt;

/// One DNS label: 1-63 bytes of text, no embedded length octet or separator.
///
/// Stored as a `String` rather than raw bytes because every label this
/// engine ever constructs comes from a service-type string, a subtype
/// name, or a cached host name -- all UTF-8 text by construction. Wire
/// bytes are simply the UTF-8 encoding, written verbatim (§4.1).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct Label(String);

impl Label {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Encoded length in bytes, the quantity the 63-byte label limit and
    /// the packet size cap are measured against.
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps ASCII 'A'..'Z' to 'a'..'z'; every other code point, including
/// accented letters, passes through unchanged. This is DNS case folding
/// (RFC 1035 §2.3.3), not Unicode case folding.
pub fn to_dns_lowercase(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c
    }
}

fn fold_byte(b: u8) -> u8 {
    if b.is_ascii_uppercase() {
        b.to_ascii_lowercase()
    } else {
        b
    }
}

/// Byte-length-equal and per-byte DNS-case-equal. Folding only ever
/// touches single ASCII bytes, so comparing the UTF-8 encoding
/// byte-by-byte gives the same answer as folding the decoded `char`s
/// would, without the allocation.
pub fn equals_ignore_dns_case(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| fold_byte(x) == fold_byte(y))
}

/// Label-sequence-length-equal and per-label `equals_ignore_dns_case`.
pub fn equals_labels_ignore_dns_case(a: &[Label], b: &[Label]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| equals_ignore_dns_case(x.as_str(), y.as_str()))
}

const SUB_LABEL: &str = "_sub";

/// True when `a == b` (DNS-case-insensitive), or when `b` is the RFC 6763
/// subtype-qualified form of `a`: `b = ["_<subtype>", "_sub", *a]`.
pub fn type_equals_or_is_subtype(a: &[Label], b: &[Label]) -> bool {
    if equals_labels_ignore_dns_case(a, b) {
        return true;
    }
    b.len() == a.len() + 2
        && equals_ignore_dns_case(b[1].as_str(), SUB_LABEL)
        && equals_labels_ignore_dns_case(&b[2..], a)
}

/// Longest prefix of `name` whose UTF-8 encoding is at most `max_bytes`
/// long, never splitting a code point.
pub fn truncate_service_name(name: &str, max_bytes: usize) -> &str {
    // UTF-8 is at most 4 bytes per code point, so if the string is
    // already short enough in code-point count it cannot exceed the
    // byte budget.
    if name.len() <= max_bytes / 4 {
        return name;
    }
    if name.len() <= max_bytes {
        return name;
    }
    let mut end = max_bytes;
    while end > 0 && !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
