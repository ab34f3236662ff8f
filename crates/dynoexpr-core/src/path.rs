//! Attribute path parsing.
//!
//! An attribute path is a dotted, optionally bracket-indexed reference into
//! a nested record, e.g. `info.scores[0]` or `matrix[1][2]`. Placeholders
//! are resolved against the *bare* segment name only; index groups are
//! carried through verbatim and reattached to the resolved placeholder when
//! the path is rendered, so `a[0].b` becomes `#eb_a[0].#eb_b`.

/// One dotted segment of an attribute path: the bare name used for
/// placeholder resolution, plus any `[n]` index groups lifted out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathSegment {
    /// Segment text with every index group removed.
    pub(crate) base: String,
    /// The removed index groups, concatenated verbatim (`"[1][2]"`), or
    /// empty when the segment has none.
    pub(crate) indices: String,
}

/// Split a dotted path into segments and lift the index groups out of each.
///
/// Malformed input is not rejected: brackets that do not form a complete
/// `[digits]` group stay part of the segment name, and empty segments pass
/// through and resolve like any other name.
pub(crate) fn parse(path: &str) -> Vec<PathSegment> {
    path.split('.').map(split_segment).collect()
}

fn split_segment(segment: &str) -> PathSegment {
    let mut base = String::new();
    let mut indices = String::new();
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '[' {
            let mut lookahead = chars.clone();
            let mut digits = String::new();
            while let Some(d) = lookahead.peek().copied() {
                if d.is_ascii_digit() {
                    digits.push(d);
                    lookahead.next();
                } else {
                    break;
                }
            }
            if !digits.is_empty() && lookahead.peek() == Some(&']') {
                lookahead.next();
                chars = lookahead;
                indices.push('[');
                indices.push_str(&digits);
                indices.push(']');
                continue;
            }
        }
        base.push(c);
    }

    PathSegment { base, indices }
}
