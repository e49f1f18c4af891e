//! Leading comment recovery for declaration members.

use std::ops::Range;

use crate::types::MemberNode;

/// Comment text attached to `member`.
///
/// Collects every comment in the member's leading trivia in source order,
/// joins them with newlines and trims the result. Whitespace-only trivia
/// yields an empty string.
#[must_use]
pub fn leading_comment(source: &str, member: &MemberNode) -> String {
    let trivia = source.get(member.leading_trivia.clone()).unwrap_or_default();
    comment_ranges(trivia)
        .into_iter()
        .map(|range| &trivia[range])
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Byte ranges of the `//` and `/* */` comments at the start of `trivia`.
///
/// Scanning stops at the first character that is neither whitespace nor
/// part of a comment. A block comment missing its terminator runs to the
/// end of the input.
fn comment_ranges(trivia: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut pos = 0;

    while let Some(c) = trivia[pos..].chars().next() {
        let rest = &trivia[pos..];
        if c.is_whitespace() {
            pos += c.len_utf8();
        } else if rest.starts_with("//") {
            let end = rest
                .find(['\n', '\r'])
                .map_or(trivia.len(), |offset| pos + offset);
            ranges.push(pos..end);
            pos = end;
        } else if rest.starts_with("/*") {
            let end = rest[2..]
                .find("*/")
                .map_or(trivia.len(), |offset| pos + 2 + offset + 2);
            ranges.push(pos..end);
            pos = end;
        } else {
            break;
        }
    }

    ranges
}
