//! Marker-delimited region splicing over line slices.
//!
//! A region is the span between the first `start` marker and the first `end`
//! marker after it. Everything outside that span is carried through untouched.

/// Split `doc` around the first `start`..`end` region.
///
/// Returns the lines before `start` and the lines after the matching `end`.
/// Without a `start` marker the whole document is `pre` and `post` is empty.
/// With a `start` but no `end` after it, `post` is empty and the unterminated
/// tail is treated as region content.
pub fn split<'a>(doc: &'a [String], start: &str, end: &str) -> (&'a [String], &'a [String]) {
    let Some(idx) = doc.iter().position(|l| l == start) else {
        return (doc, &[]);
    };
    let post = doc[idx + 1..]
        .iter()
        .position(|l| l == end)
        .map_or(&[][..], |offset| &doc[idx + 1 + offset + 1..]);
    (&doc[..idx], post)
}

/// Rebuild `doc` with `region` between the markers.
///
/// The markers are appended at the end when the document has none yet.
pub fn replace(doc: &[String], start: &str, end: &str, region: &[String]) -> Vec<String> {
    let (pre, post) = split(doc, start, end);
    let mut out = Vec::with_capacity(pre.len() + region.len() + post.len() + 2);
    out.extend_from_slice(pre);
    out.push(start.to_string());
    out.extend_from_slice(region);
    out.push(end.to_string());
    out.extend_from_slice(post);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const S: &str = "// start (x)";
    const E: &str = "// end (x)";
    const S2: &str = "// start (y)";
    const E2: &str = "// end (y)";

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_without_markers_keeps_everything_in_pre() {
        let doc = lines(&["a", "b"]);
        let (pre, post) = split(&doc, S, E);
        assert_eq!(pre, &doc[..]);
        assert!(post.is_empty());
    }

    #[test]
    fn split_around_region() {
        let doc = lines(&["a", S, "old", E, "b", "c"]);
        let (pre, post) = split(&doc, S, E);
        assert_eq!(pre, ["a"]);
        assert_eq!(post, ["b", "c"]);
    }

    #[test]
    fn split_with_missing_end_drops_tail() {
        let doc = lines(&["a", S, "dangling", "more"]);
        let (pre, post) = split(&doc, S, E);
        assert_eq!(pre, ["a"]);
        assert!(post.is_empty());
    }

    #[test]
    fn end_before_start_is_ignored() {
        let doc = lines(&[E, "a", S, "x", E, "b"]);
        let (pre, post) = split(&doc, S, E);
        assert_eq!(pre, [E, "a"]);
        assert_eq!(post, ["b"]);
    }

    #[test]
    fn only_first_region_is_managed() {
        let doc = lines(&[S, "one", E, "mid", S, "two", E]);
        let out = replace(&doc, S, E, &lines(&["new"]));
        assert_eq!(out, lines(&[S, "new", E, "mid", S, "two", E]));
    }

    #[test]
    fn replace_appends_region_when_absent() {
        let doc = lines(&["= Title", ""]);
        let out = replace(&doc, S, E, &lines(&["body"]));
        assert_eq!(out, lines(&["= Title", "", S, "body", E]));
    }

    #[test]
    fn replace_is_idempotent() {
        let doc = lines(&["intro", S, "stale", E, "outro"]);
        let region = lines(&["fresh", ""]);
        let once = replace(&doc, S, E, &region);
        let twice = replace(&once, S, E, &region);
        assert_eq!(once, twice);
    }

    fn line() -> impl Strategy<Value = String> {
        "[a-z =|*.]{0,12}"
    }

    proptest! {
        #[test]
        fn replace_twice_equals_once(
            doc in prop::collection::vec(line(), 0..20),
            region in prop::collection::vec(line(), 0..8),
        ) {
            let once = replace(&doc, S, E, &region);
            let twice = replace(&once, S, E, &region);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn surrounding_content_survives(
            before in prop::collection::vec(line(), 0..10),
            between in prop::collection::vec(line(), 0..10),
            after in prop::collection::vec(line(), 0..10),
            r1 in prop::collection::vec(line(), 0..5),
            r2 in prop::collection::vec(line(), 0..5),
        ) {
            let mut doc = before.clone();
            doc.push(S.to_string());
            doc.push("old".to_string());
            doc.push(E.to_string());
            doc.extend(between.iter().cloned());
            doc.push(S2.to_string());
            doc.push(E2.to_string());
            doc.extend(after.iter().cloned());

            let out = replace(&replace(&doc, S, E, &r1), S2, E2, &r2);

            let mut expected = before;
            expected.push(S.to_string());
            expected.extend(r1);
            expected.push(E.to_string());
            expected.extend(between);
            expected.push(S2.to_string());
            expected.extend(r2);
            expected.push(E2.to_string());
            expected.extend(after);
            prop_assert_eq!(out, expected);
        }
    }
}
