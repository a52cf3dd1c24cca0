#[doc(hidden)]
pub mod test_support;

// Bounds a response body before it is embedded in a user-visible error.
pub(crate) fn snippet(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::snippet;

    #[test]
    fn snippet_returns_short_bodies_whole() {
        assert_eq!(snippet("not json", 100), "not json");
        assert_eq!(snippet("", 100), "");
    }

    #[test]
    fn snippet_bounds_long_bodies() {
        let body = "x".repeat(150);
        assert_eq!(snippet(&body, 100).len(), 100);
    }

    #[test]
    fn snippet_cuts_on_char_boundaries() {
        let body = "héllo wörld";
        assert_eq!(snippet(body, 4), "héll");
    }
}
