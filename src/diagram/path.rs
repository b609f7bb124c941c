//! Slash-separated path helpers for diagram entries

/// Append `name` to `parent` with a single `/` between them.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else if parent.ends_with('/') {
        format!("{}{}", parent, name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Lexically normalize a relative path.
///
/// Empty and `.` segments are dropped and `..` cancels the preceding segment.
/// A `..` with nothing left to cancel is kept, so the result can still point
/// above its starting point. An empty result becomes `.`.
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a", "b"), "a/b");
        assert_eq!(join("a/", "b"), "a/b");
        assert_eq!(join("a", ""), "a/");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a/b"), "a/b");
        assert_eq!(normalize("a//b/"), "a/b");
        assert_eq!(normalize("./a/./b"), "a/b");
        assert_eq!(normalize("a/../b"), "b");
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("a/.."), ".");
    }

    #[test]
    fn test_normalize_keeps_unresolvable_parent_segments() {
        assert_eq!(normalize(".."), "..");
        assert_eq!(normalize("../../x"), "../../x");
        assert_eq!(normalize("a/../../x"), "../x");
        assert_eq!(normalize("/../x"), "/x");
    }
}
