//! URL helpers.

/// Join a base URL and a path segment without doubling slashes.
///
/// The base is used as the full API prefix as-is; no provider-default path
/// segments are appended on its behalf.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_doubling_slashes() {
        assert_eq!(
            join_url("https://gw.example/", "/models/x:generateContent"),
            "https://gw.example/models/x:generateContent"
        );
        assert_eq!(join_url("https://gw.example", "v1/chat"), "https://gw.example/v1/chat");
    }
}
