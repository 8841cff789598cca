//! Resource path construction for blog endpoints.

/// Host suffix appended to short blog names
pub const DEFAULT_BLOG_DOMAIN: &str = "tumblr.com";

/// Expand a blog identifier into a fully qualified host.
///
/// Identifiers containing a `.` are taken verbatim; anything else is treated
/// as a bare subdomain of `tumblr.com`. No validation is performed, so empty
/// or slash-containing identifiers pass through unchanged.
pub fn full_blog_name(blog_name: &str) -> String {
    if blog_name.contains('.') {
        blog_name.to_string()
    } else {
        format!("{}.{}", blog_name, DEFAULT_BLOG_DOMAIN)
    }
}

/// Build the `v2/blog/<host>/<suffix>` path for a blog operation
pub fn blog_path(blog_name: &str, suffix: &str) -> String {
    format!("v2/blog/{}/{}", full_blog_name(blog_name), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_is_expanded() {
        assert_eq!(blog_path("b", "info"), "v2/blog/b.tumblr.com/info");
        assert_eq!(full_blog_name("staff"), "staff.tumblr.com");
    }

    #[test]
    fn test_qualified_name_is_kept() {
        assert_eq!(
            blog_path("seejohnrun.tumblr.com", "posts/queue"),
            "v2/blog/seejohnrun.tumblr.com/posts/queue"
        );
        assert_eq!(blog_path("example.org", "info"), "v2/blog/example.org/info");
    }

    #[test]
    fn test_suffix_is_not_revalidated() {
        assert_eq!(
            blog_path("b", "posts/queue/reorder?x"),
            "v2/blog/b.tumblr.com/posts/queue/reorder?x"
        );
    }

    #[test]
    fn test_unvalidated_identifiers_pass_through() {
        assert_eq!(blog_path("", "info"), "v2/blog/.tumblr.com/info");
        assert_eq!(blog_path("a/b", "info"), "v2/blog/a/b.tumblr.com/info");
    }
}
