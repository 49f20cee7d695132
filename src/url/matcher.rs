/// Path-based predicate deciding whether a candidate URL belongs to the
/// archive being scraped
///
/// A path matches when it starts with at least one configured prefix and
/// contains none of the configured exclude substrings. The sermon archive,
/// for example, accepts `/sermons/...` but excludes anything containing
/// `/archive` (the listing surface itself).
#[derive(Debug, Clone)]
pub struct LinkMatcher {
    prefixes: Vec<String>,
    excludes: Vec<String>,
}

impl LinkMatcher {
    pub fn new(prefixes: Vec<String>, excludes: Vec<String>) -> Self {
        Self { prefixes, excludes }
    }

    /// Tests a URL path against the prefix and exclude rules
    pub fn matches(&self, path: &str) -> bool {
        if !self.prefixes.iter().any(|p| path.starts_with(p.as_str())) {
            return false;
        }
        !self.excludes.iter().any(|x| path.contains(x.as_str()))
    }
}
