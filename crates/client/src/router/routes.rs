//! Route table and path matching.
//!
//! Records nest: a child's path is relative to its parent's. Segments
//! starting with `:` capture a parameter; everything else matches literally,
//! ignoring ASCII case. The first record (in table order) whose chain
//! consumes the whole path wins.

use std::collections::BTreeMap;

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    path: String,
    requires_auth: bool,
    children: Vec<RouteRecord>,
}

impl RouteRecord {
    /// A public route.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            requires_auth: false,
            children: Vec::new(),
        }
    }

    /// Mark this route, and everything nested under it, as login-only.
    #[must_use]
    pub const fn guarded(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Nest `child` under this route.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Path pattern, relative to the parent record.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this record itself declares a login requirement.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Nested records.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    fn resolve<'a>(&'a self, segments: &[&str]) -> Option<(Vec<&'a Self>, Vec<(String, String)>)> {
        let pattern = split_segments(&self.path);
        if segments.len() < pattern.len() {
            return None;
        }
        let (head, rest) = segments.split_at(pattern.len());

        let mut params = Vec::new();
        for (expected, actual) in pattern.iter().zip(head) {
            if let Some(name) = expected.strip_prefix(':') {
                let value = urlencoding::decode(actual)
                    .map_or_else(|_| (*actual).to_owned(), |v| v.into_owned());
                params.push((name.to_owned(), value));
            } else if !expected.eq_ignore_ascii_case(actual) {
                return None;
            }
        }

        let (mut chain, nested) = if rest.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            self.children.iter().find_map(|child| child.resolve(rest))?
        };
        chain.insert(0, self);
        params.extend(nested);
        Some((chain, params))
    }
}

/// A matched route: the record chain from outermost to innermost, and the
/// captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub chain: Vec<&'a RouteRecord>,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch<'_> {
    /// Captured parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered set of top-level routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteRecord>,
}

impl RouteTable {
    /// Table over `routes`, matched in order.
    #[must_use]
    pub const fn new(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    /// The marketplace's own pages.
    #[must_use]
    pub fn application() -> Self {
        Self::new(vec![
            RouteRecord::new("/"),
            RouteRecord::new("/product-detail/:id"),
            RouteRecord::new("/orders").guarded(),
            RouteRecord::new("/orderDetails").guarded(),
            RouteRecord::new("/usedBook/orders").guarded(),
            RouteRecord::new("/profile").guarded(),
        ])
    }

    /// Top-level records.
    #[must_use]
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Match a full path (query and fragment are ignored).
    #[must_use]
    pub fn resolve(&self, full_path: &str) -> Option<RouteMatch<'_>> {
        let segments = split_segments(path_part(full_path));
        self.routes
            .iter()
            .find_map(|route| route.resolve(&segments))
            .map(|(chain, params)| RouteMatch {
                chain,
                params: params.into_iter().collect(),
            })
    }
}

/// The path of a full path, without query or fragment.
pub(crate) fn path_part(full_path: &str) -> &str {
    full_path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_root() {
        let table = RouteTable::application();
        let matched = table.resolve("/").unwrap();
        assert_eq!(matched.chain[0].path(), "/");
        assert!(table.resolve("/nowhere").is_none());
    }

    #[test]
    fn test_param_capture_is_decoded() {
        let table = RouteTable::application();
        let matched = table.resolve("/product-detail/a%20b?tab=reviews").unwrap();
        assert_eq!(matched.param("id"), Some("a b"));
        assert!(!matched.chain[0].requires_auth());
    }

    #[test]
    fn test_literal_segments_ignore_case_and_slashes() {
        let table = RouteTable::application();
        let matched = table.resolve("//USEDBOOK/orders/#top").unwrap();
        assert_eq!(matched.chain[0].path(), "/usedBook/orders");
    }

    #[test]
    fn test_nested_chain() {
        let table = RouteTable::new(vec![
            RouteRecord::new("/account")
                .guarded()
                .child(RouteRecord::new("settings"))
                .child(RouteRecord::new("address/:id")),
        ]);

        let matched = table.resolve("/account/address/7").unwrap();
        let paths: Vec<_> = matched.chain.iter().map(|r| r.path()).collect();
        assert_eq!(paths, ["/account", "address/:id"]);
        assert_eq!(matched.param("id"), Some("7"));

        assert!(table.resolve("/account/unknown").is_none());
    }

    #[test]
    fn test_path_part() {
        assert_eq!(path_part("/orders?status=PAID#x"), "/orders");
        assert_eq!(path_part("/orders#x?y"), "/orders");
        assert_eq!(path_part(""), "");
    }
}
