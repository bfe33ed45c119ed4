use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Forwarding target for a single alias.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Route {
    /// Target forwarding address (e.g., "someone@example.net")
    pub fwd: String,
}

impl Route {
    pub fn new(fwd: impl Into<String>) -> Self {
        Self { fwd: fwd.into() }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fwd)
    }
}

/// Snapshot of routing state: alias -> route.
///
/// Only present routes are held. Aliases are opaque keys and are compared
/// byte for byte; nothing in here lowercases or trims them. Iteration is
/// sorted by alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingSet {
    routes: BTreeMap<String, Route>,
}

impl RoutingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a wire map where a route may be `null`.
    ///
    /// Null entries are not routes; they are left out of the set and their
    /// aliases are returned so the caller can report them.
    pub fn from_nullable(map: BTreeMap<String, Option<Route>>) -> (Self, Vec<String>) {
        let mut dropped = Vec::new();
        let mut routes = BTreeMap::new();
        for (alias, route) in map {
            match route {
                Some(route) => {
                    routes.insert(alias, route);
                }
                None => dropped.push(alias),
            }
        }
        (Self { routes }, dropped)
    }

    pub fn insert(&mut self, alias: impl Into<String>, route: Route) -> Option<Route> {
        self.routes.insert(alias.into(), route)
    }

    pub fn remove(&mut self, alias: &str) -> Option<Route> {
        self.routes.remove(alias)
    }

    pub fn get(&self, alias: &str) -> Option<&Route> {
        self.routes.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.routes.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Route)> {
        self.routes.iter()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Keeps the aliases whose domain (the part after the last `@`) is exactly
    /// `domain`. Aliases without an `@` never match.
    pub fn filter_to_domain(&self, domain: &str) -> RoutingSet {
        self.routes
            .iter()
            .filter(|(alias, _)| {
                alias.rsplit_once('@').is_some_and(|(_, alias_domain)| alias_domain == domain)
            })
            .map(|(alias, route)| (alias.clone(), route.clone()))
            .collect()
    }
}

impl FromIterator<(String, Route)> for RoutingSet {
    fn from_iter<I: IntoIterator<Item = (String, Route)>>(iter: I) -> Self {
        Self { routes: iter.into_iter().collect() }
    }
}

impl IntoIterator for RoutingSet {
    type Item = (String, Route);
    type IntoIter = std::collections::btree_map::IntoIter<String, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RoutingSet {
    type Item = (&'a String, &'a Route);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, &str)]) -> RoutingSet {
        entries.iter().map(|(a, f)| (a.to_string(), Route::new(*f))).collect()
    }

    #[test]
    fn test_filter_to_domain_empty() {
        let got = RoutingSet::new().filter_to_domain("n/a");
        assert!(got.is_empty());
    }

    #[test]
    fn test_filter_to_domain_single_domain() {
        let have = set(&[("a@example.org", "x@x.com"), ("b@example.org", "y@y.com")]);

        let got = have.filter_to_domain("example.org");

        assert_eq!(got, have);
    }

    #[test]
    fn test_filter_to_domain_multiple_domains() {
        let have = set(&[("a@example.org", "x@x.com"), ("b@notexample.org", "y@y.com")]);

        let got = have.filter_to_domain("example.org");

        assert_eq!(got, set(&[("a@example.org", "x@x.com")]));
    }

    #[test]
    fn test_filter_to_domain_skips_aliases_without_domain() {
        let have = set(&[("postmaster", "x@x.com"), ("a@example.org", "y@y.com")]);

        let got = have.filter_to_domain("example.org");

        assert_eq!(got.len(), 1);
        assert!(!got.contains("postmaster"));
    }

    #[test]
    fn test_filter_to_domain_is_exact_match() {
        let have = set(&[("a@sub.example.org", "x@x.com"), ("b@EXAMPLE.org", "y@y.com")]);

        assert!(have.filter_to_domain("example.org").is_empty());
    }

    #[test]
    fn test_from_nullable_drops_null_routes() {
        let wire: BTreeMap<String, Option<Route>> =
            serde_json::from_str(r#"{"a@x.org": {"fwd": "a@a.com"}, "b@x.org": null}"#).unwrap();

        let (routes, dropped) = RoutingSet::from_nullable(wire);

        assert_eq!(routes, set(&[("a@x.org", "a@a.com")]));
        assert_eq!(dropped, vec!["b@x.org".to_string()]);
    }

    #[test]
    fn test_routing_set_wire_format() {
        let routes = set(&[("a@x.org", "a@a.com")]);

        let json = serde_json::to_string(&routes).unwrap();

        assert_eq!(json, r#"{"a@x.org":{"fwd":"a@a.com"}}"#);
    }

    #[test]
    fn test_aliases_are_not_normalized() {
        let mut routes = RoutingSet::new();
        routes.insert("A@x.org", Route::new("a@a.com"));

        assert!(routes.contains("A@x.org"));
        assert!(!routes.contains("a@x.org"));
    }
}
