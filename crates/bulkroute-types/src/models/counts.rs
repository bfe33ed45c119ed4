use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Number of aliases per domain, as reported by the route count endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteCounts {
    counts: BTreeMap<String, u64>,
}

impl RouteCounts {
    pub fn get(&self, domain: &str) -> Option<u64> {
        self.counts.get(domain).copied()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(domain, count)| (domain.as_str(), *count))
    }
}

impl FromIterator<(String, u64)> for RouteCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self { counts: iter.into_iter().collect() }
    }
}

// The API sends counts as JSON strings; plain numbers are accepted as well.
impl<'de> Deserialize<'de> for RouteCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Count {
            Number(u64),
            Text(String),
        }

        let raw = BTreeMap::<String, Count>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(domain, count)| -> Result<(String, u64), D::Error> {
                let count = match count {
                    Count::Number(n) => n,
                    Count::Text(text) => text.trim().parse().map_err(|_| {
                        <D::Error as serde::de::Error>::custom(format!(
                            "count for {domain} is not a number: {text:?}"
                        ))
                    })?,
                };
                Ok((domain, count))
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_from_strings() {
        let counts: RouteCounts =
            serde_json::from_str(r#"{"example.org": "12", "example.net": "3"}"#).unwrap();

        assert_eq!(counts.get("example.org"), Some(12));
        assert_eq!(counts.get("example.net"), Some(3));
        assert_eq!(counts.total(), 15);
    }

    #[test]
    fn test_counts_from_numbers() {
        let counts: RouteCounts = serde_json::from_str(r#"{"example.org": 7}"#).unwrap();
        assert_eq!(counts.get("example.org"), Some(7));
    }

    #[test]
    fn test_counts_rejects_garbage() {
        let err = serde_json::from_str::<RouteCounts>(r#"{"example.org": "lots"}"#).unwrap_err();
        assert!(err.to_string().contains("example.org"));
    }
}
