//! URL state persistence for mock pages
//!
//! Control values travel as base64-encoded JSON in the `state` query
//! parameter, keeping URLs opaque and free of parameter-name clashes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a `state` query value into key-value pairs.
///
/// Anything malformed decodes to no pairs, so the page falls back to defaults.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let json_bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Ignoring undecodable mock state: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_slice::<BTreeMap<String, String>>(&json_bytes) {
        Ok(map) => map.into_iter().collect(),
        Err(e) => {
            tracing::debug!("Ignoring malformed mock state: {e}");
            Vec::new()
        }
    }
}

/// Encode key-value pairs into a `state` query value.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    // A map of strings always serializes
    let json = serde_json::to_string(&map).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects the values that differ from their defaults
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// `None` when every value is at its default, keeping the URL clean
    pub fn build(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_survives_the_url() {
        let mut builder = StateBuilder::new();
        builder.set_string("size", "sm", "md");
        builder.set_bool("show_close_button", false, true);
        let encoded = builder.build().unwrap();

        assert!(!encoded.contains('='));
        let mut pairs = parse_state(&encoded);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("show_close_button".to_string(), "0".to_string()),
                ("size".to_string(), "sm".to_string()),
            ]
        );
    }

    #[test]
    fn test_defaults_are_omitted() {
        let mut builder = StateBuilder::new();
        builder.set_string("size", "md", "md");
        builder.set_bool("stacked", false, false);
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn test_garbage_decodes_to_nothing() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("!!not base64!!").is_empty());
        let not_a_map = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        assert!(parse_state(&not_a_map).is_empty());
    }
}
