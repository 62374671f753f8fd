use url::form_urlencoded::byte_serialize;

/// Hand-built query string for list endpoints.
///
/// Only present values are included. Following the UI's truthiness rule, an id
/// of `0` and an empty string count as absent. Keys and values are
/// percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

fn encode_component(raw: &str) -> String {
    // form encoding writes spaces as '+', a literal '+' is already %2B
    byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_id(mut self, key: &str, value: Option<i64>) -> Self {
        if let Some(id) = value.filter(|id| *id != 0) {
            self.pairs.push((key.to_string(), id.to_string()));
        }
        self
    }

    pub fn push_str(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(text) = value.filter(|text| !text.is_empty()) {
            self.pairs.push((key.to_string(), text.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `""` when empty, otherwise `?k=v&k2=v2`.
    pub fn to_suffix(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("?{joined}")
    }

    pub fn append_to(&self, path: &str) -> String {
        format!("{path}{}", self.to_suffix())
    }
}
