use serde::{Deserialize, Deserializer, Serialize};

/// Ordered, de-duplicated list of reason strings.
///
/// The dashboard historically sent this field as either a bare string or an
/// array; the serde boundary accepts both and normalizes to one container so
/// nothing downstream ever branches on shape. Blank entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reasons(Vec<String>);

impl Reasons {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        let reason = reason.trim();
        if reason.is_empty() || self.0.iter().any(|r| r == reason) {
            return;
        }
        self.0.push(reason.to_string());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl<S: Into<String>> FromIterator<S> for Reasons {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut reasons = Reasons::new();
        for reason in iter {
            reasons.push(reason);
        }
        reasons
    }
}

impl<'de> Deserialize<'de> for Reasons {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrList {
            One(String),
            Many(Vec<String>),
        }

        Ok(match StringOrList::deserialize(deserializer)? {
            StringOrList::One(s) => std::iter::once(s).collect(),
            StringOrList::Many(list) => list.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_string() {
        let reasons: Reasons = serde_json::from_str(r#""damaged in transit""#).unwrap();
        assert_eq!(reasons.as_slice(), ["damaged in transit"]);
    }

    #[test]
    fn accepts_array_and_deduplicates() {
        let reasons: Reasons =
            serde_json::from_str(r#"["damaged", "expired", "damaged", "  "]"#).unwrap();
        assert_eq!(reasons.as_slice(), ["damaged", "expired"]);
    }

    #[test]
    fn preserves_insertion_order() {
        let reasons: Reasons = ["b", "a", "c"].into_iter().collect();
        assert_eq!(reasons.as_slice(), ["b", "a", "c"]);
    }
}
