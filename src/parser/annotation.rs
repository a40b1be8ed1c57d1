use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity levels understood by the Code Insights annotations endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    /// Only reachable through custom report JSON.
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

/// One line-level finding attached to a repository file.
///
/// Fields are private so an annotation cannot change after it has been
/// extracted; equality compares all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Annotation {
    path: String,

    /// Serialized as a JSON string, which is what the server expects.
    #[serde(with = "line_string")]
    #[schemars(with = "String")]
    line: u32,

    message: String,

    severity: Severity,
}

impl Annotation {
    pub fn new(
        path: impl Into<String>,
        line: u32,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            message: message.into(),
            severity,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Annotations in discovery order, wrapped under the `annotations` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct AnnotationSet {
    pub annotations: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self { annotations }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.annotations.iter()
    }
}

impl FromIterator<Annotation> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// `line` goes out as a string; on the way in either a string or a number is accepted.
mod line_string {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(line: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(line)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        struct LineVisitor;

        impl Visitor<'_> for LineVisitor {
            type Value = u32;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a line number as a string or an unsigned integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
                u32::try_from(v).map_err(|_| E::custom(format!("line number {} out of range", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
                u32::try_from(v).map_err(|_| E::custom(format!("line number {} out of range", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
                v.trim()
                    .parse()
                    .map_err(|_| E::custom(format!("invalid line number '{}'", v)))
            }
        }

        deserializer.deserialize_any(LineVisitor)
    }
}
