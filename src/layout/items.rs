//! Slide payload types: bullet items and workflow steps.
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// One entry of a content slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// A single bullet line
    Plain(String),
    /// A bold bulleted heading, optionally followed by an indented description
    Detailed {
        title: String,
        description: Option<String>,
    },
}

impl ContentItem {
    pub fn plain(text: impl Into<String>) -> Self {
        ContentItem::Plain(text.into())
    }

    pub fn detailed(title: impl Into<String>, description: impl Into<String>) -> Self {
        ContentItem::Detailed {
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// A detailed item without a description line.
    pub fn heading(title: impl Into<String>) -> Self {
        ContentItem::Detailed {
            title: title.into(),
            description: None,
        }
    }

    /// Number of paragraphs this item renders as.
    pub fn paragraph_count(&self) -> usize {
        match self {
            ContentItem::Plain(_) => 1,
            ContentItem::Detailed { description, .. } => 1 + usize::from(description.is_some()),
        }
    }
}

impl From<&str> for ContentItem {
    fn from(text: &str) -> Self {
        ContentItem::Plain(text.to_string())
    }
}

impl From<String> for ContentItem {
    fn from(text: String) -> Self {
        ContentItem::Plain(text)
    }
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ContentItemVisitor)
    }
}

struct ContentItemVisitor;

impl<'de> Visitor<'de> for ContentItemVisitor {
    type Value = ContentItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar or a map with 'title' and optional 'desc'")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ContentItem::Plain(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ContentItem::Plain(v))
    }

    // Bare YAML scalars such as `- 2024` or `- true` are bullets too
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ContentItem::Plain(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ContentItem::Plain(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ContentItem::Plain(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ContentItem::Plain(v.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut title: Option<String> = None;
        let mut description: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "title" => {
                    if title.is_some() {
                        return Err(de::Error::duplicate_field("title"));
                    }
                    title = Some(map.next_value()?);
                },
                "desc" | "description" => {
                    if description.is_some() {
                        return Err(de::Error::duplicate_field("desc"));
                    }
                    description = Some(map.next_value()?);
                },
                other => {
                    return Err(de::Error::unknown_field(other, &["title", "desc", "description"]));
                },
            }
        }

        let title = title.ok_or_else(|| de::Error::missing_field("title"))?;
        Ok(ContentItem::Detailed { title, description })
    }
}

/// One card of a workflow slide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowStep {
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
}

impl WorkflowStep {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
