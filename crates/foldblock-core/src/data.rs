//! Persisted block data and static tool metadata.

use serde::de::IgnoredAny;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The persisted unit of a fold block.
///
/// Both fields are always strings. Anything missing, null, or of the wrong
/// type decodes to an empty string rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
}

impl BlockData {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Accept any value, keeping it only if it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(text) => text,
        Loose::Other(_) => String::new(),
    })
}

/// Toolbox entry shown by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolboxMeta {
    pub icon: &'static str,
    pub title: &'static str,
}

const TOOLBOX_ICON: &str = concat!(
    r#"<svg width="19" viewBox="0 0 1024 1024" xmlns="http://www.w3.org/2000/svg">"#,
    r#"<path d="M512 576l192 192H576v192H448v-192H320l192-192z m192-384H576V0H448v192H320l192 192 192-192z "#,
    r#"m256 128c0-35.2-28.8-64-64-64h-160l-64 64h192l-128 128h-448l-128-128h192l-64-64H128c-35.2 0-64 28.8-64 64"#,
    r#"l160 160L64 640c0 35.2 28.8 64 64 64h160l64-64h-192l128-128h448l128 128h-192l64 64H896c35.2 0 64-28.8 64-64"#,
    r#"l-160-160L960 320z"></path></svg>"#,
);

impl ToolboxMeta {
    pub const FOLD_BLOCK: ToolboxMeta = ToolboxMeta {
        icon: TOOLBOX_ICON,
        title: "Folding block",
    };
}

/// Tags the host sanitizer keeps in a block body.
///
/// Serializes to the host's rule format, `{"content": {"br": true, "div": true}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeRules {
    pub content: &'static [&'static str],
}

impl SanitizeRules {
    pub const FOLD_BLOCK: SanitizeRules = SanitizeRules {
        content: &["br", "div"],
    };
}

impl Serialize for SanitizeRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct TagSet<'a>(&'a [&'a str]);

        impl Serialize for TagSet<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for tag in self.0 {
                    map.serialize_entry(tag, &true)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("content", &TagSet(self.content))?;
        map.end()
    }
}

/// Block bodies do not accept raw line breaks from the Enter key.
pub const ENABLE_LINE_BREAKS: bool = false;
