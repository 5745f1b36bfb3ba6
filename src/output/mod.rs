mod text;

use serde::Serialize;

pub use text::TextRender;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json", "yaml"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".yml") || lower.ends_with(".yaml") {
        return Some(OutputFormat::Yaml);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

pub fn render_text<T: TextRender>(items: &[T]) -> Vec<u8> {
    let mut out = String::new();
    for item in items {
        out.push_str(&item.render_text());
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = serde_json::to_vec_pretty(value).unwrap_or_else(|_| b"null".to_vec());
    out.push(b'\n');
    out
}

pub fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Vec<u8> {
    serde_yaml::to_string(value)
        .unwrap_or_else(|_| "~\n".to_string())
        .into_bytes()
}

/// Renders a result collection; JSON and YAML emit a sequence even when empty.
pub fn render_list<T: Serialize + TextRender>(items: &[T], format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(items),
        OutputFormat::Json => render_json(items),
        OutputFormat::Yaml => render_yaml(items),
    }
}

pub fn render_one<T: Serialize + TextRender>(item: &T, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(std::slice::from_ref(item)),
        OutputFormat::Json => render_json(item),
        OutputFormat::Yaml => render_yaml(item),
    }
}
