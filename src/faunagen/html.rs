//! Minimal HTML element wrapping. No escaping: content, class and id are
//! caller-trusted (the page is generated from data we fetched ourselves).

/// Wrap `content` in `tag`, with optional id and class attributes.
/// The id attribute comes before class when both are present; empty
/// attributes are omitted entirely.
pub fn wrap_tag(content: &str, tag: &str, class: Option<&str>, id: Option<&str>) -> String {
    let mut attrs = String::new();
    if let Some(id) = id.filter(|s| !s.is_empty()) {
        attrs.push_str(&format!(" id=\"{}\"", id));
    }
    if let Some(class) = class.filter(|s| !s.is_empty()) {
        attrs.push_str(&format!(" class=\"{}\"", class));
    }
    format!("<{tag}{attrs}>{content}</{tag}>")
}
