use crate::models::{Section, SectionData, Sections};
use crate::store::parser::KEY_VALUE_SEPARATOR;
use std::fmt::Write;

/// Render the whole model as file text.
///
/// The header comment comes first, then the default section's pairs without
/// a header line, then every named section under its `[name]` line in
/// insertion order. Each block is preceded by a blank line, which the parser
/// skips on the way back.
///
/// Empty named sections are written only when a non-empty one follows them:
/// a file ending in an empty section does not load.
pub fn render(header: &str, sections: &Sections) -> String {
    let mut text = String::new();
    text.push_str(header);
    text.push('\n');

    if let Some(data) = sections.get(&Section::Default) {
        text.push('\n');
        push_pairs(&mut text, data);
    }

    let named: Vec<(&str, &SectionData)> = sections
        .iter()
        .filter_map(|(section, data)| match section {
            Section::Named(name) => Some((name.as_str(), data)),
            Section::Default => None,
        })
        .collect();
    let end = named
        .iter()
        .rposition(|(_, data)| !data.is_empty())
        .map_or(0, |last| last + 1);

    for (name, data) in &named[..end] {
        let _ = write!(text, "\n[{}]\n", name);
        push_pairs(&mut text, data);
    }

    text
}

fn push_pairs(text: &mut String, data: &SectionData) {
    for (key, value) in data {
        let _ = writeln!(text, "{}{}{}", key, KEY_VALUE_SEPARATOR, value);
    }
}
