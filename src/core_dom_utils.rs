pub(crate) fn class_tokens(class_attr: Option<&str>) -> Vec<String> {
    class_attr
        .map(|value| {
            value
                .split_whitespace()
                .filter(|token| !token.is_empty())
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
}

pub(crate) fn join_class_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Parses an inline `style` attribute into ordered `(property, value)` pairs.
/// Property names are lowercased; later duplicates replace earlier ones.
pub(crate) fn parse_style_declarations(style_attr: Option<&str>) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    let Some(style_attr) = style_attr else {
        return out;
    };

    for declaration in style_attr.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if let Some(existing) = out.iter_mut().find(|(existing, _)| *existing == name) {
            existing.1 = value;
        } else {
            out.push((name, value));
        }
    }
    out
}

pub(crate) fn serialize_style_declarations(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut it = value.chars();
    let mut out = String::new();
    for _ in 0..max_chars {
        let Some(ch) = it.next() else {
            return out;
        };
        out.push(ch);
    }
    if it.next().is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_declarations_keep_order_and_replace_duplicates() {
        let parsed = parse_style_declarations(Some("color: red; DISPLAY:none;;display: block"));
        assert_eq!(
            parsed,
            vec![
                ("color".to_string(), "red".to_string()),
                ("display".to_string(), "block".to_string()),
            ]
        );
        assert_eq!(
            serialize_style_declarations(&parsed),
            "color: red; display: block;"
        );
    }

    #[test]
    fn class_tokens_ignore_extra_whitespace() {
        assert_eq!(
            class_tokens(Some("  panel   hidden ")),
            vec!["panel".to_string(), "hidden".to_string()]
        );
        assert!(class_tokens(None).is_empty());
    }

    #[test]
    fn truncate_chars_marks_cut_output() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }
}
