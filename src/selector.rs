use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorAttrCondition {
    Exists { key: String },
    Eq { key: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectorStep {
    pub(crate) tag: Option<String>,
    pub(crate) universal: bool,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<SelectorAttrCondition>,
}

impl SelectorStep {
    pub(crate) fn id_only(&self) -> Option<&str> {
        if !self.universal && self.tag.is_none() && self.classes.is_empty() && self.attrs.is_empty()
        {
            self.id.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorCombinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorPart {
    pub(crate) step: SelectorStep,
    // Relation to previous (left) selector part.
    pub(crate) combinator: Option<SelectorCombinator>,
}

pub(crate) fn parse_selector_groups(selector: &str) -> Result<Vec<Vec<SelectorPart>>> {
    let groups = split_selector_groups(selector)?;
    groups
        .iter()
        .map(|group| parse_selector_chain(group).map_err(|_| unsupported(selector)))
        .collect()
}

pub(crate) fn parse_selector_chain(selector: &str) -> Result<Vec<SelectorPart>> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(unsupported(selector));
    }

    let tokens = tokenize_selector(selector)?;
    let mut parts: Vec<SelectorPart> = Vec::new();
    let mut pending_combinator: Option<SelectorCombinator> = None;

    for token in tokens {
        if token == ">" {
            if pending_combinator.is_some() || parts.is_empty() {
                return Err(unsupported(selector));
            }
            pending_combinator = Some(SelectorCombinator::Child);
            continue;
        }

        let step = parse_selector_step(&token).map_err(|_| unsupported(selector))?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending_combinator.take().unwrap_or(SelectorCombinator::Descendant))
        };
        parts.push(SelectorPart { step, combinator });
    }

    if pending_combinator.is_some() || parts.is_empty() {
        return Err(unsupported(selector));
    }
    Ok(parts)
}

fn unsupported(selector: &str) -> Error {
    Error::UnsupportedSelector(selector.to_string())
}

fn split_selector_groups(selector: &str) -> Result<Vec<String>> {
    let mut groups = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0usize;
    for ch in selector.chars() {
        match ch {
            '[' => {
                bracket_depth += 1;
                current.push(ch);
            }
            ']' => {
                bracket_depth = bracket_depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if bracket_depth == 0 => {
                if current.trim().is_empty() {
                    return Err(unsupported(selector));
                }
                groups.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if current.trim().is_empty() {
        return Err(unsupported(selector));
    }
    groups.push(current);
    Ok(groups)
}

/// Splits a chain into compound tokens and `>` combinators. Whitespace
/// outside brackets and quotes separates descendant steps.
fn tokenize_selector(selector: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' if bracket_depth > 0 => {
                quote = Some(ch);
                current.push(ch);
            }
            '[' => {
                bracket_depth += 1;
                current.push(ch);
            }
            ']' => {
                if bracket_depth == 0 {
                    return Err(unsupported(selector));
                }
                bracket_depth -= 1;
                current.push(ch);
            }
            '>' if bracket_depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(">".to_string());
            }
            ch if ch.is_whitespace() && bracket_depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if bracket_depth != 0 || quote.is_some() {
        return Err(unsupported(selector));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_selector_step(token: &str) -> Result<SelectorStep> {
    let chars = token.chars().collect::<Vec<_>>();
    let mut step = SelectorStep::default();
    let mut i = 0usize;

    if chars.first() == Some(&'*') {
        step.universal = true;
        i = 1;
    } else if chars.first().is_some_and(|ch| ch.is_ascii_alphabetic()) {
        let (name, next) = read_ident(&chars, 0);
        step.tag = Some(name.to_ascii_lowercase());
        i = next;
    }

    while i < chars.len() {
        match chars[i] {
            '#' => {
                let (name, next) = read_ident(&chars, i + 1);
                if name.is_empty() || step.id.is_some() {
                    return Err(unsupported(token));
                }
                step.id = Some(name);
                i = next;
            }
            '.' => {
                let (name, next) = read_ident(&chars, i + 1);
                if name.is_empty() {
                    return Err(unsupported(token));
                }
                step.classes.push(name);
                i = next;
            }
            '[' => {
                let end = chars[i..]
                    .iter()
                    .position(|ch| *ch == ']')
                    .map(|pos| i + pos)
                    .ok_or_else(|| unsupported(token))?;
                let body = chars[i + 1..end].iter().collect::<String>();
                step.attrs.push(parse_attr_condition(&body)?);
                i = end + 1;
            }
            _ => return Err(unsupported(token)),
        }
    }

    if !step.universal
        && step.tag.is_none()
        && step.id.is_none()
        && step.classes.is_empty()
        && step.attrs.is_empty()
    {
        return Err(unsupported(token));
    }
    Ok(step)
}

fn parse_attr_condition(body: &str) -> Result<SelectorAttrCondition> {
    let body = body.trim();
    let Some((key, value)) = body.split_once('=') else {
        if body.is_empty() || !body.chars().all(is_ident_char) {
            return Err(unsupported(body));
        }
        return Ok(SelectorAttrCondition::Exists {
            key: body.to_ascii_lowercase(),
        });
    };

    let key = key.trim();
    if key.is_empty() || !key.chars().all(is_ident_char) {
        return Err(unsupported(body));
    }
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    Ok(SelectorAttrCondition::Eq {
        key: key.to_ascii_lowercase(),
        value: value.to_string(),
    })
}

fn read_ident(chars: &[char], start: usize) -> (String, usize) {
    let mut i = start;
    let mut out = String::new();
    while i < chars.len() && is_ident_char(chars[i]) {
        out.push(chars[i]);
        i += 1;
    }
    (out, i)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

impl Dom {
    pub(crate) fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        let groups = parse_selector_groups(selector)?;
        if let [chain] = groups.as_slice() {
            if let [part] = chain.as_slice() {
                if let Some(id) = part.step.id_only() {
                    return Ok(self.by_id(id));
                }
            }
        }
        Ok(self
            .all_elements()
            .into_iter()
            .find(|node| groups.iter().any(|chain| self.matches_chain(*node, chain))))
    }

    pub(crate) fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let groups = parse_selector_groups(selector)?;
        Ok(self
            .all_elements()
            .into_iter()
            .filter(|node| groups.iter().any(|chain| self.matches_chain(*node, chain)))
            .collect())
    }

    fn matches_chain(&self, node_id: NodeId, chain: &[SelectorPart]) -> bool {
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        if !self.matches_step(node_id, &last.step) {
            return false;
        }
        if rest.is_empty() {
            return true;
        }

        match last.combinator {
            Some(SelectorCombinator::Child) => self
                .parent(node_id)
                .is_some_and(|parent| self.matches_chain(parent, rest)),
            Some(SelectorCombinator::Descendant) | None => {
                let mut cursor = self.parent(node_id);
                while let Some(ancestor) = cursor {
                    if self.matches_chain(ancestor, rest) {
                        return true;
                    }
                    cursor = self.parent(ancestor);
                }
                false
            }
        }
    }

    fn matches_step(&self, node_id: NodeId, step: &SelectorStep) -> bool {
        let Some(element) = self.element(node_id) else {
            return false;
        };

        if let Some(tag) = &step.tag {
            if !element.tag_name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(id) = &step.id {
            if element.attrs.get("id") != Some(id) {
                return false;
            }
        }

        let classes = core_dom_utils::class_tokens(element.attrs.get("class").map(String::as_str));
        if !step
            .classes
            .iter()
            .all(|class| classes.iter().any(|token| token == class))
        {
            return false;
        }

        step.attrs.iter().all(|cond| match cond {
            SelectorAttrCondition::Exists { key } => element.attrs.contains_key(key),
            SelectorAttrCondition::Eq { key, value } => element.attrs.get(key) == Some(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_step_with_tag_id_classes_and_attrs() -> Result<()> {
        let chain = parse_selector_chain("button#details-btn.btn.small[type='button']")?;
        assert_eq!(chain.len(), 1);
        let step = &chain[0].step;
        assert_eq!(step.tag.as_deref(), Some("button"));
        assert_eq!(step.id.as_deref(), Some("details-btn"));
        assert_eq!(step.classes, vec!["btn".to_string(), "small".to_string()]);
        assert_eq!(
            step.attrs,
            vec![SelectorAttrCondition::Eq {
                key: "type".into(),
                value: "button".into(),
            }]
        );
        Ok(())
    }

    #[test]
    fn parses_descendant_and_child_combinators() -> Result<()> {
        let chain = parse_selector_chain("footer > p .year")?;
        let combinators = chain.iter().map(|part| part.combinator).collect::<Vec<_>>();
        assert_eq!(
            combinators,
            vec![
                None,
                Some(SelectorCombinator::Child),
                Some(SelectorCombinator::Descendant),
            ]
        );
        Ok(())
    }

    #[test]
    fn rejects_pseudo_classes_and_dangling_combinators() {
        for selector in ["a:hover", "> p", "p >", "", "#", "div,", "[unclosed"] {
            assert!(
                matches!(
                    parse_selector_groups(selector),
                    Err(Error::UnsupportedSelector(_))
                ),
                "{selector} should be rejected"
            );
        }
    }
}
