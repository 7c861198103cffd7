pub mod assemble;
pub mod fragments;
pub mod stubs;

use std::collections::BTreeMap;

use crate::types::answers::AnswerSet;
use crate::types::error::ScaffoldError;
use crate::types::names::DerivedNames;

/// Raw stub text for a logical template key. Failing with `TemplateMissing`
/// signals a packaging defect, so the whole run aborts instead of emitting a
/// partial file.
pub trait TemplateProvider {
    fn get(&self, key: &str) -> Result<&str, ScaffoldError>;
}

/// The fixed token set substituted into every rendered stub.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    values: BTreeMap<String, String>,
}

impl TokenMap {
    pub fn for_addon(answers: &AnswerSet, names: &DerivedNames) -> Self {
        let mut map = TokenMap::default();
        map.insert("ADDON_NAME", &answers.addon_name);
        map.insert("DESCRIPTION", &answers.description);
        map.insert("SLUG", &names.slug);
        map.insert("FUNCTION_SLUG", &names.function_slug);
        map.insert("FULL_SLUG", &names.full_slug);
        map.insert("NAMESPACE", &names.namespace);
        map.insert("CONSTANT", &names.constant);
        map.insert("SETTINGS_KEY", &names.settings_key);
        map.insert("GATEWAY_ID", &names.gateway_id);
        map.insert("TITLE", &names.title);
        map
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Conditional fragment bodies keyed by slot name. A disabled fragment is
/// registered as empty text so the slot still resolves.
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    values: BTreeMap<String, String>,
}

impl FragmentSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, body: &str) {
        self.values.insert(name.to_string(), body.to_string());
    }

    /// Registers `body` when `enabled`, empty text otherwise.
    pub fn insert_if(&mut self, name: &str, enabled: bool, body: &str) {
        let value = if enabled { body } else { "" };
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

/// A stub parsed into an ordered list of literal runs and `{{NAME}}` slots.
///
/// Rendering resolves each slot against the token map first, then the
/// fragment set, and otherwise to empty text. Fragment bodies expand their
/// own tokens exactly once and are never re-scanned, so substitution order
/// cannot matter and token values cannot collide with slot names.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            let after = &rest[open + 2..];
            let slot = after.find("}}").and_then(|close| {
                let name = &after[..close];
                is_slot_name(name).then_some((name, close))
            });
            match slot {
                Some((name, close)) => {
                    literal.push_str(&rest[..open]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(name.to_string()));
                    rest = &after[close + 2..];
                }
                None => {
                    // Not a slot; keep one brace and rescan from the next,
                    // so "{{{NAME}}" still finds the slot.
                    literal.push_str(&rest[..open + 1]);
                    rest = &rest[open + 1..];
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Template { segments }
    }

    pub fn render(&self, tokens: &TokenMap, fragments: &FragmentSet) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(name) => {
                    if let Some(value) = tokens.get(name) {
                        out.push_str(value);
                    } else if let Some(body) = fragments.get(name) {
                        out.push_str(&expand_tokens(body, tokens));
                    }
                }
            }
        }
        out
    }
}

/// Single-level token expansion for fragment bodies. Fragments never
/// reference other fragments.
fn expand_tokens(body: &str, tokens: &TokenMap) -> String {
    Template::parse(body).render(tokens, &FragmentSet::empty())
}

fn is_slot_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> TokenMap {
        let mut map = TokenMap::default();
        map.insert("SLUG", "paystack");
        map.insert("TITLE", "Paystack");
        map
    }

    #[test]
    fn literal_text_is_untouched() {
        let rendered = Template::parse("hello { world }").render(&tokens(), &FragmentSet::empty());
        assert_eq!(rendered, "hello { world }");
    }

    #[test]
    fn tokens_substitute() {
        let rendered =
            Template::parse("id: {{SLUG}} ({{TITLE}})").render(&tokens(), &FragmentSet::empty());
        assert_eq!(rendered, "id: paystack (Paystack)");
    }

    #[test]
    fn unknown_slot_renders_empty() {
        let rendered =
            Template::parse("a{{NOT_REGISTERED}}b").render(&tokens(), &FragmentSet::empty());
        assert_eq!(rendered, "ab");
    }

    #[test]
    fn fragments_expand_their_own_tokens() {
        let mut fragments = FragmentSet::empty();
        fragments.insert("BLOCK", "enable {{SLUG}};");
        let rendered = Template::parse("<{{BLOCK}}>").render(&tokens(), &fragments);
        assert_eq!(rendered, "<enable paystack;>");
    }

    #[test]
    fn disabled_fragment_is_empty_text() {
        let mut fragments = FragmentSet::empty();
        fragments.insert_if("BLOCK", false, "enable {{SLUG}};");
        let rendered = Template::parse("<{{BLOCK}}>").render(&tokens(), &fragments);
        assert_eq!(rendered, "<>");
    }

    #[test]
    fn fragment_bodies_are_not_rescanned_for_fragments() {
        let mut fragments = FragmentSet::empty();
        fragments.insert("OUTER", "x{{INNER}}y");
        fragments.insert("INNER", "boom");
        let rendered = Template::parse("{{OUTER}}").render(&tokens(), &fragments);
        // INNER is a fragment, not a token, so it expands to empty text.
        assert_eq!(rendered, "xy");
    }

    #[test]
    fn token_values_are_never_rescanned() {
        let mut map = TokenMap::default();
        map.insert("A", "{{B}}");
        map.insert("B", "nope");
        let rendered = Template::parse("{{A}}").render(&map, &FragmentSet::empty());
        assert_eq!(rendered, "{{B}}");
    }

    #[test]
    fn slot_after_extra_brace_is_found() {
        let rendered = Template::parse("{ {{SLUG}} }").render(&tokens(), &FragmentSet::empty());
        assert_eq!(rendered, "{ paystack }");

        let rendered = Template::parse("{{{SLUG}}").render(&tokens(), &FragmentSet::empty());
        assert_eq!(rendered, "{paystack");
    }

    #[test]
    fn lowercase_braces_are_literal() {
        let rendered = Template::parse("{{not_a_slot}}").render(&tokens(), &FragmentSet::empty());
        assert_eq!(rendered, "{{not_a_slot}}");
    }
}
