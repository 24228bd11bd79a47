//! Declarative attribute surface of the widget.
//!
//! The widget observes a fixed list of attribute names. Every other
//! attribute is kept on the host so it round-trips, but render logic
//! never reads it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One observed attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Brand,
    Subtitle,
    Name,
    Role,
    Phone,
    Email,
    Nit,
    Address,
    Logo,
    Variant,
    ShowQr,
    Floating,
    Position,
}

impl Attribute {
    /// Every observed attribute, in declaration order.
    pub const ALL: [Attribute; 13] = [
        Attribute::Brand,
        Attribute::Subtitle,
        Attribute::Name,
        Attribute::Role,
        Attribute::Phone,
        Attribute::Email,
        Attribute::Nit,
        Attribute::Address,
        Attribute::Logo,
        Attribute::Variant,
        Attribute::ShowQr,
        Attribute::Floating,
        Attribute::Position,
    ];

    /// The attribute name as written on the host element.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Brand => "brand",
            Attribute::Subtitle => "subtitle",
            Attribute::Name => "name",
            Attribute::Role => "role",
            Attribute::Phone => "phone",
            Attribute::Email => "email",
            Attribute::Nit => "nit",
            Attribute::Address => "address",
            Attribute::Logo => "logo",
            Attribute::Variant => "variant",
            Attribute::ShowQr => "show-qr",
            Attribute::Floating => "floating",
            Attribute::Position => "position",
        }
    }

    /// The camelCase field this attribute mirrors into.
    pub fn field_name(&self) -> &'static str {
        match self {
            Attribute::ShowQr => "showQr",
            other => other.name(),
        }
    }

    /// Look up an observed attribute by its host name.
    ///
    /// Names are matched exactly; anything else is unobserved.
    pub fn parse(name: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|attr| attr.name() == name)
    }

    /// Whether only the presence of the attribute matters.
    pub fn is_presence_flag(&self) -> bool {
        matches!(self, Attribute::ShowQr | Attribute::Floating)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a hyphenated attribute name to its camelCase field name.
///
/// Each hyphen followed by a lowercase ASCII letter is dropped and the
/// letter upper-cased (`show-qr` becomes `showQr`). Any other hyphen is
/// kept as is.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Whether an attribute change touched an observed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    /// An observed attribute changed; the widget must re-render.
    Observed(Attribute),
    /// An unobserved attribute changed; nothing re-renders.
    Ignored,
}

/// Every attribute currently present on the host element.
///
/// Values are kept exactly as written. An attribute without a value is
/// stored with an empty string, which still counts as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> AttributeChange {
        let name = name.into();
        let change = Self::classify(&name);
        self.values.insert(name, value.into());
        change
    }

    /// Remove an attribute.
    pub fn remove(&mut self, name: &str) -> AttributeChange {
        self.values.remove(name);
        Self::classify(name)
    }

    /// Apply a change the way the host reports it: `None` means removed.
    pub fn apply(&mut self, name: &str, value: Option<&str>) -> AttributeChange {
        match value {
            Some(value) => self.set(name, value),
            None => self.remove(name),
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Value of an observed attribute.
    pub fn observed(&self, attr: Attribute) -> Option<&str> {
        self.get(attr.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn classify(name: &str) -> AttributeChange {
        match Attribute::parse(name) {
            Some(attr) => AttributeChange::Observed(attr),
            None => AttributeChange::Ignored,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = AttributeSet::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_camel_case_rule() {
        for attr in Attribute::ALL {
            assert_eq!(attr.field_name(), camel_case(attr.name()), "{attr}");
        }
        assert_eq!(Attribute::ShowQr.field_name(), "showQr");
    }

    #[test]
    fn camel_case_examples() {
        assert_eq!(camel_case("show-qr"), "showQr");
        assert_eq!(camel_case("data-card-id"), "dataCardId");
        assert_eq!(camel_case("brand"), "brand");
        assert_eq!(camel_case("trailing-"), "trailing-");
        assert_eq!(camel_case("x-9"), "x-9");
    }

    #[test]
    fn parse_round_trips_every_name() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::parse(attr.name()), Some(attr));
        }
        assert_eq!(Attribute::parse("showQr"), None);
        assert_eq!(Attribute::parse("Brand"), None);
        assert_eq!(Attribute::parse("data-id"), None);
    }

    #[test]
    fn only_show_qr_and_floating_are_presence_flags() {
        let flags: Vec<_> = Attribute::ALL
            .into_iter()
            .filter(Attribute::is_presence_flag)
            .collect();
        assert_eq!(flags, vec![Attribute::ShowQr, Attribute::Floating]);
    }

    #[test]
    fn set_classifies_change() {
        let mut attrs = AttributeSet::new();
        assert_eq!(attrs.set("brand", "Acme"), AttributeChange::Observed(Attribute::Brand));
        assert_eq!(attrs.set("data-id", "7"), AttributeChange::Ignored);
        assert_eq!(attrs.get("data-id"), Some("7"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn apply_none_removes() {
        let mut attrs = AttributeSet::new().with("floating", "");
        assert!(attrs.contains("floating"));
        assert_eq!(
            attrs.apply("floating", None),
            AttributeChange::Observed(Attribute::Floating)
        );
        assert!(!attrs.contains("floating"));
    }

    #[test]
    fn empty_value_is_still_present() {
        let attrs = AttributeSet::new().with("show-qr", "");
        assert!(attrs.contains("show-qr"));
        assert_eq!(attrs.observed(Attribute::ShowQr), Some(""));
    }
}
