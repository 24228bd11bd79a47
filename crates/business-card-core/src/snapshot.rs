//! Configuration snapshot derived from the attribute set.

use std::fmt;

use crate::attributes::{Attribute, AttributeSet};

/// Background/foreground pair bound by a theme rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Color theme selected by the `variant` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Wine,
    Graphite,
    Navy,
    Sand,
    /// Unrecognized value, kept verbatim. No theme rule matches it.
    Other(String),
}

impl Variant {
    /// The themed variants, in stylesheet order.
    pub const THEMED: [Variant; 4] = [Variant::Wine, Variant::Graphite, Variant::Navy, Variant::Sand];

    /// Resolve an attribute value; absent or empty falls back to wine.
    pub fn resolve(value: Option<&str>) -> Self {
        match value.unwrap_or_default() {
            "" | "wine" => Variant::Wine,
            "graphite" => Variant::Graphite,
            "navy" => Variant::Navy,
            "sand" => Variant::Sand,
            other => Variant::Other(other.to_string()),
        }
    }

    /// Class name carried by themed elements.
    pub fn class(&self) -> &str {
        match self {
            Variant::Wine => "wine",
            Variant::Graphite => "graphite",
            Variant::Navy => "navy",
            Variant::Sand => "sand",
            Variant::Other(name) => name,
        }
    }

    /// Theme variables, or `None` for an unrecognized variant.
    pub fn palette(&self) -> Option<Palette> {
        let (background, foreground) = match self {
            Variant::Wine => ("#8e3b46", "#fff"),
            Variant::Graphite => ("#2e2e2e", "#fff"),
            Variant::Navy => ("#1f2a44", "#fff"),
            Variant::Sand => ("#f2ede4", "#1a1a1a"),
            Variant::Other(_) => return None,
        };
        Some(Palette { background, foreground })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Screen corner the floating button and popover anchor to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
    /// Unrecognized value, kept verbatim. No offset rule matches it.
    Other(String),
}

/// Edge offsets of one anchored corner, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub vertical: &'static str,
    pub horizontal: &'static str,
}

impl Position {
    pub const ANCHORED: [Position; 4] = [
        Position::BottomRight,
        Position::BottomLeft,
        Position::TopRight,
        Position::TopLeft,
    ];

    /// Resolve an attribute value; absent or empty falls back to bottom-right.
    pub fn resolve(value: Option<&str>) -> Self {
        match value.unwrap_or_default() {
            "" | "bottom-right" => Position::BottomRight,
            "bottom-left" => Position::BottomLeft,
            "top-right" => Position::TopRight,
            "top-left" => Position::TopLeft,
            other => Position::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::Other(name) => name,
        }
    }

    /// Class name used by the offset rules (`pos-bottom-right`).
    pub fn class(&self) -> String {
        format!("pos-{}", self.name())
    }

    /// Edges this position pins to, or `None` when unrecognized.
    pub fn anchor(&self) -> Option<Anchor> {
        let (vertical, horizontal) = match self {
            Position::BottomRight => ("bottom", "right"),
            Position::BottomLeft => ("bottom", "left"),
            Position::TopRight => ("top", "right"),
            Position::TopLeft => ("top", "left"),
            Position::Other(_) => return None,
        };
        Some(Anchor { vertical, horizontal })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field read back from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Flag(bool),
    Choice(&'a str),
}

/// Everything the renderer needs, derived from the current attributes.
///
/// Rebuilt from scratch on every observed change; never patched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardSnapshot {
    pub brand: Option<String>,
    pub subtitle: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub nit: Option<String>,
    pub address: Option<String>,
    pub logo: Option<String>,
    pub variant: Variant,
    pub show_qr: bool,
    pub floating: bool,
    pub position: Position,
}

impl CardSnapshot {
    pub fn from_attributes(attrs: &AttributeSet) -> Self {
        let text = |attr: Attribute| {
            attrs
                .observed(attr)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            brand: text(Attribute::Brand),
            subtitle: text(Attribute::Subtitle),
            name: text(Attribute::Name),
            role: text(Attribute::Role),
            phone: text(Attribute::Phone),
            email: text(Attribute::Email),
            nit: text(Attribute::Nit),
            address: text(Attribute::Address),
            logo: text(Attribute::Logo),
            variant: Variant::resolve(attrs.observed(Attribute::Variant)),
            show_qr: attrs.contains(Attribute::ShowQr.name()),
            floating: attrs.contains(Attribute::Floating.name()),
            position: Position::resolve(attrs.observed(Attribute::Position)),
        }
    }

    /// Read a field by the attribute that feeds it.
    pub fn field(&self, attr: Attribute) -> FieldValue<'_> {
        match attr {
            Attribute::Brand => FieldValue::Text(self.brand.as_deref()),
            Attribute::Subtitle => FieldValue::Text(self.subtitle.as_deref()),
            Attribute::Name => FieldValue::Text(self.name.as_deref()),
            Attribute::Role => FieldValue::Text(self.role.as_deref()),
            Attribute::Phone => FieldValue::Text(self.phone.as_deref()),
            Attribute::Email => FieldValue::Text(self.email.as_deref()),
            Attribute::Nit => FieldValue::Text(self.nit.as_deref()),
            Attribute::Address => FieldValue::Text(self.address.as_deref()),
            Attribute::Logo => FieldValue::Text(self.logo.as_deref()),
            Attribute::Variant => FieldValue::Choice(self.variant.class()),
            Attribute::ShowQr => FieldValue::Flag(self.show_qr),
            Attribute::Floating => FieldValue::Flag(self.floating),
            Attribute::Position => FieldValue::Choice(self.position.name()),
        }
    }
}
