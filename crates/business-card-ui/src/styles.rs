//! Scoped stylesheet for the business card widget.
//!
//! Every selector is prefixed with the widget root class so that one
//! widget's rules never reach the host page.

use std::fmt::Write;

use business_card_core::{Position, Variant};

/// Class of the element that scopes the widget's markup and rules.
pub const ROOT_CLASS: &str = "bc-root";

/// Distance of the floating button from its anchored edges.
pub const FAB_EDGE_OFFSET: u32 = 24;

/// Horizontal distance of the popover, clearing the floating button.
pub const POPOVER_SIDE_OFFSET: u32 = 96;

const BASE_STYLES: &str = r#"
.bc-root {
  font-family: system-ui, -apple-system;
}

/* === Floating Button === */
.bc-root .fab {
  position: fixed;
  width: 56px;
  height: 56px;
  border-radius: 50%;
  background: var(--bg);
  color: var(--fg);
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
  box-shadow: 0 12px 30px rgba(0,0,0,.25);
  z-index: 9999;
  transition: transform 180ms cubic-bezier(.2,.8,.2,1);
}

.bc-root .fab:hover {
  transform: scale(1.08);
}

/* === Popover === */
.bc-root .wrapper {
  position: fixed;
  opacity: 0;
  pointer-events: none;
  transform: translateY(10px) scale(.96);
  transition:
    opacity 200ms ease,
    transform 260ms cubic-bezier(.2,.8,.2,1);
  z-index: 9999;
}

.bc-root .wrapper.open {
  opacity: 1;
  pointer-events: auto;
  transform: translateY(0) scale(1);
}

/* === Flip Card === */
.bc-root .card {
  width: 360px;
  height: 210px;
  perspective: 1000px;
}

.bc-root .inner {
  width: 100%;
  height: 100%;
  position: relative;
  transform-style: preserve-3d;
  transition: transform 420ms cubic-bezier(.2,.8,.2,1);
  will-change: transform;
}

.bc-root .card:hover .inner,
.bc-root .card.open .inner {
  transform: rotateY(180deg) scale(1.015);
}

.bc-root .face {
  position: absolute;
  inset: 0;
  border-radius: 16px;
  padding: 18px;
  box-sizing: border-box;
  backface-visibility: hidden;
  background: var(--bg);
  color: var(--fg);
  box-shadow: 0 14px 40px rgba(0,0,0,.18);
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
}

.bc-root .back {
  transform: rotateY(180deg);
  align-items: stretch;
}

/* === Front === */
.bc-root .logo {
  max-width: 120px;
  max-height: 60px;
  margin-bottom: 12px;
}

.bc-root .brand {
  font-size: 20px;
  font-weight: 800;
  letter-spacing: 1px;
  text-align: center;
}

.bc-root .subtitle {
  font-size: 12px;
  opacity: .85;
  text-align: center;
}

/* === Back === */
.bc-root .content {
  display: grid;
  grid-template-columns: 1fr auto;
  gap: 12px;
  height: 100%;
}

.bc-root .person strong {
  display: block;
  font-size: 16px;
}

.bc-root .person span {
  font-size: 12px;
  opacity: .85;
}

.bc-root .contact {
  font-size: 12px;
  line-height: 1.6;
}

.bc-root .wa {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  text-decoration: none;
  color: inherit;
  font-weight: 600;
}

.bc-root .wa svg {
  width: 14px;
  height: 14px;
  fill: currentColor;
}

.bc-root .legal {
  font-size: 10px;
  opacity: .75;
  margin-top: auto;
}

.bc-root .qr {
  width: 72px;
  height: 72px;
  background: #fff;
  border-radius: 8px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.bc-root .qr-inline svg {
  width: 72px;
  height: 72px;
}
"#;

/// Rule binding `--bg`/`--fg` for a themed variant.
///
/// Unrecognized variants have no rule, so their elements fall back to
/// unstyled output.
pub fn theme_rule(variant: &Variant) -> Option<String> {
    let palette = variant.palette()?;
    Some(format!(
        ".{ROOT_CLASS} .{} {{ --bg:{}; --fg:{}; }}",
        variant.class(),
        palette.background,
        palette.foreground
    ))
}

/// Offset rules for one position: the floating button, then the popover.
pub fn position_rules(position: &Position) -> Vec<String> {
    let Some(anchor) = position.anchor() else {
        return Vec::new();
    };
    let class = position.class();
    vec![
        format!(
            ".{ROOT_CLASS} .{class} {{ {}: {FAB_EDGE_OFFSET}px; {}: {FAB_EDGE_OFFSET}px; }}",
            anchor.vertical, anchor.horizontal
        ),
        format!(
            ".{ROOT_CLASS} .wrapper.{class} {{ {}: {FAB_EDGE_OFFSET}px; {}: {POPOVER_SIDE_OFFSET}px; }}",
            anchor.vertical, anchor.horizontal
        ),
    ]
}

/// The full widget stylesheet.
///
/// Independent of the snapshot: every theme and position rule is always
/// present and the markup selects among them by class.
pub fn stylesheet() -> String {
    let mut css = String::with_capacity(BASE_STYLES.len() + 1024);

    css.push_str("\n/* === Themes === */\n");
    for variant in Variant::THEMED.iter() {
        if let Some(rule) = theme_rule(variant) {
            let _ = writeln!(css, "{rule}");
        }
    }

    css.push_str(BASE_STYLES);

    css.push_str("\n/* === Anchors === */\n");
    for position in Position::ANCHORED.iter() {
        for rule in position_rules(position) {
            let _ = writeln!(css, "{rule}");
        }
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wine_theme_rule() {
        assert_eq!(
            theme_rule(&Variant::Wine).unwrap(),
            ".bc-root .wine { --bg:#8e3b46; --fg:#fff; }"
        );
    }

    #[test]
    fn unknown_variant_has_no_rule() {
        assert!(theme_rule(&Variant::Other("lime".into())).is_none());
        assert!(!stylesheet().contains(".lime"));
    }

    #[test]
    fn bottom_right_offsets() {
        assert_eq!(
            position_rules(&Position::BottomRight),
            vec![
                ".bc-root .pos-bottom-right { bottom: 24px; right: 24px; }".to_string(),
                ".bc-root .wrapper.pos-bottom-right { bottom: 24px; right: 96px; }".to_string(),
            ]
        );
    }

    #[test]
    fn stylesheet_has_every_theme_and_anchor() {
        let css = stylesheet();
        for variant in Variant::THEMED.iter() {
            assert!(css.contains(&theme_rule(variant).unwrap()), "{variant}");
        }
        for position in Position::ANCHORED.iter() {
            for rule in position_rules(position) {
                assert!(css.contains(&rule), "{rule}");
            }
        }
    }

    #[test]
    fn stylesheet_is_safe_as_text_node() {
        let css = stylesheet();
        for c in ['<', '>', '&', '"', '\''] {
            assert!(!css.contains(c), "stylesheet contains {c:?}");
        }
    }
}
