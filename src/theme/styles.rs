//! Global CSS for the preview page around the widget.
//!
//! Nothing here targets the widget's own classes; the widget carries
//! its scoped stylesheet.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, sans-serif;
  background: #ecebe8;
  color: #1a1a1a;
  min-height: 100vh;
}

/* === Layout === */
.host-page {
  display: grid;
  grid-template-columns: 320px 1fr;
  min-height: 100vh;
}

.stage {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 48px;
}

/* === Attribute Editor === */
.attr-editor {
  background: #fafaf8;
  border-right: 1px solid #d8d6d0;
  padding: 20px;
  overflow-y: auto;
}

.attr-editor__title {
  font-size: 14px;
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  margin: 0 0 16px;
}

.attr-row {
  display: grid;
  grid-template-columns: 1fr auto;
  grid-template-areas:
    "name field"
    "input input";
  gap: 4px 8px;
  margin-bottom: 12px;
  font-size: 12px;
}

.attr-row__name {
  grid-area: name;
  font-weight: 600;
}

.attr-row__field {
  grid-area: field;
  color: #8a877f;
  font-family: ui-monospace, monospace;
}

.attr-row__input {
  grid-area: input;
  padding: 6px 8px;
  border: 1px solid #d8d6d0;
  border-radius: 6px;
  font: inherit;
}

.attr-row input[type="checkbox"] {
  grid-area: input;
  justify-self: start;
}

.attr-editor__footer {
  display: flex;
  align-items: center;
  gap: 12px;
  margin-top: 20px;
}

.btn-save {
  padding: 6px 16px;
  border: 1px solid #8e3b46;
  border-radius: 6px;
  background: transparent;
  color: #8e3b46;
  cursor: pointer;
}

.btn-save:disabled {
  opacity: 0.4;
  cursor: default;
}

.attr-editor__status {
  font-size: 11px;
  color: #8a877f;
}
"#;
