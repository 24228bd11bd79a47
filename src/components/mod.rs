//! UI Components for the desktop preview host.

mod attribute_editor;

pub use attribute_editor::AttributeEditor;
