//! Box-drawing pieces used to compose a line of the tree.

/// Connector for a call that has later siblings.
pub const MIDDLE_CONNECTOR: &str = "├──";
/// Connector for the final call among its siblings.
pub const LAST_CONNECTOR: &str = "└──";
/// Indentation under an ancestor that has later siblings.
pub const INDENT_BAR: &str = "│   ";
/// Indentation under an ancestor that was the final sibling.
pub const INDENT_BLANK: &str = "    ";
