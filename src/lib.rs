//! Display of EVM call trees as text trees.
//!
//! The call tree itself comes from [`types`], rendering lives in [`display`].
pub use calltree_display as display;
pub use calltree_types as types;

pub use calltree_display::{render_lines, render_tree, DisplayNode};
pub use calltree_types::{CallNode, CallType};
