//! Renders an EVM call tree as an indented text tree, one line per call.
//!
//! ```text
//! CALL: 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed.<a9059cbb> [21000 gas]
//! ├── STATICCALL: 0x0000000000000000000000000000000000000002 [3000 gas]
//! │   └── DELEGATECALL: 0x0000000000000000000000000000000000000003.<70a08231> [1200 gas]
//! └── CALL: 0x0000000000000000000000000000000000000004 [500 gas]
//! ```
pub mod glyph;
pub mod node;
pub mod render;
pub mod title;

pub use node::{CallTreeIter, DisplayNode};
pub use render::{flatten, render_lines, render_titles, render_tree};
pub use title::{checksum_address, title, DisplayError};
