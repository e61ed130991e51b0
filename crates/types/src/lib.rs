pub mod call;

pub use call::{CallNode, CallType, TypesError};
