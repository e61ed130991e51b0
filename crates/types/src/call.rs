//! For the call tree produced by an EVM call tracer.
//!
//! A tree holds one node per message call made during a transaction. Children
//! are stored in the order they were executed.

use std::{fmt::Display, io::Read};

use ethers::types::{Bytes, U256};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Number of calldata bytes that identify the function being called.
pub const SELECTOR_LENGTH: usize = 4;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("serde_json error {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// The kind of message call a node represents.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    /// A jump within the same contract (no new call frame).
    Internal,
    /// STATICCALL, cannot modify state.
    Static,
    /// CALL, may modify state.
    Mutable,
    /// DELEGATECALL, runs code in the context of the caller.
    Delegate,
}

impl CallType {
    /// Lower case name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            CallType::Internal => "internal",
            CallType::Static => "static",
            CallType::Mutable => "mutable",
            CallType::Delegate => "delegate",
        }
    }

    /// Opcode style name for the call. E.g., STATICCALL.
    pub fn mnemonic(&self) -> String {
        match self {
            CallType::Mutable => "CALL".to_string(),
            other => format!("{}CALL", other.name().to_uppercase()),
        }
    }
}

impl Display for CallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// A single message call and the calls it made.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallNode {
    pub call_type: CallType,
    /// Raw address bytes. Length is checked when the address is displayed.
    pub address: Bytes,
    /// Wei sent with the call. Either a JSON integer or a hex string.
    #[serde(default, deserialize_with = "number_or_hex")]
    pub value: U256,
    /// Distance from the root call (root is 0).
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub gas_limit: u64,
    pub gas_cost: u64,
    #[serde(default)]
    pub calldata: Bytes,
    #[serde(default)]
    pub returndata: Bytes,
    /// Calls made by this call, in execution order.
    #[serde(default, alias = "calls")]
    pub children: Vec<CallNode>,
    #[serde(default)]
    pub selfdestruct: bool,
    #[serde(default)]
    pub failed: bool,
}

impl CallNode {
    /// Creates a root call (depth 0) with no children.
    pub fn new<A, C>(call_type: CallType, address: A, calldata: C, gas_cost: u64) -> Self
    where
        A: Into<Bytes>,
        C: Into<Bytes>,
    {
        Self {
            call_type,
            address: address.into(),
            value: U256::zero(),
            depth: 0,
            gas_limit: 0,
            gas_cost,
            calldata: calldata.into(),
            returndata: Bytes::default(),
            children: vec![],
            selfdestruct: false,
            failed: false,
        }
    }

    /// Appends a call made by this call. Depths in the child subtree are
    /// set relative to this node.
    pub fn with_child(mut self, mut child: CallNode) -> Self {
        child.set_depth(self.depth + 1);
        self.children.push(child);
        self
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        for child in self.children.iter_mut() {
            child.set_depth(depth + 1);
        }
    }

    /// Reads a call tree from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TypesError> {
        deserialize_unbounded(serde_json::Deserializer::from_str(json))
    }

    /// Reads a call tree from JSON (e.g., a file or stdin).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TypesError> {
        deserialize_unbounded(serde_json::Deserializer::from_reader(reader))
    }

    /// Number of calls in the tree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CallNode::node_count)
            .sum::<usize>()
    }

    /// Function selector bytes. Shorter calldata yields all available bytes.
    pub fn selector(&self) -> &[u8] {
        let end = self.calldata.len().min(SELECTOR_LENGTH);
        &self.calldata[..end]
    }
}

/// Deserializes a whole call tree with no nesting limit.
///
/// Every call level is two JSON levels (object and child array), so the default
/// limit of 128 would reject trees deeper than 63 calls. The stack is grown on
/// the heap as needed.
fn deserialize_unbounded<'de, R>(
    mut deserializer: serde_json::Deserializer<R>,
) -> Result<CallNode, TypesError>
where
    R: serde_json::de::Read<'de>,
{
    deserializer.disable_recursion_limit();
    let node = CallNode::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(node)
}

/// Tracers differ in how they encode numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrHex {
    Number(u64),
    Hex(U256),
}

fn number_or_hex<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    Ok(match NumberOrHex::deserialize(deserializer)? {
        NumberOrHex::Number(number) => U256::from(number),
        NumberOrHex::Hex(value) => value,
    })
}
