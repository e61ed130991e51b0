//! For the single line label of a call, independent of its place in the tree.

use calltree_types::CallNode;
use ethers::{types::Address, utils::to_checksum};
use thiserror::Error;

/// Number of bytes in an account address.
pub const ADDRESS_LENGTH: usize = 20;

#[derive(Debug, Error, PartialEq)]
pub enum DisplayError {
    #[error("Address must be 20 bytes, got {length}")]
    AddressLength { length: usize },
}

/// Mixed-case (EIP-55) hex string for raw address bytes.
pub fn checksum_address(bytes: &[u8]) -> Result<String, DisplayError> {
    if bytes.len() != ADDRESS_LENGTH {
        return Err(DisplayError::AddressLength {
            length: bytes.len(),
        });
    }
    Ok(to_checksum(&Address::from_slice(bytes), None))
}

/// Label for a call. E.g., `CALL: 0x5aAe...eAed.<a9059cbb> [21000 gas]`.
///
/// The selector suffix is only present when there is calldata. Calldata shorter than
/// a selector is shown as is.
pub fn title(call: &CallNode) -> Result<String, DisplayError> {
    let mnemonic = call.call_type.mnemonic();
    let address = checksum_address(&call.address)?;
    let cost = call.gas_cost;
    Ok(match call.calldata.is_empty() {
        true => format!("{mnemonic}: {address} [{cost} gas]"),
        false => {
            let selector = hex::encode(call.selector());
            format!("{mnemonic}: {address}.<{selector}> [{cost} gas]")
        }
    })
}

#[cfg(test)]
mod test {
    use calltree_types::CallType;
    use ethers::types::Bytes;

    use super::*;

    fn address(last: u8) -> Vec<u8> {
        let mut bytes = vec![0u8; ADDRESS_LENGTH];
        bytes[ADDRESS_LENGTH - 1] = last;
        bytes
    }

    #[test]
    fn test_checksum_address() {
        let bytes = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(
            checksum_address(&bytes).unwrap(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_checksum_address_wrong_length() {
        assert_eq!(
            checksum_address(&[0u8; 19]),
            Err(DisplayError::AddressLength { length: 19 })
        );
        assert_eq!(
            checksum_address(&[0u8; 32]),
            Err(DisplayError::AddressLength { length: 32 })
        );
        assert_eq!(
            checksum_address(&[]),
            Err(DisplayError::AddressLength { length: 0 })
        );
    }

    #[test]
    fn test_title_static_no_calldata() {
        let call = CallNode::new(CallType::Static, address(1), Bytes::default(), 21000);
        assert_eq!(
            title(&call).unwrap(),
            "STATICCALL: 0x0000000000000000000000000000000000000001 [21000 gas]"
        );
    }

    #[test]
    fn test_title_mutable_with_selector() {
        let calldata = hex::decode("a9059cbb000000000000000000000000").unwrap();
        let call = CallNode::new(CallType::Mutable, address(2), calldata, 50);
        assert_eq!(
            title(&call).unwrap(),
            "CALL: 0x0000000000000000000000000000000000000002.<a9059cbb> [50 gas]"
        );
    }

    #[test]
    fn test_title_exact_selector() {
        let call = CallNode::new(
            CallType::Delegate,
            address(3),
            b"\xde\xad\xbe\xef".to_vec(),
            7,
        );
        assert_eq!(
            title(&call).unwrap(),
            "DELEGATECALL: 0x0000000000000000000000000000000000000003.<deadbeef> [7 gas]"
        );
    }

    #[test]
    fn test_title_short_calldata() {
        let call = CallNode::new(CallType::Internal, address(4), vec![0xabu8, 0xcd], 1);
        assert_eq!(
            title(&call).unwrap(),
            "INTERNALCALL: 0x0000000000000000000000000000000000000004.<abcd> [1 gas]"
        );
    }

    #[test]
    fn test_title_checksummed() {
        let bytes = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let call = CallNode::new(CallType::Mutable, bytes, Bytes::default(), 0);
        assert_eq!(
            title(&call).unwrap(),
            "CALL: 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed [0 gas]"
        );
    }

    #[test]
    fn test_title_invalid_address() {
        let call = CallNode::new(CallType::Mutable, vec![1u8, 2, 3], Bytes::default(), 0);
        assert_eq!(title(&call), Err(DisplayError::AddressLength { length: 3 }));
    }
}
