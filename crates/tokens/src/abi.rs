use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall};

sol! {
    /// Hand tickets over using a transfer order signed by their owner.
    function passTo(uint256 expiry, uint256[] tokenIds, uint8 v, bytes32 r, bytes32 s, address recipient) external;

    /// Standard ERC-721 transfer of a single token.
    function safeTransferFrom(address from, address to, uint256 tokenId) external;
}

/// An ABI encoded contract call, ready to be placed in a transaction's data field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFunction {
    pub signature: &'static str,
    pub selector: [u8; 4],
    pub data: Bytes,
}

impl EncodedFunction {
    pub fn encode<C: SolCall>(call: &C) -> Self {
        Self {
            signature: C::SIGNATURE,
            selector: C::SELECTOR,
            data: Bytes::from(call.abi_encode()),
        }
    }

    /// Function name without its parameter list
    pub fn name(&self) -> &'static str {
        self.signature
            .split('(')
            .next()
            .unwrap_or(self.signature)
    }
}

pub fn pass_to(
    expiry: U256,
    token_ids: &[U256],
    v: u8,
    r: B256,
    s: B256,
    recipient: Address,
) -> EncodedFunction {
    EncodedFunction::encode(&passToCall {
        expiry,
        tokenIds: token_ids.to_vec(),
        v,
        r,
        s,
        recipient,
    })
}

pub fn safe_transfer_from(from: Address, to: Address, token_id: U256) -> EncodedFunction {
    EncodedFunction::encode(&safeTransferFromCall {
        from,
        to,
        tokenId: token_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_transfer_from_layout() {
        let from = Address::repeat_byte(0x11);
        let to = Address::repeat_byte(0x22);
        let encoded = safe_transfer_from(from, to, U256::from(7));

        assert_eq!(encoded.signature, "safeTransferFrom(address,address,uint256)");
        assert_eq!(encoded.name(), "safeTransferFrom");
        assert_eq!(encoded.selector, [0x42, 0x84, 0x2e, 0x0e]);
        assert_eq!(encoded.data.len(), 4 + 3 * 32);
        assert_eq!(&encoded.data[..4], &encoded.selector);
        // addresses are left padded to a full word
        assert_eq!(&encoded.data[16..36], from.as_slice());
        assert_eq!(&encoded.data[48..68], to.as_slice());
        assert_eq!(encoded.data[99], 7);
    }

    #[test]
    fn test_pass_to_layout() {
        let ids = [U256::from(1), U256::from(2)];
        let encoded = pass_to(
            U256::from(1_700_000_000u64),
            &ids,
            27,
            B256::repeat_byte(0xaa),
            B256::repeat_byte(0xbb),
            Address::repeat_byte(0x33),
        );

        assert_eq!(
            encoded.signature,
            "passTo(uint256,uint256[],uint8,bytes32,bytes32,address)"
        );
        assert_eq!(encoded.name(), "passTo");
        // six head words, then the array length and its two elements
        assert_eq!(encoded.data.len(), 4 + 6 * 32 + 3 * 32);
        // offset of the dynamic array points past the head
        assert_eq!(encoded.data[4 + 32 + 31], 6 * 32);
        assert_eq!(encoded.data[4 + 2 * 32 + 31], 27);
        assert_eq!(encoded.data[4 + 6 * 32 + 31], 2);
    }
}
