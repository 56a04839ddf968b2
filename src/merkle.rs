multiversx_sc::imports!();

use crate::errors::ERR_LEAF_FIELD_OVERFLOW;

pub const HASH_LEN: usize = 32;

/// Byte widths of the fixed-width fraud leaf fields, after the 32-byte address.
pub const VOTE_INDEX_WIDTH: usize = 32;
pub const BURN_AMOUNT_WIDTH: usize = 13;
pub const FRAUD_COUNT_WIDTH: usize = 2;

const ZERO_PADDING: [u8; VOTE_INDEX_WIDTH] = [0u8; VOTE_INDEX_WIDTH];

/// Fraud accusation tree. Leaves are produced off-chain by the authority, so
/// the encoding below must stay bit-exact:
///
/// `keccak256(address ‖ pad32(last_vote_index) ‖ pad13(burn_amount) ‖ pad2(fraud_count))`
///
/// Every number is big-endian and left-padded with zeros. Internal nodes hash
/// the two children in ascending byte order, so proofs carry no left/right
/// flags.
#[multiversx_sc::module]
pub trait MerkleModule {
    fn fraud_leaf(
        &self,
        member: &ManagedAddress,
        last_vote_index: u64,
        burn_amount: &BigUint,
        fraud_count: u16,
    ) -> ManagedByteArray<Self::Api, HASH_LEN> {
        let mut encoded = ManagedBuffer::new();
        encoded.append(member.as_managed_buffer());
        encoded.append(&self.left_pad(
            &ManagedBuffer::new_from_bytes(&last_vote_index.to_be_bytes()),
            VOTE_INDEX_WIDTH,
        ));
        encoded.append(&self.left_pad(&burn_amount.to_bytes_be_buffer(), BURN_AMOUNT_WIDTH));
        encoded.append(&self.left_pad(
            &ManagedBuffer::new_from_bytes(&fraud_count.to_be_bytes()),
            FRAUD_COUNT_WIDTH,
        ));

        self.crypto().keccak256(&encoded)
    }

    fn left_pad(&self, bytes: &ManagedBuffer, width: usize) -> ManagedBuffer {
        let len = bytes.len();
        require!(len <= width, ERR_LEAF_FIELD_OVERFLOW);

        let mut padded = ManagedBuffer::new_from_bytes(&ZERO_PADDING[..width - len]);
        padded.append(bytes);
        padded
    }

    fn hash_pair(
        &self,
        a: &ManagedByteArray<Self::Api, HASH_LEN>,
        b: &ManagedByteArray<Self::Api, HASH_LEN>,
    ) -> ManagedByteArray<Self::Api, HASH_LEN> {
        let (first, second) = if a.to_byte_array() <= b.to_byte_array() {
            (a, b)
        } else {
            (b, a)
        };

        let mut concatenated = ManagedBuffer::new();
        concatenated.append(first.as_managed_buffer());
        concatenated.append(second.as_managed_buffer());
        self.crypto().keccak256(&concatenated)
    }

    fn verify_merkle_proof(
        &self,
        proof: &ManagedVec<Self::Api, ManagedByteArray<Self::Api, HASH_LEN>>,
        root: &ManagedByteArray<Self::Api, HASH_LEN>,
        leaf: ManagedByteArray<Self::Api, HASH_LEN>,
    ) -> bool {
        let mut computed = leaf;
        for sibling in proof.iter() {
            computed = self.hash_pair(&computed, &sibling);
        }
        computed == *root
    }

    /// Lets the authority check its off-chain leaf encoding against the contract.
    #[view(computeFraudLeaf)]
    fn compute_fraud_leaf(
        &self,
        member: ManagedAddress,
        last_vote_index: u64,
        burn_amount: BigUint,
        fraud_count: u16,
    ) -> ManagedByteArray<Self::Api, HASH_LEN> {
        self.fraud_leaf(&member, last_vote_index, &burn_amount, fraud_count)
    }
}
