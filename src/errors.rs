// User-facing error messages. Every failing call reverts all of its writes.

pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_INSUFFICIENT_FEE: &str = "Insufficient claim submission fee";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient staked balance";
pub const ERR_STAKE_LOCKED: &str = "Stake is locked by votes on open claims";

pub const ERR_INVALID_COVER_PERIOD: &str = "Invalid cover period";
pub const ERR_COVER_NOT_ACTIVE: &str = "Cover is not active";
pub const ERR_CLAIM_OUT_OF_RANGE: &str = "Claim id out of range";
pub const ERR_VOTING_NOT_ENDED: &str = "Voting period has not ended";
pub const ERR_VOTING_END_OVERFLOW: &str = "Voting period overflows the timestamp range";

pub const ERR_VOTING_CLOSED: &str = "Voting is closed for this claim";
pub const ERR_DUPLICATE_VOTE: &str = "Already voted on this claim";
pub const ERR_VOTE_OUT_OF_RANGE: &str = "Vote index out of range";

pub const ERR_NOT_FRAUD_AUTHORITY: &str = "Only the fraud authority can submit fraud batches";
pub const ERR_ROUND_OUT_OF_RANGE: &str = "Fraud round out of range";
pub const ERR_ZERO_BATCH_SIZE: &str = "Batch size must be greater than zero";
pub const ERR_INVALID_PROOF: &str = "Invalid fraud proof";
pub const ERR_STALE_FRAUD_PROOF: &str = "Stale fraud proof";
pub const ERR_FRAUD_INDEX_PROCESSED: &str = "Fraudulent vote index already processed";
pub const ERR_LEAF_FIELD_OVERFLOW: &str = "Value does not fit fraud leaf encoding";

pub const ERR_NO_FEES: &str = "No fees to withdraw";
pub const ERR_ZERO_VOTING_PERIOD: &str = "Voting period must be greater than zero";
