#![no_std]

multiversx_sc::imports!();

pub mod claims;
pub mod config;
pub mod errors;
pub mod events;
pub mod fraud;
pub mod merkle;
pub mod stake;
pub mod types;
pub mod views;
pub mod voting;

use errors::ERR_ZERO_VOTING_PERIOD;

// ============================================================
// Contract
// ============================================================

/// Stake-weighted claims assessment with Merkle-proven fraud burns.
///
/// Members stake EGLD, claimants pay a fee to open a claim, stakers vote to
/// accept or deny it, and the fraud authority can retroactively nullify the
/// votes and confiscate the stake of members proven to have acted in bad faith.
#[multiversx_sc::contract]
pub trait ClaimsLedger:
    config::ConfigModule
    + events::EventsModule
    + stake::StakeLedgerModule
    + claims::ClaimRegistryModule
    + voting::VotingModule
    + merkle::MerkleModule
    + fraud::FraudBurnModule
    + views::DisplayModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, submission_fee: BigUint, voting_period: u64, fraud_authority: ManagedAddress) {
        require!(voting_period > 0, ERR_ZERO_VOTING_PERIOD);

        self.submission_fee().set(&submission_fee);
        self.voting_period().set(voting_period);
        self.fraud_authority().set(&fraud_authority);
        self.total_staked().set(BigUint::zero());
        self.total_burned().set(BigUint::zero());
        self.claim_count().set(0u64);
        self.fraud_round_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
