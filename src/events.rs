multiversx_sc::imports!();

use crate::types::{BurnReport, Verdict};

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Stake ──

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_stake: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_stake: &BigUint,
    );

    #[event("stakeBurned")]
    fn stake_burned_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] requested: &BigUint,
        burned: &BigUint,
    );

    // ── Claims ──

    #[event("claimSubmitted")]
    fn claim_submitted_event(
        &self,
        #[indexed] claim_id: u64,
        #[indexed] claimant: &ManagedAddress,
        #[indexed] cover_id: u64,
        amount: &BigUint,
    );

    #[event("claimClosed")]
    fn claim_closed_event(&self, #[indexed] claim_id: u64, #[indexed] accepted: bool);

    // ── Voting ──

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] claim_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] verdict: Verdict,
        #[indexed] vote_index: u64,
        weight: &BigUint,
    );

    // ── Fraud ──

    #[event("fraudBatchSubmitted")]
    fn fraud_batch_submitted_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] submitter: &ManagedAddress,
        root: &ManagedByteArray<Self::Api, 32>,
    );

    #[event("voteBurned")]
    fn vote_burned_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] vote_index: u64,
        #[indexed] claim_id: u64,
        removed_weight: &BigUint,
    );

    #[event("fraudBurn")]
    fn fraud_burn_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] round_id: u64,
        #[indexed] fraud_count: u64,
        report: &BurnReport<Self::Api>,
    );

    // ── Admin ──

    #[event("feesWithdrawn")]
    fn fees_withdrawn_event(&self, #[indexed] receiver: &ManagedAddress, amount: &BigUint);

    #[event("configChanged")]
    fn config_changed_event(&self, #[indexed] parameter: &ManagedBuffer);
}
