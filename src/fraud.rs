multiversx_sc::imports!();

use crate::errors::{
    ERR_FRAUD_INDEX_PROCESSED, ERR_INVALID_PROOF, ERR_NOT_FRAUD_AUTHORITY, ERR_ROUND_OUT_OF_RANGE,
    ERR_STALE_FRAUD_PROOF, ERR_VOTE_OUT_OF_RANGE, ERR_ZERO_BATCH_SIZE,
};
use crate::merkle::HASH_LEN;
use crate::types::{BurnReport, FraudRecord};

/// Retroactive invalidation of a member's votes.
///
/// The authority commits one Merkle root per accusation round. For each accused
/// member, anyone holding the proof calls `burnFraud` repeatedly, each call
/// processing at most `batch_size` personal vote indices. Progress is kept in
/// the member's `FraudRecord`, so calls resume where the previous one stopped
/// and a completed accusation cannot be replayed.
#[multiversx_sc::module]
pub trait FraudBurnModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::stake::StakeLedgerModule
    + crate::claims::ClaimRegistryModule
    + crate::voting::VotingModule
    + crate::merkle::MerkleModule
{
    // ========================================================
    // ENDPOINT: submitFraudBatch
    // ========================================================

    #[endpoint(submitFraudBatch)]
    fn submit_fraud_batch(&self, root: ManagedByteArray<Self::Api, HASH_LEN>) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(self.is_fraud_authority(&caller), ERR_NOT_FRAUD_AUTHORITY);

        let round_id = self.fraud_round_count().get();
        self.fraud_roots(round_id).set(&root);
        self.fraud_round_count().set(round_id + 1);

        self.fraud_batch_submitted_event(round_id, &caller, &root);

        round_id
    }

    // ========================================================
    // ENDPOINT: burnFraud
    // Each call commits on its own. A call that exceeds the gas
    // limit reverts without moving the cursor; retry with a
    // smaller batch.
    // ========================================================

    #[endpoint(burnFraud)]
    fn burn_fraud(
        &self,
        round_id: u64,
        proof: ManagedVec<Self::Api, ManagedByteArray<Self::Api, HASH_LEN>>,
        member: ManagedAddress,
        last_fraudulent_vote_index: u64,
        burn_amount: BigUint,
        fraud_count: u16,
        batch_size: u64,
    ) -> BurnReport<Self::Api> {
        require!(
            round_id < self.fraud_round_count().get(),
            ERR_ROUND_OUT_OF_RANGE
        );
        require!(batch_size > 0, ERR_ZERO_BATCH_SIZE);

        let root = self.fraud_roots(round_id).get();
        let leaf = self.fraud_leaf(&member, last_fraudulent_vote_index, &burn_amount, fraud_count);
        require!(
            self.verify_merkle_proof(&proof, &root, leaf),
            ERR_INVALID_PROOF
        );

        let mut record = self.fraud_record_or_default(&member);
        require!(
            record.fraud_count == u64::from(fraud_count),
            ERR_STALE_FRAUD_PROOF
        );
        require!(
            last_fraudulent_vote_index >= record.next_vote_index,
            ERR_FRAUD_INDEX_PROCESSED
        );
        require!(
            last_fraudulent_vote_index < self.member_votes(&member).len() as u64,
            ERR_VOTE_OUT_OF_RANGE
        );

        let first = record.next_vote_index;
        let last = core::cmp::min(
            last_fraudulent_vote_index,
            first.saturating_add(batch_size - 1),
        );

        let (tally_burned, tally_shortfall) = self.reverse_votes(&member, first, last);
        record.next_vote_index = last + 1;

        let completed = last == last_fraudulent_vote_index;
        let mut stake_burned = BigUint::zero();
        let mut stake_shortfall = BigUint::zero();
        if completed {
            stake_burned = self.burn_stake(&member, &burn_amount);
            stake_shortfall = &burn_amount - &stake_burned;
            record.burned_amount += &stake_burned;
            record.fraud_count += 1;
        }
        self.fraud_record(&member).set(&record);

        let report = BurnReport {
            member: member.clone(),
            round_id,
            first_vote_index: first,
            last_vote_index: last,
            tally_burned,
            tally_shortfall,
            stake_burned,
            stake_shortfall,
            completed,
        };
        self.fraud_burn_event(&member, round_id, u64::from(fraud_count), &report);

        report
    }

    /// Removes the recorded weight of votes `first..=last` from their polls.
    /// Returns (weight removed, weight lost to clamping).
    fn reverse_votes(
        &self,
        member: &ManagedAddress,
        first: u64,
        last: u64,
    ) -> (BigUint, BigUint) {
        let mut removed_total = BigUint::zero();
        let mut shortfall = BigUint::zero();

        for index in first..=last {
            let vote = self.member_vote_at(member, index);
            let mut claim = self.claims(vote.claim_id).get();

            let removed = claim.poll.remove(vote.verdict, &vote.weight);
            shortfall += &vote.weight - &removed;
            claim.burn_adjusted = true;
            self.claims(vote.claim_id).set(&claim);

            self.vote_burned_event(member, index, vote.claim_id, &removed);
            removed_total += removed;
        }

        (removed_total, shortfall)
    }

    fn fraud_record_or_default(&self, member: &ManagedAddress) -> FraudRecord<Self::Api> {
        let mapper = self.fraud_record(member);
        if mapper.is_empty() {
            FraudRecord::default()
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFraudRecord)]
    fn get_fraud_record(&self, member: &ManagedAddress) -> FraudRecord<Self::Api> {
        self.fraud_record_or_default(member)
    }

    #[view(getFraudRoot)]
    fn get_fraud_root(&self, round_id: u64) -> ManagedByteArray<Self::Api, HASH_LEN> {
        require!(
            round_id < self.fraud_round_count().get(),
            ERR_ROUND_OUT_OF_RANGE
        );
        self.fraud_roots(round_id).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("fraudRoots")]
    fn fraud_roots(&self, round_id: u64) -> SingleValueMapper<ManagedByteArray<Self::Api, HASH_LEN>>;

    #[view(getFraudRoundCount)]
    #[storage_mapper("fraudRoundCount")]
    fn fraud_round_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("fraudRecord")]
    fn fraud_record(&self, member: &ManagedAddress) -> SingleValueMapper<FraudRecord<Self::Api>>;
}
