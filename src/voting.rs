multiversx_sc::imports!();

use crate::errors::{ERR_DUPLICATE_VOTE, ERR_VOTE_OUT_OF_RANGE, ERR_VOTING_CLOSED};
use crate::types::{ClaimStatus, Verdict, Vote};

#[multiversx_sc::module]
pub trait VotingModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::stake::StakeLedgerModule
    + crate::claims::ClaimRegistryModule
{
    // ========================================================
    // ENDPOINT: castVote
    // Weighted by the caller's stake at cast time. Zero-weight
    // votes are recorded but move no tally. Returns the caller's
    // personal vote index, which fraud proofs address.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, claim_id: u64, verdict: Verdict) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_claim_exists(claim_id);

        let mut claim = self.claims(claim_id).get();
        let now = self.blockchain().get_block_timestamp();
        require!(
            claim.status == ClaimStatus::Pending && now <= claim.voting_end,
            ERR_VOTING_CLOSED
        );
        require!(
            !self.has_voted(claim_id, &caller).get(),
            ERR_DUPLICATE_VOTE
        );

        let weight = self.stake(&caller).get();
        let vote_index = self.member_votes(&caller).len() as u64;
        let vote = Vote {
            index: vote_index,
            claim_id,
            verdict,
            weight,
            cast_at: now,
        };

        claim.poll.add(verdict, &vote.weight);
        self.claims(claim_id).set(&claim);

        self.member_votes(&caller).push(&vote);
        self.has_voted(claim_id, &caller).set(true);
        self.lock_stake(&caller, claim.voting_end, &vote.weight);

        self.vote_event(claim_id, &caller, verdict, vote_index, &vote.weight);

        vote_index
    }

    /// Reads the vote at a zero-based personal index. Caller checks bounds.
    fn member_vote_at(&self, member: &ManagedAddress, index: u64) -> Vote<Self::Api> {
        // VecMapper is 1-based
        self.member_votes(member).get(index as usize + 1)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMemberVoteCount)]
    fn get_member_vote_count(&self, member: &ManagedAddress) -> u64 {
        self.member_votes(member).len() as u64
    }

    #[view(getMemberVote)]
    fn get_member_vote(&self, member: &ManagedAddress, index: u64) -> Vote<Self::Api> {
        require!(
            index < self.member_votes(member).len() as u64,
            ERR_VOTE_OUT_OF_RANGE
        );
        self.member_vote_at(member, index)
    }

    #[view(hasVoted)]
    fn has_member_voted(&self, claim_id: u64, member: &ManagedAddress) -> bool {
        self.has_voted(claim_id, member).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Append-only personal vote log
    #[storage_mapper("memberVotes")]
    fn member_votes(&self, member: &ManagedAddress) -> VecMapper<Vote<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, claim_id: u64, member: &ManagedAddress) -> SingleValueMapper<bool>;
}
