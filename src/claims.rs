multiversx_sc::imports!();

use crate::errors::{
    ERR_CLAIM_OUT_OF_RANGE, ERR_COVER_NOT_ACTIVE, ERR_INSUFFICIENT_FEE, ERR_INVALID_COVER_PERIOD,
    ERR_NO_FEES, ERR_VOTING_END_OVERFLOW, ERR_VOTING_NOT_ENDED, ERR_ZERO_AMOUNT,
};
use crate::types::{Claim, ClaimStatus, Poll};

#[multiversx_sc::module]
pub trait ClaimRegistryModule: crate::config::ConfigModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: submitClaim
    // Anyone can claim against a cover by paying the fee. The
    // cover must be active at submission time.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(submitClaim)]
    fn submit_claim(
        &self,
        cover_id: u64,
        amount: BigUint,
        cover_start: u64,
        cover_end: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let fee = self.call_value().egld_value().clone_value();
        require!(fee >= self.submission_fee().get(), ERR_INSUFFICIENT_FEE);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(cover_start < cover_end, ERR_INVALID_COVER_PERIOD);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= cover_start && now <= cover_end,
            ERR_COVER_NOT_ACTIVE
        );

        let voting_end = match now.checked_add(self.voting_period().get()) {
            Some(end) => end,
            None => sc_panic!(ERR_VOTING_END_OVERFLOW),
        };

        let claim_id = self.claim_count().get();
        let claim = Claim {
            id: claim_id,
            claimant: caller.clone(),
            cover_id,
            amount,
            cover_start,
            cover_end,
            voting_start: now,
            voting_end,
            poll: Poll::new(),
            status: ClaimStatus::Pending,
            burn_adjusted: false,
        };

        self.claims(claim_id).set(&claim);
        self.claim_count().set(claim_id + 1);
        self.collected_fees().update(|f| *f += &fee);

        self.claim_submitted_event(claim_id, &caller, cover_id, &claim.amount);

        claim_id
    }

    // ========================================================
    // ENDPOINT: closeClaim
    // Anyone, once the window has elapsed. Re-closing is a no-op.
    // ========================================================

    #[endpoint(closeClaim)]
    fn close_claim(&self, claim_id: u64) -> ClaimStatus {
        self.require_claim_exists(claim_id);

        let mut claim = self.claims(claim_id).get();
        if claim.status != ClaimStatus::Pending {
            return claim.status;
        }

        let now = self.blockchain().get_block_timestamp();
        require!(now > claim.voting_end, ERR_VOTING_NOT_ENDED);

        claim.status = claim.poll.outcome();
        self.claims(claim_id).set(&claim);
        self.claim_closed_event(claim_id, claim.status == ClaimStatus::Accepted);

        claim.status
    }

    #[only_owner]
    #[endpoint(withdrawFees)]
    fn withdraw_fees(&self) {
        let fees = self.collected_fees().get();
        require!(fees > 0u64, ERR_NO_FEES);

        let owner = self.blockchain().get_caller();
        self.collected_fees().clear();
        self.send().direct_egld(&owner, &fees);
        self.fees_withdrawn_event(&owner, &fees);
    }

    fn require_claim_exists(&self, claim_id: u64) {
        require!(claim_id < self.claim_count().get(), ERR_CLAIM_OUT_OF_RANGE);
    }

    /// Ids in `[start, end)`, clamped to the registry bounds.
    fn claim_id_range(&self, start: u64, end: u64) -> core::ops::Range<u64> {
        let end = core::cmp::min(end, self.claim_count().get());
        let start = core::cmp::min(start, end);
        start..end
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getClaim)]
    fn get_claim(&self, claim_id: u64) -> Claim<Self::Api> {
        self.require_claim_exists(claim_id);
        self.claims(claim_id).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("claims")]
    fn claims(&self, claim_id: u64) -> SingleValueMapper<Claim<Self::Api>>;

    #[view(getClaimCount)]
    #[storage_mapper("claimCount")]
    fn claim_count(&self) -> SingleValueMapper<u64>;

    #[view(getCollectedFees)]
    #[storage_mapper("collectedFees")]
    fn collected_fees(&self) -> SingleValueMapper<BigUint>;
}
