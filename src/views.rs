multiversx_sc::imports!();

use crate::types::{Claim, ClaimView};

/// Read-only projection of claims for front-ends.
#[multiversx_sc::module]
pub trait DisplayModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::claims::ClaimRegistryModule
{
    /// Claims with ids in `[start, end)`. Out-of-range bounds are clamped,
    /// so an empty page is returned rather than an error.
    #[view(getClaimsPage)]
    fn get_claims_page(&self, start: u64, end: u64) -> MultiValueEncoded<ClaimView<Self::Api>> {
        let now = self.blockchain().get_block_timestamp();
        let mut result = MultiValueEncoded::new();
        for claim_id in self.claim_id_range(start, end) {
            let claim = self.claims(claim_id).get();
            result.push(self.claim_view(claim, now));
        }
        result
    }

    fn claim_view(&self, claim: Claim<Self::Api>, now: u64) -> ClaimView<Self::Api> {
        let total_weight = claim.poll.total();
        ClaimView {
            id: claim.id,
            claimant: claim.claimant,
            cover_id: claim.cover_id,
            amount: claim.amount,
            status: claim.status,
            status_label: ManagedBuffer::new_from_bytes(claim.status.label()),
            burn_adjusted: claim.burn_adjusted,
            accepted: claim.poll.accepted,
            denied: claim.poll.denied,
            total_weight,
            voting_end: claim.voting_end,
            seconds_remaining: claim.voting_end.saturating_sub(now),
        }
    }
}
