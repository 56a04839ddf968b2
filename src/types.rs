multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Claim Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ClaimStatus {
    /// Voting window is open. Stakers can vote accept/deny.
    Pending,
    /// Window closed with accepted weight strictly above denied weight.
    Accepted,
    /// Window closed with denied weight >= accepted weight.
    Denied,
}

impl ClaimStatus {
    pub fn label(&self) -> &'static [u8] {
        match self {
            ClaimStatus::Pending => b"Pending",
            ClaimStatus::Accepted => b"Accepted",
            ClaimStatus::Denied => b"Denied",
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Verdict {
    Accept,
    Deny,
}

// ============================================================
// Poll — stake-weighted tally of one claim
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Poll<M: ManagedTypeApi> {
    pub accepted: BigUint<M>,
    pub denied: BigUint<M>,
}

impl<M: ManagedTypeApi> Poll<M> {
    pub fn new() -> Self {
        Poll {
            accepted: BigUint::zero(),
            denied: BigUint::zero(),
        }
    }

    pub fn add(&mut self, verdict: Verdict, weight: &BigUint<M>) {
        match verdict {
            Verdict::Accept => self.accepted += weight,
            Verdict::Deny => self.denied += weight,
        }
    }

    /// Subtracts `weight` from the tally matching `verdict`, clamping at zero.
    /// Returns the weight actually removed.
    pub fn remove(&mut self, verdict: Verdict, weight: &BigUint<M>) -> BigUint<M> {
        let tally = match verdict {
            Verdict::Accept => &mut self.accepted,
            Verdict::Deny => &mut self.denied,
        };
        if *tally >= *weight {
            *tally -= weight;
            weight.clone()
        } else {
            let removed = tally.clone();
            *tally = BigUint::zero();
            removed
        }
    }

    pub fn total(&self) -> BigUint<M> {
        &self.accepted + &self.denied
    }

    /// Ties resolve to Denied.
    pub fn outcome(&self) -> ClaimStatus {
        if self.accepted > self.denied {
            ClaimStatus::Accepted
        } else {
            ClaimStatus::Denied
        }
    }
}

impl<M: ManagedTypeApi> Default for Poll<M> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// Claim — the core assessment record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Claim<M: ManagedTypeApi> {
    pub id: u64,
    pub claimant: ManagedAddress<M>,
    pub cover_id: u64,
    /// Requested payout
    pub amount: BigUint<M>,
    pub cover_start: u64,
    pub cover_end: u64,
    pub voting_start: u64,
    /// Last timestamp at which votes are accepted
    pub voting_end: u64,
    pub poll: Poll<M>,
    pub status: ClaimStatus,
    /// Set once any fraud burn has reversed a vote on this claim.
    /// Does not reopen voting.
    pub burn_adjusted: bool,
}

// ============================================================
// Vote — one entry in a member's personal vote log
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    /// Position in the member's vote log, zero-based and gapless
    pub index: u64,
    pub claim_id: u64,
    pub verdict: Verdict,
    /// Stake snapshot at cast time
    pub weight: BigUint<M>,
    pub cast_at: u64,
}

// ============================================================
// Fraud accounting
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct FraudRecord<M: ManagedTypeApi> {
    /// One past the highest vote index burned so far (0 if never burned)
    pub next_vote_index: u64,
    /// Cumulative stake confiscated from this member
    pub burned_amount: BigUint<M>,
    /// Completed fraud events; a proof must carry exactly this value
    pub fraud_count: u64,
}

impl<M: ManagedTypeApi> Default for FraudRecord<M> {
    fn default() -> Self {
        FraudRecord {
            next_vote_index: 0,
            burned_amount: BigUint::zero(),
            fraud_count: 0,
        }
    }
}

/// Outcome of a single `burnFraud` call.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct BurnReport<M: ManagedTypeApi> {
    pub member: ManagedAddress<M>,
    pub round_id: u64,
    pub first_vote_index: u64,
    /// Inclusive
    pub last_vote_index: u64,
    /// Weight removed from poll tallies in this call
    pub tally_burned: BigUint<M>,
    /// Weight that could not be removed because a tally was already zero
    pub tally_shortfall: BigUint<M>,
    pub stake_burned: BigUint<M>,
    /// Requested burn amount minus stake actually burned
    pub stake_shortfall: BigUint<M>,
    /// True on the call that reached the last fraudulent vote index
    pub completed: bool,
}

// ============================================================
// Display
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ClaimView<M: ManagedTypeApi> {
    pub id: u64,
    pub claimant: ManagedAddress<M>,
    pub cover_id: u64,
    pub amount: BigUint<M>,
    pub status: ClaimStatus,
    pub status_label: ManagedBuffer<M>,
    pub burn_adjusted: bool,
    pub accepted: BigUint<M>,
    pub denied: BigUint<M>,
    pub total_weight: BigUint<M>,
    pub voting_end: u64,
    /// 0 once the voting window has elapsed
    pub seconds_remaining: u64,
}
