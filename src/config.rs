multiversx_sc::imports!();

use crate::errors::ERR_ZERO_VOTING_PERIOD;

/// Economic parameters. These are deployment configuration, adjustable by the
/// owner, not ledger invariants.
#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    #[only_owner]
    #[endpoint(setSubmissionFee)]
    fn set_submission_fee(&self, fee: BigUint) {
        self.submission_fee().set(&fee);
        self.config_changed_event(&ManagedBuffer::from(b"submissionFee"));
    }

    #[only_owner]
    #[endpoint(setVotingPeriod)]
    fn set_voting_period(&self, period: u64) {
        require!(period > 0, ERR_ZERO_VOTING_PERIOD);
        self.voting_period().set(period);
        self.config_changed_event(&ManagedBuffer::from(b"votingPeriod"));
    }

    #[only_owner]
    #[endpoint(setFraudAuthority)]
    fn set_fraud_authority(&self, authority: ManagedAddress) {
        self.fraud_authority().set(&authority);
        self.config_changed_event(&ManagedBuffer::from(b"fraudAuthority"));
    }

    /// The owner always holds the authority capability in addition to the
    /// configured address (the external governance executor).
    fn is_fraud_authority(&self, address: &ManagedAddress) -> bool {
        *address == self.blockchain().get_owner_address()
            || *address == self.fraud_authority().get()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<BigUint, u64, ManagedAddress> {
        (
            self.submission_fee().get(),
            self.voting_period().get(),
            self.fraud_authority().get(),
        )
            .into()
    }

    #[view(getSubmissionFee)]
    #[storage_mapper("submissionFee")]
    fn submission_fee(&self) -> SingleValueMapper<BigUint>;

    /// Seconds a claim stays open for voting
    #[view(getVotingPeriod)]
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[view(getFraudAuthority)]
    #[storage_mapper("fraudAuthority")]
    fn fraud_authority(&self) -> SingleValueMapper<ManagedAddress>;
}
