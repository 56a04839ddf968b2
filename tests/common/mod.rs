#![allow(dead_code)]

use claims_ledger::{
    claims::ClaimRegistryModule,
    fraud::FraudBurnModule,
    merkle::MerkleModule,
    stake::StakeLedgerModule,
    types::{ClaimStatus, Verdict},
    views::DisplayModule,
    voting::VotingModule,
    ClaimsLedger,
};
use multiversx_sc::{
    contract_base::ContractBase,
    types::{Address, ManagedBuffer, ManagedByteArray, ManagedVec},
};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, rust_biguint,
    whitebox_legacy::{BlockchainStateWrapper, ContractObjWrapper, TxResult},
    DebugApi,
};

pub const WASM_PATH: &str = "output/claims-ledger.wasm";

pub const SUBMISSION_FEE: u64 = 1_000;
pub const VOTING_PERIOD: u64 = 3 * 86_400;
pub const START_TIME: u64 = 1_700_000_000;
pub const COVER_ID: u64 = 7;
pub const COVER_START: u64 = START_TIME - 86_400;
pub const COVER_END: u64 = START_TIME + 365 * 86_400;
pub const CLAIM_AMOUNT: u64 = 50_000;
pub const ACCOUNT_BALANCE: u64 = 1_000_000_000;

pub type Hash = [u8; 32];

/// Plain-value copy of a `BurnReport`, readable outside the VM context.
#[derive(Clone, Debug, PartialEq)]
pub struct BurnOutcome {
    pub first_vote_index: u64,
    pub last_vote_index: u64,
    pub tally_burned: u64,
    pub tally_shortfall: u64,
    pub stake_burned: u64,
    pub stake_shortfall: u64,
    pub completed: bool,
}

/// Plain-value copy of the parts of a claim the tests compare.
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimSnapshot {
    pub id: u64,
    pub accepted: u64,
    pub denied: u64,
    pub status: ClaimStatus,
    pub burn_adjusted: bool,
}

/// Fraud accusation as the authority computes it off-chain.
#[derive(Clone, Debug)]
pub struct Accusation {
    pub member: Address,
    pub last_vote_index: u64,
    pub burn_amount: u64,
    pub fraud_count: u16,
}

pub struct LedgerSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> claims_ledger::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub authority: Address,
    pub claimant: Address,
    pub contract: ContractObjWrapper<claims_ledger::ContractObj<DebugApi>, ContractObjBuilder>,
    pub now: u64,
}

impl<ContractObjBuilder> LedgerSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> claims_ledger::ContractObj<DebugApi>,
{
    pub fn new(builder: ContractObjBuilder) -> Self {
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_biguint!(ACCOUNT_BALANCE));
        let authority = b_mock.create_user_account(&rust_biguint!(0));
        let claimant = b_mock.create_user_account(&rust_biguint!(ACCOUNT_BALANCE));
        let contract =
            b_mock.create_sc_account(&rust_biguint!(0), Some(&owner), builder, WASM_PATH);

        b_mock.set_block_timestamp(START_TIME);
        b_mock
            .execute_tx(&owner, &contract, &rust_biguint!(0), |sc| {
                sc.init(
                    managed_biguint!(SUBMISSION_FEE),
                    VOTING_PERIOD,
                    managed_address!(&authority),
                );
            })
            .assert_ok();

        LedgerSetup {
            b_mock,
            owner,
            authority,
            claimant,
            contract,
            now: START_TIME,
        }
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.now += seconds;
        self.b_mock.set_block_timestamp(self.now);
    }

    pub fn end_voting_period(&mut self) {
        self.advance_time(VOTING_PERIOD + 1);
    }

    // ── Stake ──

    /// Creates an account and stakes `stake` from it (nothing if zero).
    pub fn new_member(&mut self, stake: u64) -> Address {
        let member = self
            .b_mock
            .create_user_account(&rust_biguint!(ACCOUNT_BALANCE));
        if stake > 0 {
            self.deposit(&member, stake).assert_ok();
        }
        member
    }

    pub fn deposit(&mut self, member: &Address, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(member, &self.contract, &rust_biguint!(amount), |sc| {
                sc.deposit();
            })
    }

    pub fn withdraw(&mut self, member: &Address, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(member, &self.contract, &rust_biguint!(0), |sc| {
                sc.withdraw(managed_biguint!(amount));
            })
    }

    pub fn stake_of(&mut self, member: &Address) -> u64 {
        let mut stake = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                stake = sc.get_stake(&managed_address!(member)).to_u64().unwrap();
            })
            .assert_ok();
        stake
    }

    pub fn total_burned(&mut self) -> u64 {
        let mut burned = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                burned = sc.total_burned().get().to_u64().unwrap();
            })
            .assert_ok();
        burned
    }

    // ── Claims ──

    pub fn try_submit_claim(&mut self, claimant: &Address, fee: u64) -> TxResult {
        self.b_mock
            .execute_tx(claimant, &self.contract, &rust_biguint!(fee), |sc| {
                sc.submit_claim(
                    COVER_ID,
                    managed_biguint!(CLAIM_AMOUNT),
                    COVER_START,
                    COVER_END,
                );
            })
    }

    pub fn submit_claim(&mut self) -> u64 {
        let claimant = self.claimant.clone();
        let mut claim_id = 0u64;
        self.b_mock
            .execute_tx(
                &claimant,
                &self.contract,
                &rust_biguint!(SUBMISSION_FEE),
                |sc| {
                    claim_id = sc.submit_claim(
                        COVER_ID,
                        managed_biguint!(CLAIM_AMOUNT),
                        COVER_START,
                        COVER_END,
                    );
                },
            )
            .assert_ok();
        claim_id
    }

    pub fn close_claim(&mut self, claim_id: u64) -> TxResult {
        let caller = self.owner.clone();
        self.b_mock
            .execute_tx(&caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.close_claim(claim_id);
            })
    }

    pub fn claim(&mut self, claim_id: u64) -> ClaimSnapshot {
        let mut snapshot = None;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                let claim = sc.get_claim(claim_id);
                snapshot = Some(ClaimSnapshot {
                    id: claim.id,
                    accepted: claim.poll.accepted.to_u64().unwrap(),
                    denied: claim.poll.denied.to_u64().unwrap(),
                    status: claim.status,
                    burn_adjusted: claim.burn_adjusted,
                });
            })
            .assert_ok();
        snapshot.unwrap()
    }

    /// Snapshot of every claim through the display page view.
    pub fn claims_page(&mut self, start: u64, end: u64) -> Vec<ClaimSnapshot> {
        let mut page = Vec::new();
        self.b_mock
            .execute_query(&self.contract, |sc| {
                for view in sc.get_claims_page(start, end).into_iter() {
                    page.push(ClaimSnapshot {
                        id: view.id,
                        accepted: view.accepted.to_u64().unwrap(),
                        denied: view.denied.to_u64().unwrap(),
                        status: view.status,
                        burn_adjusted: view.burn_adjusted,
                    });
                }
            })
            .assert_ok();
        page
    }

    // ── Voting ──

    pub fn cast_vote(&mut self, voter: &Address, claim_id: u64, verdict: Verdict) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.contract, &rust_biguint!(0), |sc| {
                sc.cast_vote(claim_id, verdict);
            })
    }

    pub fn vote_count(&mut self, member: &Address) -> u64 {
        let mut count = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                count = sc.get_member_vote_count(&managed_address!(member));
            })
            .assert_ok();
        count
    }

    // ── Fraud ──

    pub fn keccak(&mut self, bytes: &[u8]) -> Hash {
        let mut hash = [0u8; 32];
        self.b_mock
            .execute_query(&self.contract, |sc| {
                hash = sc
                    .crypto()
                    .keccak256(&ManagedBuffer::<DebugApi>::new_from_bytes(bytes))
                    .to_byte_array();
            })
            .assert_ok();
        hash
    }

    pub fn fraud_leaf(&mut self, accusation: &Accusation) -> Hash {
        let mut leaf = [0u8; 32];
        self.b_mock
            .execute_query(&self.contract, |sc| {
                leaf = sc
                    .fraud_leaf(
                        &managed_address!(&accusation.member),
                        accusation.last_vote_index,
                        &managed_biguint!(accusation.burn_amount),
                        accusation.fraud_count,
                    )
                    .to_byte_array();
            })
            .assert_ok();
        leaf
    }

    pub fn hash_pair(&mut self, a: &Hash, b: &Hash) -> Hash {
        let mut concatenated = Vec::with_capacity(64);
        if a <= b {
            concatenated.extend_from_slice(a);
            concatenated.extend_from_slice(b);
        } else {
            concatenated.extend_from_slice(b);
            concatenated.extend_from_slice(a);
        }
        self.keccak(&concatenated)
    }

    /// Builds a sorted-pair tree over the accusations. An unpaired node is
    /// promoted to the next level unchanged. Returns the root and one proof
    /// per accusation, in input order.
    pub fn build_fraud_tree(&mut self, accusations: &[Accusation]) -> (Hash, Vec<Vec<Hash>>) {
        let mut level: Vec<Hash> = accusations.iter().map(|a| self.fraud_leaf(a)).collect();
        let mut positions: Vec<usize> = (0..level.len()).collect();
        let mut proofs: Vec<Vec<Hash>> = vec![Vec::new(); level.len()];

        while level.len() > 1 {
            for (proof, position) in proofs.iter_mut().zip(positions.iter_mut()) {
                let sibling = *position ^ 1;
                if sibling < level.len() {
                    proof.push(level[sibling]);
                }
                *position /= 2;
            }

            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for pair in level.chunks(2) {
                if pair.len() == 2 {
                    next.push(self.hash_pair(&pair[0], &pair[1]));
                } else {
                    next.push(pair[0]);
                }
            }
            level = next;
        }

        (level[0], proofs)
    }

    pub fn try_submit_fraud_batch(&mut self, caller: &Address, root: &Hash) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.submit_fraud_batch(ManagedByteArray::new_from_bytes(root));
            })
    }

    pub fn submit_fraud_batch(&mut self, root: &Hash) -> u64 {
        let authority = self.authority.clone();
        let mut round_id = 0u64;
        self.b_mock
            .execute_tx(&authority, &self.contract, &rust_biguint!(0), |sc| {
                round_id = sc.submit_fraud_batch(ManagedByteArray::new_from_bytes(root));
            })
            .assert_ok();
        round_id
    }

    pub fn burn_fraud(
        &mut self,
        round_id: u64,
        proof: &[Hash],
        accusation: &Accusation,
        batch_size: u64,
    ) -> (TxResult, Option<BurnOutcome>) {
        let caller = self.authority.clone();
        let mut outcome = None;
        let result = self
            .b_mock
            .execute_tx(&caller, &self.contract, &rust_biguint!(0), |sc| {
                let mut managed_proof = ManagedVec::new();
                for node in proof {
                    managed_proof.push(ManagedByteArray::new_from_bytes(node));
                }

                let report = sc.burn_fraud(
                    round_id,
                    managed_proof,
                    managed_address!(&accusation.member),
                    accusation.last_vote_index,
                    managed_biguint!(accusation.burn_amount),
                    accusation.fraud_count,
                    batch_size,
                );
                outcome = Some(BurnOutcome {
                    first_vote_index: report.first_vote_index,
                    last_vote_index: report.last_vote_index,
                    tally_burned: report.tally_burned.to_u64().unwrap(),
                    tally_shortfall: report.tally_shortfall.to_u64().unwrap(),
                    stake_burned: report.stake_burned.to_u64().unwrap(),
                    stake_shortfall: report.stake_shortfall.to_u64().unwrap(),
                    completed: report.completed,
                });
            });
        (result, outcome)
    }

    /// Runs `burnFraud` until the accusation completes, returning every outcome.
    pub fn burn_fraud_to_completion(
        &mut self,
        round_id: u64,
        proof: &[Hash],
        accusation: &Accusation,
        batch_size: u64,
    ) -> Vec<BurnOutcome> {
        let mut outcomes = Vec::new();
        loop {
            let (result, outcome) = self.burn_fraud(round_id, proof, accusation, batch_size);
            result.assert_ok();
            let outcome = outcome.unwrap();
            let completed = outcome.completed;
            outcomes.push(outcome);
            if completed {
                return outcomes;
            }
        }
    }

    /// (next vote index, burned amount, fraud count)
    pub fn fraud_record(&mut self, member: &Address) -> (u64, u64, u64) {
        let mut record = (0u64, 0u64, 0u64);
        self.b_mock
            .execute_query(&self.contract, |sc| {
                let r = sc.get_fraud_record(&managed_address!(member));
                record = (
                    r.next_vote_index,
                    r.burned_amount.to_u64().unwrap(),
                    r.fraud_count,
                );
            })
            .assert_ok();
        record
    }
}
