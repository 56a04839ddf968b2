multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_STAKE_LOCKED, ERR_ZERO_AMOUNT};

#[multiversx_sc::module]
pub trait StakeLedgerModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: deposit
    // Stake EGLD to gain voting weight. First deposit makes the
    // caller a member.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount > 0u64, ERR_ZERO_AMOUNT);

        self.stake(&caller).update(|s| *s += &payment_amount);
        self.total_staked().update(|ts| *ts += &payment_amount);
        self.members().insert(caller.clone());

        let new_stake = self.stake(&caller).get();
        self.deposit_event(&caller, &payment_amount, &new_stake);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Votes keep the weight snapshotted at cast time. While any
    // window the member voted in is open, the stake may not drop
    // below the largest weight cast into those windows, so it
    // remains burnable. Stake above that weight is free.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let current = self.stake(&caller).get();
        require!(amount <= current, ERR_INSUFFICIENT_BALANCE);

        let new_stake = &current - &amount;
        let now = self.blockchain().get_block_timestamp();
        if now <= self.stake_locked_until(&caller).get() {
            require!(
                new_stake >= self.stake_locked_weight(&caller).get(),
                ERR_STAKE_LOCKED
            );
        }

        self.stake(&caller).set(&new_stake);
        self.total_staked().update(|ts| *ts -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.withdraw_event(&caller, &amount, &new_stake);
    }

    // ========================================================
    // INTERNAL: burn
    // Only reachable from the fraud engine. Clamps to the
    // available balance and returns what was actually burned.
    // Burned EGLD stays in the contract, tracked in totalBurned.
    // ========================================================

    fn burn_stake(&self, member: &ManagedAddress, amount: &BigUint) -> BigUint {
        let current = self.stake(member).get();
        let burned = if *amount > current {
            current.clone()
        } else {
            amount.clone()
        };

        if burned > 0u64 {
            self.stake(member).set(&current - &burned);
            self.total_staked().update(|ts| *ts -= &burned);
            self.total_burned().update(|tb| *tb += &burned);
        }

        self.stake_burned_event(member, amount, &burned);
        burned
    }

    /// Locks `weight` of the member's stake until `until`. An expired lock is
    /// replaced; a live one keeps the larger weight and the later end.
    fn lock_stake(&self, member: &ManagedAddress, until: u64, weight: &BigUint) {
        if *weight == 0u64 {
            return;
        }

        let now = self.blockchain().get_block_timestamp();
        let locked_until = self.stake_locked_until(member).get();
        if now > locked_until {
            self.stake_locked_weight(member).set(weight);
        } else {
            self.stake_locked_weight(member).update(|locked| {
                if *weight > *locked {
                    *locked = weight.clone();
                }
            });
        }
        if until > locked_until {
            self.stake_locked_until(member).set(until);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getStake)]
    fn get_stake(&self, member: &ManagedAddress) -> BigUint {
        self.stake(member).get()
    }

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> usize {
        self.members().len()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("stake")]
    fn stake(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalBurned)]
    #[storage_mapper("totalBurned")]
    fn total_burned(&self) -> SingleValueMapper<BigUint>;

    /// Latest voting_end among the member's weighted votes
    #[view(getStakeLockedUntil)]
    #[storage_mapper("stakeLockedUntil")]
    fn stake_locked_until(&self, member: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Largest vote weight cast since the lock last expired
    #[view(getStakeLockedWeight)]
    #[storage_mapper("stakeLockedWeight")]
    fn stake_locked_weight(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
