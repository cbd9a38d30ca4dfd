multiversx_sc::imports!();

use crate::types::Checkpoint;
use vault_common::{
    access_control,
    errors::{
        ERR_FUTURE_LOOKUP, ERR_INSUFFICIENT_BALANCE, ERR_INVALID_ADDRESS, ERR_TRANSFERS_DISABLED,
        ERR_ZERO_AMOUNT,
    },
    types::Role,
};

/// Share ledger with delegated voting weight.
///
/// Holding shares confers no voting weight until the holder delegates, to
/// itself or to someone else. Every change of a delegate's weight and of the
/// total supply is appended to a per-block checkpoint history, so
/// governance can read the exact weight at any past block.
#[multiversx_sc::module]
pub trait ShareRegistryModule: access_control::AccessControlModule {
    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_role(Role::Minter);
        require!(!to.is_zero(), ERR_INVALID_ADDRESS);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.mint_shares(&to, &amount);
    }

    #[endpoint(burn)]
    fn burn(&self, from: ManagedAddress, amount: BigUint) {
        self.require_role(Role::Burner);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.burn_shares(&from, &amount);
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        require!(self.transfers_enabled().get(), ERR_TRANSFERS_DISABLED);
        require!(!to.is_zero(), ERR_INVALID_ADDRESS);

        let caller = self.blockchain().get_caller();
        self.move_shares(&caller, &to, &amount);
    }

    /// One-way switch: share transfers cannot be disabled again.
    #[endpoint(enableTransfers)]
    fn enable_transfers(&self) {
        self.require_role(Role::Governance);
        if !self.transfers_enabled().get() {
            self.transfers_enabled().set(true);
            self.transfers_enabled_event(&self.blockchain().get_caller());
        }
    }

    #[endpoint(delegate)]
    fn delegate(&self, delegatee: ManagedAddress) {
        let delegator = self.blockchain().get_caller();
        let previous = self.delegate_of(&delegator);
        self.delegatee(&delegator).set(&delegatee);
        self.delegate_changed_event(&delegator, &previous, &delegatee);

        let balance = self.share_balance(&delegator).get();
        self.move_delegate_votes(&previous, &delegatee, &balance);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(delegates)]
    fn delegate_of(&self, account: &ManagedAddress) -> ManagedAddress {
        let mapper = self.delegatee(account);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    /// Voting weight of `account` at the end of `block`.
    #[view(getVotes)]
    fn get_votes(&self, account: &ManagedAddress, block: u64) -> BigUint {
        require!(
            block <= self.blockchain().get_block_nonce(),
            ERR_FUTURE_LOOKUP
        );
        self.checkpoint_at(&self.vote_checkpoints(account), block)
    }

    #[view(getCurrentVotes)]
    fn get_current_votes(&self, account: &ManagedAddress) -> BigUint {
        self.latest_checkpoint(&self.vote_checkpoints(account))
    }

    #[view(getPastTotalSupply)]
    fn get_past_total_supply(&self, block: u64) -> BigUint {
        require!(
            block <= self.blockchain().get_block_nonce(),
            ERR_FUTURE_LOOKUP
        );
        self.checkpoint_at(&self.supply_checkpoints(), block)
    }

    #[view(numCheckpoints)]
    fn num_checkpoints(&self, account: &ManagedAddress) -> usize {
        self.vote_checkpoints(account).len()
    }

    // ========================================================
    // INTERNAL: ledger mutations
    // ========================================================

    fn mint_shares(&self, to: &ManagedAddress, amount: &BigUint) {
        self.share_balance(to).update(|balance| *balance += amount);
        let supply = self.total_supply().update(|supply| {
            *supply += amount;
            supply.clone()
        });
        self.write_checkpoint(self.supply_checkpoints(), &supply);

        self.move_delegate_votes(&ManagedAddress::zero(), &self.delegate_of(to), amount);
        self.shares_transferred_event(&ManagedAddress::zero(), to, amount);
    }

    fn burn_shares(&self, from: &ManagedAddress, amount: &BigUint) {
        let balance = self.share_balance(from).get();
        require!(*amount <= balance, ERR_INSUFFICIENT_BALANCE);

        self.share_balance(from).set(&(&balance - amount));
        let supply = self.total_supply().update(|supply| {
            *supply -= amount;
            supply.clone()
        });
        self.write_checkpoint(self.supply_checkpoints(), &supply);

        self.move_delegate_votes(&self.delegate_of(from), &ManagedAddress::zero(), amount);
        self.shares_transferred_event(from, &ManagedAddress::zero(), amount);
    }

    fn move_shares(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let balance = self.share_balance(from).get();
        require!(*amount <= balance, ERR_INSUFFICIENT_BALANCE);

        self.share_balance(from).set(&(&balance - amount));
        self.share_balance(to).update(|balance| *balance += amount);

        self.move_delegate_votes(&self.delegate_of(from), &self.delegate_of(to), amount);
        self.shares_transferred_event(from, to, amount);
    }

    // ========================================================
    // INTERNAL: checkpoints
    // ========================================================

    fn move_delegate_votes(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        if from == to || *amount == 0u64 {
            return;
        }

        if !from.is_zero() {
            let current = self.latest_checkpoint(&self.vote_checkpoints(from));
            let votes = &current - amount;
            self.write_checkpoint(self.vote_checkpoints(from), &votes);
            self.delegate_votes_changed_event(from, &votes);
        }

        if !to.is_zero() {
            let current = self.latest_checkpoint(&self.vote_checkpoints(to));
            let votes = &current + amount;
            self.write_checkpoint(self.vote_checkpoints(to), &votes);
            self.delegate_votes_changed_event(to, &votes);
        }
    }

    /// Several changes within one block collapse into a single checkpoint.
    fn write_checkpoint(
        &self,
        mut checkpoints: VecMapper<Self::Api, Checkpoint<Self::Api>>,
        value: &BigUint,
    ) {
        let block = self.blockchain().get_block_nonce();
        let len = checkpoints.len();
        if len > 0 {
            let mut last = checkpoints.get(len);
            if last.block == block {
                last.value = value.clone();
                checkpoints.set(len, &last);
                return;
            }
        }

        checkpoints.push(&Checkpoint {
            block,
            value: value.clone(),
        });
    }

    fn latest_checkpoint(
        &self,
        checkpoints: &VecMapper<Self::Api, Checkpoint<Self::Api>>,
    ) -> BigUint {
        let len = checkpoints.len();
        if len == 0 {
            return BigUint::zero();
        }
        checkpoints.get(len).value
    }

    /// Binary search for the last checkpoint at or before `block`.
    fn checkpoint_at(
        &self,
        checkpoints: &VecMapper<Self::Api, Checkpoint<Self::Api>>,
        block: u64,
    ) -> BigUint {
        // VecMapper indexes start at 1; `low` converges on the first
        // checkpoint recorded after `block`.
        let mut low = 1usize;
        let mut high = checkpoints.len() + 1;
        while low < high {
            let mid = low + (high - low) / 2;
            if checkpoints.get(mid).block > block {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        if low == 1 {
            BigUint::zero()
        } else {
            checkpoints.get(low - 1).value
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("sharesTransferred")]
    fn shares_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("delegateChanged")]
    fn delegate_changed_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] from_delegate: &ManagedAddress,
        to_delegate: &ManagedAddress,
    );

    #[event("delegateVotesChanged")]
    fn delegate_votes_changed_event(&self, #[indexed] delegate: &ManagedAddress, votes: &BigUint);

    #[event("transfersEnabled")]
    fn transfers_enabled_event(&self, #[indexed] by: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(balanceOf)]
    #[storage_mapper("shareBalance")]
    fn share_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(transfersEnabled)]
    #[storage_mapper("transfersEnabled")]
    fn transfers_enabled(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("delegatee")]
    fn delegatee(&self, account: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("voteCheckpoints")]
    fn vote_checkpoints(&self, account: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;

    #[storage_mapper("supplyCheckpoints")]
    fn supply_checkpoints(&self) -> VecMapper<Checkpoint<Self::Api>>;
}
