#![no_std]

multiversx_sc::imports!();

pub mod pause;
pub mod plugins;
pub mod share_registry;
pub mod types;
pub mod vault_proxy;

use vault_common::{
    errors::{
        ERR_ALREADY_INITIALIZED, ERR_BELOW_MIN_CONTRIBUTION, ERR_EXTERNAL_CALL_FAILED,
        ERR_INSOLVENT, ERR_INSUFFICIENT_BALANCE, ERR_INSUFFICIENT_SHARES, ERR_INVALID_ADDRESS,
        ERR_NOT_INITIALIZED, ERR_ZERO_AMOUNT,
    },
    types::{ExternalCall, Role},
};

// ============================================================
// Contract
// ============================================================

/// Pooled EGLD custody owned by its shareholders. Depositors receive shares
/// proportional to the vault's net asset value; the vault trades NFTs on
/// third-party marketplaces and changes its parameters only through role
/// holders, ultimately the governance contract.
#[multiversx_sc::contract]
pub trait NftVault:
    vault_common::access_control::AccessControlModule
    + vault_common::external_call::ExternalCallModule
    + share_registry::ShareRegistryModule
    + pause::PauseModule
    + plugins::PluginsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, vault_uri: ManagedBuffer, min_contribution: BigUint) {
        let deployer = self.blockchain().get_caller();

        self.vault_uri().set(&vault_uri);
        self.min_contribution().set(&min_contribution);
        self.total_contributed().set(BigUint::zero());

        for role in [
            Role::DefaultAdmin,
            Role::Guardian,
            Role::Curator,
            Role::Minter,
            Role::Burner,
        ] {
            self.grant_role_internal(role, &deployer, &deployer);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: initialize
    // Wires the governance contract. Runs exactly once.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(&self, governance: ManagedAddress) {
        self.require_role(Role::DefaultAdmin);
        require!(!self.is_initialized(), ERR_ALREADY_INITIALIZED);
        require!(!governance.is_zero(), ERR_INVALID_ADDRESS);

        let caller = self.blockchain().get_caller();
        self.governance().set(&governance);
        self.grant_role_internal(Role::Governance, &governance, &caller);
        self.grant_role_internal(Role::Curator, &governance, &caller);

        self.vault_initialized_event(&governance);
    }

    // ========================================================
    // ENDPOINT: completeBootstrap
    // Hands DefaultAdmin to governance and strips the deployer.
    // ========================================================

    #[endpoint(completeBootstrap)]
    fn complete_bootstrap_endpoint(&self) {
        self.require_initialized();
        let governance = self.governance().get();
        self.complete_bootstrap(&governance);
    }

    // ========================================================
    // ENDPOINT: deposit
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) -> BigUint {
        self.require_initialized();
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            payment_amount >= self.min_contribution().get(),
            ERR_BELOW_MIN_CONTRIBUTION
        );

        // The payment is already part of the balance at this point.
        let assets_before = &self.net_asset_value() - &payment_amount;
        let shares_to_mint = self.shares_for_deposit(&payment_amount, &assets_before);
        require!(shares_to_mint > 0u64, ERR_ZERO_AMOUNT);

        self.mint_shares(&caller, &shares_to_mint);
        self.total_contributed()
            .update(|total| *total += &payment_amount);

        self.deposited_event(&caller, &payment_amount, &shares_to_mint);

        shares_to_mint
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Burns shares, then pays out the proportional EGLD.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, share_amount: BigUint) -> BigUint {
        self.require_initialized();
        self.require_not_paused();
        require!(share_amount > 0u64, ERR_ZERO_AMOUNT);

        let caller = self.blockchain().get_caller();
        require!(
            share_amount <= self.share_balance(&caller).get(),
            ERR_INSUFFICIENT_SHARES
        );

        // Supply and balance are read before the burn.
        let payout = self.payout_for_shares(&share_amount);

        self.burn_shares(&caller, &share_amount);
        self.withdrawn_event(&caller, &payout, &share_amount);

        self.send().direct_non_zero_egld(&caller, &payout);

        payout
    }

    // ========================================================
    // ENDPOINT: buyNft
    // Pays `price` EGLD into a marketplace call.
    // ========================================================

    #[endpoint(buyNft)]
    fn buy_nft(
        &self,
        marketplace: ManagedAddress,
        price: BigUint,
        endpoint: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) {
        self.require_role(Role::Curator);
        self.require_initialized();
        self.require_not_paused();
        require!(price <= self.net_asset_value(), ERR_INSUFFICIENT_BALANCE);

        let call = ExternalCall {
            target: marketplace,
            value: price,
            endpoint,
            arguments: arguments.to_vec(),
        };

        self.nft_bought_event(&call.target, &call.value);
        self.dispatch_external_call(&call);
    }

    // ========================================================
    // ENDPOINT: sellNft
    // Sends one NFT with the marketplace call; the vault must
    // end up at least `price` EGLD richer.
    // ========================================================

    #[endpoint(sellNft)]
    fn sell_nft(
        &self,
        nft_token: TokenIdentifier,
        nft_nonce: u64,
        marketplace: ManagedAddress,
        price: BigUint,
        endpoint: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) {
        self.require_role(Role::Curator);
        self.require_initialized();
        self.require_not_paused();
        self.require_callable_target(&marketplace);

        let balance_before = self.net_asset_value();
        self.nft_sold_event(&nft_token, nft_nonce, &marketplace, &price);

        self.tx()
            .to(&marketplace)
            .single_esdt(&nft_token, nft_nonce, &BigUint::from(1u64))
            .raw_call(endpoint)
            .arguments_raw(ManagedArgBuffer::from(arguments.to_vec()))
            .sync_call();

        require!(
            self.net_asset_value() >= &balance_before + &price,
            ERR_EXTERNAL_CALL_FAILED
        );
    }

    // ========================================================
    // ENDPOINTS: governed parameters
    // ========================================================

    #[endpoint(setVaultUri)]
    fn set_vault_uri(&self, vault_uri: ManagedBuffer) {
        self.require_role(Role::Governance);
        self.vault_uri().set(&vault_uri);
        self.vault_uri_updated_event(&vault_uri);
    }

    #[endpoint(setMinContribution)]
    fn set_min_contribution(&self, min_contribution: BigUint) {
        self.require_role(Role::Governance);
        self.min_contribution().set(&min_contribution);
        self.min_contribution_updated_event(&min_contribution);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_initialized(&self) {
        require!(self.is_initialized(), ERR_NOT_INITIALIZED);
    }

    fn net_asset_value(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// 1:1 while no shares exist, otherwise proportional to the assets held
    /// before the deposit.
    fn shares_for_deposit(&self, amount: &BigUint, assets_before: &BigUint) -> BigUint {
        let total_supply = self.total_supply().get();
        if total_supply == 0u64 {
            return amount.clone();
        }

        require!(*assets_before > 0u64, ERR_INSOLVENT);
        &(amount * &total_supply) / assets_before
    }

    fn payout_for_shares(&self, share_amount: &BigUint) -> BigUint {
        let total_supply = self.total_supply().get();
        if total_supply == 0u64 {
            return BigUint::zero();
        }

        &(share_amount * &self.net_asset_value()) / &total_supply
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isInitialized)]
    fn is_initialized(&self) -> bool {
        !self.governance().is_empty()
    }

    #[view(getNetAssetValue)]
    fn get_net_asset_value(&self) -> BigUint {
        self.net_asset_value()
    }

    #[view(previewDeposit)]
    fn preview_deposit(&self, amount: BigUint) -> BigUint {
        self.shares_for_deposit(&amount, &self.net_asset_value())
    }

    #[view(previewWithdraw)]
    fn preview_withdraw(&self, share_amount: BigUint) -> BigUint {
        self.payout_for_shares(&share_amount)
    }

    #[view(getVaultConfig)]
    fn get_vault_config(&self) -> MultiValue4<ManagedBuffer, BigUint, BigUint, bool> {
        let uri = self.vault_uri().get();
        let min_contribution = self.min_contribution().get();
        let total_contributed = self.total_contributed().get();
        let paused = self.paused().get();
        (uri, min_contribution, total_contributed, paused).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("vaultInitialized")]
    fn vault_initialized_event(&self, #[indexed] governance: &ManagedAddress);

    #[event("deposited")]
    fn deposited_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        shares: &BigUint,
    );

    #[event("withdrawn")]
    fn withdrawn_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        shares: &BigUint,
    );

    #[event("nftBought")]
    fn nft_bought_event(&self, #[indexed] marketplace: &ManagedAddress, price: &BigUint);

    #[event("nftSold")]
    fn nft_sold_event(
        &self,
        #[indexed] nft_token: &TokenIdentifier,
        #[indexed] nft_nonce: u64,
        #[indexed] marketplace: &ManagedAddress,
        price: &BigUint,
    );

    #[event("vaultUriUpdated")]
    fn vault_uri_updated_event(&self, vault_uri: &ManagedBuffer);

    #[event("minContributionUpdated")]
    fn min_contribution_updated_event(&self, min_contribution: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getVaultUri)]
    #[storage_mapper("vaultUri")]
    fn vault_uri(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getMinContribution)]
    #[storage_mapper("minContribution")]
    fn min_contribution(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalContributed)]
    #[storage_mapper("totalContributed")]
    fn total_contributed(&self) -> SingleValueMapper<BigUint>;

    #[view(getGovernance)]
    #[storage_mapper("governance")]
    fn governance(&self) -> SingleValueMapper<ManagedAddress>;
}
