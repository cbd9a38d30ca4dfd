// Scenario tests for the vault contract: shares, deposits and withdrawals,
// pause, plugins, roles and the bootstrap hand-off.

mod common;

use common::*;
use multiversx_sc_scenario::{api::DebugApi, imports::*};
use nft_vault::vault_proxy::VaultProxy;
use vault_common::types::Role;

type VaultContract = nft_vault::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> VaultContract = nft_vault::contract_obj;
}

// ============================================================
// Initialization
// ============================================================

#[test]
fn deposit_before_initialize_fails() {
    let mut setup = VaultSetup::deploy();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .deposit()
        .egld(1_000u64)
        .returns(ExpectError(4, "NotInitialized"))
        .run();
}

#[test]
fn initialize_runs_once() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .is_initialized()
        .returns(ExpectValue(true))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .initialize(USER1)
        .returns(ExpectError(4, "AlreadyInitialized"))
        .run();
}

#[test]
fn initialize_requires_admin_and_address() {
    let mut setup = VaultSetup::deploy();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .initialize(GOVERNOR)
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .initialize(ManagedAddress::<StaticApi>::zero())
        .returns(ExpectError(4, "InvalidAddress"))
        .run();
}

// ============================================================
// Deposit / withdraw
// ============================================================

#[test]
fn first_deposit_mints_one_to_one() {
    let mut setup = VaultSetup::new();

    let shares = setup.deposit(USER1, 1_000);
    assert_eq!(shares, BigUint::from(1_000u64));

    setup.check_share_balance(USER1, 1_000);
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .total_contributed()
        .returns(ExpectValue(1_000u64))
        .run();
    setup
        .world
        .check_account(USER1)
        .balance(INITIAL_BALANCE - 1_000);
}

#[test]
fn later_deposits_are_proportional_to_net_asset_value() {
    let mut setup = VaultSetup::new();
    setup.deposit(USER1, 1_000);

    // Profit lands in the vault: 1 000 shares now back 2 000 EGLD.
    setup.send_profit(1_000);

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .preview_deposit(500u64)
        .returns(ExpectValue(250u64))
        .run();

    let shares = setup.deposit(USER2, 500);
    assert_eq!(shares, BigUint::from(250u64));
    setup.check_share_balance(USER2, 250);
}

#[test]
fn withdraw_pays_proportional_share() {
    let mut setup = VaultSetup::new();
    setup.deposit(USER1, 1_000);
    setup.deposit(USER2, 500);
    setup.send_profit(1_500);

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .preview_withdraw(1_000u64)
        .returns(ExpectValue(2_000u64))
        .run();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .withdraw(1_000u64)
        .returns(ExpectValue(2_000u64))
        .run();

    setup.check_share_balance(USER1, 0);
    setup
        .world
        .check_account(USER1)
        .balance(INITIAL_BALANCE + 1_000);
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .get_net_asset_value()
        .returns(ExpectValue(1_000u64))
        .run();
}

#[test]
fn partial_withdraw_returns_share_of_pool() {
    const ONE: u64 = 1_000_000_000_000_000_000;
    let mut setup = VaultSetup::new();
    setup.world.set_egld_balance(USER1, BigUint::<StaticApi>::from(10u128 * ONE as u128));
    setup.world.set_egld_balance(USER2, BigUint::<StaticApi>::from(10u128 * ONE as u128));

    setup.deposit(USER1, ONE);
    setup.deposit(USER2, 2 * ONE);

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .withdraw(ONE / 2)
        .returns(ExpectValue(ONE / 2))
        .run();

    setup.check_share_balance(USER1, ONE / 2);
    setup.check_share_balance(USER2, 2 * ONE);
    setup
        .world
        .check_account(USER1)
        .balance(10 * ONE - ONE / 2);
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .get_net_asset_value()
        .returns(ExpectValue(2 * ONE + ONE / 2))
        .run();
}

#[test]
fn deposit_rejects_zero_and_small_amounts() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .deposit()
        .egld(0u64)
        .returns(ExpectError(4, "ZeroAmount"))
        .run();

    setup
        .world
        .tx()
        .from(GOVERNOR)
        .to(VAULT)
        .typed(VaultProxy)
        .set_min_contribution(100u64)
        .run();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .deposit()
        .egld(99u64)
        .returns(ExpectError(4, "BelowMinContribution"))
        .run();

    setup.deposit(USER1, 100);
    setup.check_share_balance(USER1, 100);
}

#[test]
fn withdraw_rejects_zero_and_excess_shares() {
    let mut setup = VaultSetup::new();
    setup.deposit(USER1, 1_000);

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .withdraw(0u64)
        .returns(ExpectError(4, "ZeroAmount"))
        .run();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .withdraw(1_001u64)
        .returns(ExpectError(4, "InsufficientShares"))
        .run();

    setup.check_share_balance(USER1, 1_000);
}

// ============================================================
// Pause
// ============================================================

#[test]
fn pause_blocks_value_movement() {
    let mut setup = VaultSetup::new();
    setup.deposit(USER1, 1_000);
    setup.deposit(USER2, 500);

    setup.world.tx().from(OWNER).to(VAULT).typed(VaultProxy).pause().run();

    // Every principal is stopped the same way, the admin included.
    for account in [USER1, USER2, OWNER] {
        setup
            .world
            .tx()
            .from(account)
            .to(VAULT)
            .typed(VaultProxy)
            .deposit()
            .egld(1_000u64)
            .returns(ExpectError(4, "Paused"))
            .run();
        setup
            .world
            .tx()
            .from(account)
            .to(VAULT)
            .typed(VaultProxy)
            .withdraw(100u64)
            .returns(ExpectError(4, "Paused"))
            .run();
    }
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .pause()
        .returns(ExpectError(4, "Paused"))
        .run();

    setup.world.tx().from(OWNER).to(VAULT).typed(VaultProxy).unpause().run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .unpause()
        .returns(ExpectError(4, "NotPaused"))
        .run();

    // Both paths are open again for everyone.
    let shares = setup.deposit(USER1, 1_000);
    assert_eq!(shares, BigUint::from(1_000u64));
    let shares = setup.deposit(USER2, 500);
    assert_eq!(shares, BigUint::from(500u64));

    for account in [USER1, USER2] {
        setup
            .world
            .tx()
            .from(account)
            .to(VAULT)
            .typed(VaultProxy)
            .withdraw(100u64)
            .returns(ExpectValue(100u64))
            .run();
    }
    setup.check_share_balance(USER1, 1_900);
    setup.check_share_balance(USER2, 900);
}

#[test]
fn pause_requires_guardian() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .pause()
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .paused()
        .returns(ExpectValue(false))
        .run();
}

// ============================================================
// Plugins
// ============================================================

#[test]
fn plugin_registry_lifecycle() {
    let mut setup = VaultSetup::new();
    setup.deploy_marketplace(0, 0);

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .add_plugin(MARKETPLACE)
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .is_plugin(MARKETPLACE)
        .returns(ExpectValue(true))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .add_plugin(MARKETPLACE)
        .returns(ExpectError(4, "PluginAlreadyAdded"))
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .add_plugin(ManagedAddress::<StaticApi>::zero())
        .returns(ExpectError(4, "InvalidAddress"))
        .run();
    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .add_plugin(USER2)
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .remove_plugin(MARKETPLACE)
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .remove_plugin(MARKETPLACE)
        .returns(ExpectError(4, "PluginNotFound"))
        .run();
}

#[test]
fn call_plugin_only_reaches_registered_plugins() {
    let mut setup = VaultSetup::new();
    setup.deploy_marketplace(0, 0);

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .call_plugin(MARKETPLACE, 0u64, buffer("getOfferPrice"), no_args())
        .returns(ExpectError(4, "PluginNotFound"))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .add_plugin(MARKETPLACE)
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .call_plugin(MARKETPLACE, 1u64, buffer("getOfferPrice"), no_args())
        .returns(ExpectError(4, "InsufficientBalance"))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .call_plugin(MARKETPLACE, 0u64, buffer("getOfferPrice"), no_args())
        .run();
}

// ============================================================
// Access control
// ============================================================

#[test]
fn roles_are_granted_and_revoked_by_admin() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .grant_role(Role::Guardian, USER1)
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .has_role(Role::Guardian, USER1)
        .returns(ExpectValue(true))
        .run();
    setup.world.tx().from(USER1).to(VAULT).typed(VaultProxy).pause().run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .revoke_role(Role::Guardian, USER1)
        .run();
    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .unpause()
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .grant_role(Role::Guardian, USER2)
        .returns(ExpectError(4, "Unauthorized"))
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .grant_role(Role::Guardian, ManagedAddress::<StaticApi>::zero())
        .returns(ExpectError(4, "InvalidAddress"))
        .run();
}

#[test]
fn role_admin_can_be_delegated() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .role_admin(Role::Minter)
        .returns(ExpectValue(Role::DefaultAdmin))
        .run();
    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .set_role_admin(Role::Minter, Role::Governance)
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .set_role_admin(Role::Minter, Role::Governance)
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .role_admin(Role::Minter)
        .returns(ExpectValue(Role::Governance))
        .run();

    // DefaultAdmin no longer administers Minter; the Governance holder does.
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .grant_role(Role::Minter, USER2)
        .returns(ExpectError(4, "Unauthorized"))
        .run();
    setup
        .world
        .tx()
        .from(GOVERNOR)
        .to(VAULT)
        .typed(VaultProxy)
        .grant_role(Role::Minter, USER2)
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .has_role(Role::Minter, USER2)
        .returns(ExpectValue(true))
        .run();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .set_role_admin(Role::DefaultAdmin, Role::Guardian)
        .returns(ExpectError(4, "Unauthorized"))
        .run();
}

#[test]
fn renounce_role_drops_own_membership() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .renounce_role(Role::Curator)
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .has_role(Role::Curator, OWNER)
        .returns(ExpectValue(false))
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .add_plugin(USER1)
        .returns(ExpectError(4, "Unauthorized"))
        .run();
}

#[test]
fn governed_setters_require_governance_role() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .set_vault_uri(buffer("ipfs://owner"))
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup
        .world
        .tx()
        .from(GOVERNOR)
        .to(VAULT)
        .typed(VaultProxy)
        .set_vault_uri(buffer("ipfs://governed"))
        .run();
    setup.check_vault_uri("ipfs://governed");
}

#[test]
fn bootstrap_hands_admin_to_governance() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .complete_bootstrap()
        .run();

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .is_bootstrap_complete()
        .returns(ExpectValue(true))
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .has_role(Role::DefaultAdmin, GOVERNOR)
        .returns(ExpectValue(true))
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .has_role(Role::DefaultAdmin, OWNER)
        .returns(ExpectValue(false))
        .run();

    // The deployer keeps nothing.
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .pause()
        .returns(ExpectError(4, "Unauthorized"))
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .complete_bootstrap()
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    // The admin set is frozen, even for the new admin.
    setup
        .world
        .tx()
        .from(GOVERNOR)
        .to(VAULT)
        .typed(VaultProxy)
        .grant_role(Role::DefaultAdmin, USER1)
        .returns(ExpectError(4, "Unauthorized"))
        .run();
    setup
        .world
        .tx()
        .from(GOVERNOR)
        .to(VAULT)
        .typed(VaultProxy)
        .grant_role(Role::Guardian, USER1)
        .run();
}

// ============================================================
// Share registry
// ============================================================

#[test]
fn mint_and_burn_require_roles() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .mint(USER1, 100u64)
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    setup.mint(USER1, 100);
    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .burn(USER1, 10u64)
        .returns(ExpectError(4, "Unauthorized"))
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .burn(USER1, 101u64)
        .returns(ExpectError(4, "InsufficientBalance"))
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(VAULT)
        .typed(VaultProxy)
        .burn(USER1, 40u64)
        .run();

    setup.check_share_balance(USER1, 60);
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .total_supply()
        .returns(ExpectValue(60u64))
        .run();
}

#[test]
fn transfers_stay_disabled_until_enabled() {
    let mut setup = VaultSetup::new();
    setup.mint(USER1, 100);

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .transfer(USER2, 10u64)
        .returns(ExpectError(4, "TransfersDisabled"))
        .run();

    setup
        .world
        .tx()
        .from(GOVERNOR)
        .to(VAULT)
        .typed(VaultProxy)
        .enable_transfers()
        .run();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .transfer(USER2, 10u64)
        .run();
    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .transfer(USER2, 91u64)
        .returns(ExpectError(4, "InsufficientBalance"))
        .run();

    setup.check_share_balance(USER1, 90);
    setup.check_share_balance(USER2, 10);
}

#[test]
fn shares_confer_no_votes_until_delegated() {
    let mut setup = VaultSetup::new();
    setup.mint(USER1, 100);

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .get_current_votes(USER1)
        .returns(ExpectValue(0u64))
        .run();

    setup.delegate(USER1, USER2);
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .get_current_votes(USER2)
        .returns(ExpectValue(100u64))
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .delegate_of(USER1)
        .returns(ExpectValue(USER2))
        .run();

    setup.delegate(USER1, USER1);
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .get_current_votes(USER2)
        .returns(ExpectValue(0u64))
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .get_current_votes(USER1)
        .returns(ExpectValue(100u64))
        .run();
}

#[test]
fn checkpoints_keep_exact_history() {
    let mut setup = VaultSetup::new();

    setup.mint(USER1, 100);
    setup.delegate(USER1, USER1);
    setup.delegate(USER2, USER2);
    setup
        .world
        .tx()
        .from(GOVERNOR)
        .to(VAULT)
        .typed(VaultProxy)
        .enable_transfers()
        .run();

    setup.set_block(3);
    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .transfer(USER2, 40u64)
        .run();

    setup.set_block(5);
    setup.mint(USER1, 20);

    setup.check_votes(USER1, 1, 100);
    setup.check_votes(USER1, 2, 100);
    setup.check_votes(USER1, 3, 60);
    setup.check_votes(USER1, 4, 60);
    setup.check_votes(USER1, 5, 80);
    setup.check_votes(USER2, 2, 0);
    setup.check_votes(USER2, 3, 40);

    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .get_past_total_supply(4u64)
        .returns(ExpectValue(100u64))
        .run();
    setup
        .world
        .query()
        .to(VAULT)
        .typed(VaultProxy)
        .num_checkpoints(USER1)
        .returns(ExpectValue(3usize))
        .run();
}

#[test]
fn vote_lookup_in_the_future_fails() {
    let mut setup = VaultSetup::new();

    setup
        .world
        .tx()
        .from(USER1)
        .to(VAULT)
        .typed(VaultProxy)
        .get_votes(USER1, 2u64)
        .returns(ExpectError(4, "FutureLookup"))
        .run();
}
