// Vault creation through the factory: template copies, seed shares and the
// role hand-over to the creator.

mod common;

use common::*;
use multiversx_sc_scenario::imports::*;
use nft_vault::vault_proxy::VaultProxy;
use vault_common::types::Role;
use vault_factory::factory_proxy::VaultFactoryProxy;

const CREATED_VAULT: TestSCAddress = TestSCAddress::new("created-vault");
const CREATED_URI: &str = "ipfs://created";
const SEED: u64 = 1_000;

/// The deployed vault serves as the template. The first vault the factory
/// deploys lands at `CREATED_VAULT`.
fn factory_setup() -> VaultSetup {
    let mut setup = VaultSetup::deploy();

    setup
        .world
        .tx()
        .from(OWNER)
        .typed(VaultFactoryProxy)
        .init(VAULT)
        .code(FACTORY_CODE)
        .new_address(FACTORY)
        .run();
    setup.world.new_address(FACTORY, 0, CREATED_VAULT);

    setup
}

fn create_vault(setup: &mut VaultSetup) -> ManagedAddress<StaticApi> {
    setup
        .world
        .tx()
        .from(USER1)
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .create_vault(buffer(CREATED_URI), SEED)
        .egld(SEED)
        .returns(ReturnsResult)
        .run()
}

#[test]
fn create_vault_deploys_seeded_copy() {
    let mut setup = factory_setup();

    let created = create_vault(&mut setup);
    assert_eq!(created, CREATED_VAULT.to_managed_address::<StaticApi>());

    setup
        .world
        .query()
        .to(CREATED_VAULT)
        .typed(VaultProxy)
        .vault_uri()
        .returns(ExpectValue(buffer(CREATED_URI)))
        .run();
    setup
        .world
        .query()
        .to(CREATED_VAULT)
        .typed(VaultProxy)
        .min_contribution()
        .returns(ExpectValue(SEED))
        .run();

    // The seed backs the creator's shares one to one.
    setup.world.check_account(CREATED_VAULT).balance(SEED);
    setup
        .world
        .check_account(USER1)
        .balance(INITIAL_BALANCE - SEED);
    setup
        .world
        .query()
        .to(CREATED_VAULT)
        .typed(VaultProxy)
        .share_balance(USER1)
        .returns(ExpectValue(SEED))
        .run();

    // The template itself is untouched.
    setup.check_vault_uri(VAULT_URI);

    setup
        .world
        .query()
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .is_vault(CREATED_VAULT)
        .returns(ExpectValue(true))
        .run();
    setup
        .world
        .query()
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .get_vault_count()
        .returns(ExpectValue(1usize))
        .run();
}

#[test]
fn creator_holds_every_admin_role() {
    let mut setup = factory_setup();
    create_vault(&mut setup);

    for role in [
        Role::DefaultAdmin,
        Role::Guardian,
        Role::Curator,
        Role::Minter,
        Role::Burner,
    ] {
        setup
            .world
            .query()
            .to(CREATED_VAULT)
            .typed(VaultProxy)
            .has_role(role, USER1)
            .returns(ExpectValue(true))
            .run();
        setup
            .world
            .query()
            .to(CREATED_VAULT)
            .typed(VaultProxy)
            .has_role(role, FACTORY)
            .returns(ExpectValue(false))
            .run();
    }

    // The creator wires governance like any deployer would.
    setup
        .world
        .tx()
        .from(USER1)
        .to(CREATED_VAULT)
        .typed(VaultProxy)
        .initialize(GOVERNOR)
        .run();
    setup
        .world
        .tx()
        .from(USER2)
        .to(CREATED_VAULT)
        .typed(VaultProxy)
        .deposit()
        .egld(SEED)
        .returns(ExpectValue(SEED))
        .run();
}

#[test]
fn create_vault_requires_min_contribution_as_seed() {
    let mut setup = factory_setup();

    setup
        .world
        .tx()
        .from(USER1)
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .create_vault(buffer(CREATED_URI), SEED)
        .egld(SEED - 1)
        .returns(ExpectError(4, "BelowMinContribution"))
        .run();

    setup
        .world
        .query()
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .get_vault_count()
        .returns(ExpectValue(0usize))
        .run();
    setup.world.check_account(USER1).balance(INITIAL_BALANCE);
}

#[test]
fn template_is_admin_controlled() {
    let mut setup = factory_setup();

    setup
        .world
        .tx()
        .from(USER1)
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .set_vault_template(MARKETPLACE)
        .returns(ExpectError(4, "Unauthorized"))
        .run();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .set_vault_template(USER2)
        .returns(ExpectError(4, "InvalidAddress"))
        .run();

    setup
        .world
        .query()
        .to(FACTORY)
        .typed(VaultFactoryProxy)
        .get_vault_template()
        .returns(ExpectValue(VAULT))
        .run();
}
