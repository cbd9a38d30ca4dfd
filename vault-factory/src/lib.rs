#![no_std]

multiversx_sc::imports!();

pub mod factory_proxy;
pub mod vault_proxy;

use vault_common::{
    errors::{ERR_BELOW_MIN_CONTRIBUTION, ERR_INVALID_ADDRESS},
    types::Role,
};

// ============================================================
// Constants
// ============================================================

/// Roles a fresh vault grants its deployer. The factory passes every one of
/// them to the creator and keeps none.
const CREATOR_ROLES: [Role; 5] = [
    Role::DefaultAdmin,
    Role::Guardian,
    Role::Curator,
    Role::Minter,
    Role::Burner,
];

// ============================================================
// Contract
// ============================================================

/// Deploys vaults as copies of a template contract. The creator's payment
/// seeds the new vault and is credited as shares one to one.
#[multiversx_sc::contract]
pub trait VaultFactory: vault_common::access_control::AccessControlModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, vault_template: ManagedAddress) {
        self.store_template(&vault_template);

        let deployer = self.blockchain().get_caller();
        self.grant_role_internal(Role::DefaultAdmin, &deployer, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createVault
    // ========================================================

    #[endpoint(createVault)]
    #[payable("EGLD")]
    fn create_vault(&self, vault_uri: ManagedBuffer, min_contribution: BigUint) -> ManagedAddress {
        let creator = self.blockchain().get_caller();
        let seed = self.call_value().egld_value().clone_value();
        require!(seed >= min_contribution, ERR_BELOW_MIN_CONTRIBUTION);

        let vault = self
            .tx()
            .typed(vault_proxy::VaultProxy)
            .init(&vault_uri, &min_contribution)
            .from_source(self.vault_template().get())
            .code_metadata(CodeMetadata::PAYABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        if seed > 0u64 {
            self.tx().to(&vault).egld(&seed).transfer();
            self.tx()
                .to(&vault)
                .typed(vault_proxy::VaultProxy)
                .mint(&creator, &seed)
                .sync_call();
        }

        for role in CREATOR_ROLES {
            self.tx()
                .to(&vault)
                .typed(vault_proxy::VaultProxy)
                .grant_role(role, &creator)
                .sync_call();
        }
        for role in CREATOR_ROLES {
            self.tx()
                .to(&vault)
                .typed(vault_proxy::VaultProxy)
                .renounce_role(role)
                .sync_call();
        }

        self.created_vaults().insert(vault.clone());
        self.vault_created_event(&vault, &creator, &seed, &vault_uri);

        vault
    }

    // ========================================================
    // ENDPOINT: setVaultTemplate
    // ========================================================

    #[endpoint(setVaultTemplate)]
    fn set_vault_template(&self, vault_template: ManagedAddress) {
        self.require_role(Role::DefaultAdmin);
        self.store_template(&vault_template);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn store_template(&self, vault_template: &ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(vault_template),
            ERR_INVALID_ADDRESS
        );
        self.vault_template().set(vault_template);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isVault)]
    fn is_vault(&self, address: ManagedAddress) -> bool {
        self.created_vaults().contains(&address)
    }

    #[view(getVaults)]
    fn get_vaults(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for vault in self.created_vaults().iter() {
            result.push(vault);
        }
        result
    }

    #[view(getVaultCount)]
    fn get_vault_count(&self) -> usize {
        self.created_vaults().len()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("vaultCreated")]
    fn vault_created_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] creator: &ManagedAddress,
        #[indexed] seed: &BigUint,
        vault_uri: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getVaultTemplate)]
    #[storage_mapper("vaultTemplate")]
    fn vault_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("createdVaults")]
    fn created_vaults(&self) -> UnorderedSetMapper<ManagedAddress>;
}
