multiversx_sc::imports!();

use vault_common::{
    access_control,
    errors::{ERR_NOT_PAUSED, ERR_PAUSED},
    types::Role,
};

/// Guardian-controlled circuit breaker. Value-moving endpoints call
/// `require_not_paused`; administration keeps working while paused.
#[multiversx_sc::module]
pub trait PauseModule: access_control::AccessControlModule {
    #[endpoint(pause)]
    fn pause(&self) {
        self.require_role(Role::Guardian);
        self.require_not_paused();

        self.paused().set(true);
        self.vault_paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_role(Role::Guardian);
        require!(self.paused().get(), ERR_NOT_PAUSED);

        self.paused().set(false);
        self.vault_unpaused_event(&self.blockchain().get_caller());
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    #[event("vaultPaused")]
    fn vault_paused_event(&self, #[indexed] by: &ManagedAddress);

    #[event("vaultUnpaused")]
    fn vault_unpaused_event(&self, #[indexed] by: &ManagedAddress);

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
