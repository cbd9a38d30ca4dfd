multiversx_sc::imports!();

use crate::{
    errors::{ERR_ALREADY_INITIALIZED, ERR_INVALID_ADDRESS, ERR_UNAUTHORIZED},
    types::Role,
};

/// Role membership store. Each role is administered by its admin role
/// (`DefaultAdmin` unless changed). A failed check always reports
/// `Unauthorized`, whatever role was missing.
#[multiversx_sc::module]
pub trait AccessControlModule {
    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_role_admin(role, &caller);
        require!(!account.is_zero(), ERR_INVALID_ADDRESS);

        // The admin set is frozen after the bootstrap hand-off.
        if role == Role::DefaultAdmin {
            require!(!self.bootstrap_complete().get(), ERR_UNAUTHORIZED);
        }

        self.grant_role_internal(role, &account, &caller);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_role_admin(role, &caller);
        self.revoke_role_internal(role, &account, &caller);
    }

    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        self.revoke_role_internal(role, &caller, &caller);
    }

    /// Hands administration of `role` to holders of `admin_role`.
    /// `DefaultAdmin` always administers itself.
    #[endpoint(setRoleAdmin)]
    fn set_role_admin(&self, role: Role, admin_role: Role) {
        self.require_role(Role::DefaultAdmin);
        require!(role != Role::DefaultAdmin, ERR_UNAUTHORIZED);

        let previous_admin_role = self.role_admin(role).get();
        self.role_admin(role).set(admin_role);
        self.role_admin_changed_event(role, previous_admin_role, admin_role);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }

    #[view(isBootstrapComplete)]
    fn is_bootstrap_complete(&self) -> bool {
        self.bootstrap_complete().get()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(role, &caller), ERR_UNAUTHORIZED);
    }

    fn require_role_admin(&self, role: Role, caller: &ManagedAddress) {
        let admin_role = self.role_admin(role).get();
        require!(self.has_role(admin_role, caller), ERR_UNAUTHORIZED);
    }

    fn grant_role_internal(&self, role: Role, account: &ManagedAddress, sender: &ManagedAddress) {
        if self.role_members(role).insert(account.clone()) {
            self.role_granted_event(role, account, sender);
        }
    }

    fn revoke_role_internal(&self, role: Role, account: &ManagedAddress, sender: &ManagedAddress) {
        if self.role_members(role).swap_remove(account) {
            self.role_revoked_event(role, account, sender);
        }
    }

    /// One-shot hand-off of `DefaultAdmin` to `successor`. The caller loses
    /// every role it holds, every other admin is removed, and no later call
    /// can grant `DefaultAdmin` again.
    fn complete_bootstrap(&self, successor: &ManagedAddress) {
        let previous_admin = self.blockchain().get_caller();
        self.require_role(Role::DefaultAdmin);
        require!(!self.bootstrap_complete().get(), ERR_ALREADY_INITIALIZED);
        require!(!successor.is_zero(), ERR_INVALID_ADDRESS);

        self.grant_role_internal(Role::DefaultAdmin, successor, &previous_admin);

        let mut stale_admins: ManagedVec<ManagedAddress> = ManagedVec::new();
        for admin in self.role_members(Role::DefaultAdmin).iter() {
            if &admin != successor {
                stale_admins.push(admin);
            }
        }
        for admin in stale_admins.iter() {
            self.revoke_role_internal(Role::DefaultAdmin, &admin, &previous_admin);
        }

        if &previous_admin != successor {
            for role in Role::ALL {
                self.revoke_role_internal(role, &previous_admin, &previous_admin);
            }
        }

        self.bootstrap_complete().set(true);
        self.bootstrap_completed_event(successor, &previous_admin);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("roleGranted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    #[event("roleRevoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    #[event("roleAdminChanged")]
    fn role_admin_changed_event(
        &self,
        #[indexed] role: Role,
        #[indexed] previous_admin_role: Role,
        new_admin_role: Role,
    );

    #[event("bootstrapCompleted")]
    fn bootstrap_completed_event(
        &self,
        #[indexed] successor: &ManagedAddress,
        previous_admin: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getRoleAdmin)]
    #[storage_mapper("roleAdmin")]
    fn role_admin(&self, role: Role) -> SingleValueMapper<Role>;

    #[storage_mapper("bootstrapComplete")]
    fn bootstrap_complete(&self) -> SingleValueMapper<bool>;
}
