multiversx_sc::imports!();

use crate::pause;
use vault_common::{
    access_control,
    errors::{
        ERR_INSUFFICIENT_BALANCE, ERR_INVALID_ADDRESS, ERR_PLUGIN_ALREADY_ADDED,
        ERR_PLUGIN_NOT_FOUND,
    },
    external_call,
    types::{ExternalCall, Role},
};

/// Whitelist of extension contracts. Only registered plugins can be invoked
/// with vault funds through `callPlugin`.
#[multiversx_sc::module]
pub trait PluginsModule:
    access_control::AccessControlModule + external_call::ExternalCallModule + pause::PauseModule
{
    #[endpoint(addPlugin)]
    fn add_plugin(&self, plugin: ManagedAddress) {
        self.require_role(Role::Curator);
        require!(!plugin.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            self.plugins().insert(plugin.clone()),
            ERR_PLUGIN_ALREADY_ADDED
        );

        self.plugin_added_event(&plugin);
    }

    /// Removing an unknown plugin fails rather than silently succeeding.
    #[endpoint(removePlugin)]
    fn remove_plugin(&self, plugin: ManagedAddress) {
        self.require_role(Role::Curator);
        require!(self.plugins().swap_remove(&plugin), ERR_PLUGIN_NOT_FOUND);

        self.plugin_removed_event(&plugin);
    }

    #[endpoint(callPlugin)]
    fn call_plugin(
        &self,
        plugin: ManagedAddress,
        value: BigUint,
        endpoint: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) {
        self.require_role(Role::Curator);
        self.require_not_paused();
        require!(self.is_plugin(&plugin), ERR_PLUGIN_NOT_FOUND);

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(value <= balance, ERR_INSUFFICIENT_BALANCE);

        let call = ExternalCall {
            target: plugin,
            value,
            endpoint,
            arguments: arguments.to_vec(),
        };
        self.plugin_called_event(&call.target, &call.value, &call.endpoint);
        self.dispatch_external_call(&call);
    }

    #[view(isPlugin)]
    fn is_plugin(&self, plugin: &ManagedAddress) -> bool {
        self.plugins().contains(plugin)
    }

    #[view(getPlugins)]
    fn get_plugins(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for plugin in self.plugins().iter() {
            result.push(plugin);
        }
        result
    }

    #[event("pluginAdded")]
    fn plugin_added_event(&self, #[indexed] plugin: &ManagedAddress);

    #[event("pluginRemoved")]
    fn plugin_removed_event(&self, #[indexed] plugin: &ManagedAddress);

    #[event("pluginCalled")]
    fn plugin_called_event(
        &self,
        #[indexed] plugin: &ManagedAddress,
        #[indexed] value: &BigUint,
        endpoint: &ManagedBuffer,
    );

    #[storage_mapper("plugins")]
    fn plugins(&self) -> UnorderedSetMapper<ManagedAddress>;
}
