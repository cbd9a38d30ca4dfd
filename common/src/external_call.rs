multiversx_sc::imports!();

use crate::{errors::ERR_INVALID_ADDRESS, types::ExternalCall};

#[multiversx_sc::module]
pub trait ExternalCallModule {
    fn require_callable_target(&self, target: &ManagedAddress) {
        require!(
            !target.is_zero() && self.blockchain().is_smart_contract(target),
            ERR_INVALID_ADDRESS
        );
    }

    /// Synchronous call carrying `call.value` EGLD. A failing callee aborts the
    /// whole transaction with its own error message.
    fn dispatch_external_call(&self, call: &ExternalCall<Self::Api>) {
        self.require_callable_target(&call.target);
        self.tx()
            .to(&call.target)
            .egld(&call.value)
            .raw_call(call.endpoint.clone())
            .arguments_raw(ManagedArgBuffer::from(call.arguments.clone()))
            .sync_call();
    }
}
