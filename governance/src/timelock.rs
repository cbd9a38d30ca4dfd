multiversx_sc::imports!();

use crate::types::OperationState;
use vault_common::{
    access_control,
    errors::{
        ERR_ALREADY_EXECUTED, ERR_EXPIRED, ERR_INSUFFICIENT_DELAY, ERR_NOT_READY,
        ERR_NOT_SCHEDULED, ERR_OPERATION_ALREADY_SCHEDULED,
    },
    external_call,
    types::{ExternalCall, Role},
};

/// Key domain for operations scheduled through the role-gated endpoints.
pub const DIRECT_DOMAIN: &[u8] = b"timelock";
/// Key domain for operations queued by proposals.
pub const GOVERNANCE_DOMAIN: &[u8] = b"governance";

/// Delayed execution queue. An operation becomes ready `delay` seconds after
/// scheduling and stays executable for `grace_period` seconds. Governance
/// schedules through `schedule_operation`; role holders can use the
/// endpoints directly.
///
/// Operations are stored under `keccak256(domain ++ id)`, so an id chosen by
/// a role holder can never address an operation queued by a proposal.
#[multiversx_sc::module]
pub trait TimelockModule:
    access_control::AccessControlModule + external_call::ExternalCallModule
{
    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(schedule)]
    fn schedule(
        &self,
        id: ManagedByteArray<Self::Api, 32>,
        delay: u64,
        calls: MultiValueEncoded<ExternalCall<Self::Api>>,
    ) -> u64 {
        self.require_role(Role::Proposer);
        self.schedule_operation(DIRECT_DOMAIN, &id, &calls.to_vec(), delay)
    }

    #[endpoint(executeOperation)]
    fn execute_operation_endpoint(&self, id: ManagedByteArray<Self::Api, 32>) {
        self.require_role(Role::Executor);
        self.execute_operation(DIRECT_DOMAIN, &id);
    }

    #[endpoint(cancelOperation)]
    fn cancel_operation_endpoint(&self, id: ManagedByteArray<Self::Api, 32>) {
        self.require_role(Role::Canceller);
        self.cancel_operation(DIRECT_DOMAIN, &id);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn operation_key(
        &self,
        domain: &[u8],
        id: &ManagedByteArray<Self::Api, 32>,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut payload: ManagedBuffer<Self::Api> = ManagedBuffer::new_from_bytes(domain);
        payload.append(id.as_managed_buffer());
        self.crypto().keccak256(&payload)
    }

    /// Returns the ready-at timestamp.
    fn schedule_operation(
        &self,
        domain: &[u8],
        id: &ManagedByteArray<Self::Api, 32>,
        calls: &ManagedVec<ExternalCall<Self::Api>>,
        delay: u64,
    ) -> u64 {
        let key = self.operation_key(domain, id);
        require!(
            self.operation_ready_at(&key).is_empty(),
            ERR_OPERATION_ALREADY_SCHEDULED
        );
        require!(delay >= self.min_delay().get(), ERR_INSUFFICIENT_DELAY);

        let ready_at = self.blockchain().get_block_timestamp() + delay;
        self.operation_ready_at(&key).set(ready_at);
        self.operation_calls(&key).set(calls);

        for (index, call) in calls.iter().enumerate() {
            self.call_scheduled_event(id, index as u32, &call.target, delay, &call.endpoint);
        }

        ready_at
    }

    /// Marks the operation done before dispatching. Any failing call aborts
    /// the transaction, which also undoes the mark.
    fn execute_operation(&self, domain: &[u8], id: &ManagedByteArray<Self::Api, 32>) {
        let key = self.operation_key(domain, id);
        match self.key_state(&key) {
            OperationState::Unset => sc_panic!(ERR_NOT_SCHEDULED),
            OperationState::Done => sc_panic!(ERR_ALREADY_EXECUTED),
            OperationState::Waiting => sc_panic!(ERR_NOT_READY),
            OperationState::Expired => sc_panic!(ERR_EXPIRED),
            OperationState::Ready => {},
        }

        self.operation_done(&key).set(true);

        let calls = self.operation_calls(&key).get();
        for (index, call) in calls.iter().enumerate() {
            self.call_executed_event(id, index as u32, &call.target, &call.endpoint);
            self.dispatch_external_call(&call);
        }
    }

    fn cancel_operation(&self, domain: &[u8], id: &ManagedByteArray<Self::Api, 32>) {
        let key = self.operation_key(domain, id);
        match self.key_state(&key) {
            OperationState::Waiting | OperationState::Ready => {},
            OperationState::Done => sc_panic!(ERR_ALREADY_EXECUTED),
            OperationState::Expired => sc_panic!(ERR_EXPIRED),
            OperationState::Unset => sc_panic!(ERR_NOT_SCHEDULED),
        }

        self.operation_ready_at(&key).clear();
        self.operation_calls(&key).clear();
        self.operation_cancelled_event(id);
    }

    fn operation_state(
        &self,
        domain: &[u8],
        id: &ManagedByteArray<Self::Api, 32>,
    ) -> OperationState {
        let key = self.operation_key(domain, id);
        self.key_state(&key)
    }

    fn key_state(&self, key: &ManagedByteArray<Self::Api, 32>) -> OperationState {
        if self.operation_ready_at(key).is_empty() {
            return OperationState::Unset;
        }
        if self.operation_done(key).get() {
            return OperationState::Done;
        }

        let now = self.blockchain().get_block_timestamp();
        let ready_at = self.operation_ready_at(key).get();
        if now < ready_at {
            OperationState::Waiting
        } else if now > ready_at + self.grace_period().get() {
            OperationState::Expired
        } else {
            OperationState::Ready
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// State of an operation scheduled through `schedule`.
    #[view(getOperationState)]
    fn get_operation_state(&self, id: ManagedByteArray<Self::Api, 32>) -> OperationState {
        self.operation_state(DIRECT_DOMAIN, &id)
    }

    /// Ready-at timestamp, 0 when unscheduled.
    #[view(getTimestamp)]
    fn get_timestamp(&self, id: ManagedByteArray<Self::Api, 32>) -> u64 {
        let key = self.operation_key(DIRECT_DOMAIN, &id);
        self.operation_ready_at(&key).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("callScheduled")]
    fn call_scheduled_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] index: u32,
        #[indexed] target: &ManagedAddress,
        #[indexed] delay: u64,
        endpoint: &ManagedBuffer,
    );

    #[event("callExecuted")]
    fn call_executed_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] index: u32,
        #[indexed] target: &ManagedAddress,
        endpoint: &ManagedBuffer,
    );

    #[event("operationCancelled")]
    fn operation_cancelled_event(&self, #[indexed] id: &ManagedByteArray<Self::Api, 32>);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("operationReadyAt")]
    fn operation_ready_at(&self, id: &ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<u64>;

    #[storage_mapper("operationDone")]
    fn operation_done(&self, id: &ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<bool>;

    #[storage_mapper("operationCalls")]
    fn operation_calls(
        &self,
        id: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<ManagedVec<ExternalCall<Self::Api>>>;

    #[view(getMinDelay)]
    #[storage_mapper("minDelay")]
    fn min_delay(&self) -> SingleValueMapper<u64>;

    #[view(getGracePeriod)]
    #[storage_mapper("gracePeriod")]
    fn grace_period(&self) -> SingleValueMapper<u64>;
}
