use multiversx_sc::proxy_imports::*;

use crate::types::{OperationState, ProposalCore, ProposalState, VoteType};
use vault_common::types::{ExternalCall, Role};

pub struct VaultGovernanceProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for VaultGovernanceProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = VaultGovernanceProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        VaultGovernanceProxyMethods { wrapped_tx: tx }
    }
}

pub struct VaultGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> VaultGovernanceProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<u64>,
        Arg6: ProxyArg<u64>,
    >(
        self,
        share_registry: Arg0,
        voting_delay: Arg1,
        voting_period: Arg2,
        quorum_fraction: Arg3,
        proposal_threshold: Arg4,
        timelock_delay: Arg5,
        grace_period: Arg6,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&share_registry)
            .argument(&voting_delay)
            .argument(&voting_period)
            .argument(&quorum_fraction)
            .argument(&proposal_threshold)
            .argument(&timelock_delay)
            .argument(&grace_period)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> VaultGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> VaultGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn complete_bootstrap(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("completeBootstrap")
            .original_result()
    }

    pub fn propose<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ExternalCall<Env::Api>>>,
    >(
        self,
        description: Arg0,
        actions: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("propose")
            .argument(&description)
            .argument(&actions)
            .original_result()
    }

    pub fn cast_vote<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg1: ProxyArg<VoteType>,
    >(
        self,
        id: Arg0,
        support: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("castVote")
            .argument(&id)
            .argument(&support)
            .original_result()
    }

    pub fn queue<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("queue")
            .argument(&id)
            .original_result()
    }

    pub fn execute<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&id)
            .original_result()
    }

    pub fn cancel<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancel")
            .argument(&id)
            .original_result()
    }

    pub fn state<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("state")
            .argument(&id)
            .original_result()
    }

    pub fn proposal_votes<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalVotes")
            .argument(&id)
            .original_result()
    }

    pub fn proposal_snapshot<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalSnapshot")
            .argument(&id)
            .original_result()
    }

    pub fn proposal_deadline<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalDeadline")
            .argument(&id)
            .original_result()
    }

    pub fn proposal_eta<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalEta")
            .argument(&id)
            .original_result()
    }

    pub fn proposal_operation_state<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OperationState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalOperationState")
            .argument(&id)
            .original_result()
    }

    pub fn proposal_proposer<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalProposer")
            .argument(&id)
            .original_result()
    }

    pub fn has_voted<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        id: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&id)
            .argument(&account)
            .original_result()
    }

    pub fn quorum<
        Arg0: ProxyArg<u64>,
    >(
        self,
        block: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("quorum")
            .argument(&block)
            .original_result()
    }

    pub fn hash_proposal<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ExternalCall<Env::Api>>>,
    >(
        self,
        description_hash: Arg0,
        actions: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hashProposal")
            .argument(&description_hash)
            .argument(&actions)
            .original_result()
    }

    pub fn get_proposal_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .original_result()
    }

    pub fn get_proposal_id_at<
        Arg0: ProxyArg<usize>,
    >(
        self,
        seq: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalIdAt")
            .argument(&seq)
            .original_result()
    }

    pub fn get_proposal<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalCore<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&id)
            .original_result()
    }

    pub fn get_votes<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        account: Arg0,
        block: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotes")
            .argument(&account)
            .argument(&block)
            .original_result()
    }

    pub fn get_governance_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue7<ManagedAddress<Env::Api>, u64, u64, u64, BigUint<Env::Api>, u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGovernanceConfig")
            .original_result()
    }

    pub fn voting_delay(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingDelay")
            .original_result()
    }

    pub fn voting_period(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingPeriod")
            .original_result()
    }

    pub fn quorum_numerator(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("quorumNumerator")
            .original_result()
    }

    pub fn proposal_threshold(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalThreshold")
            .original_result()
    }

    pub fn schedule<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<MultiValueEncoded<Env::Api, ExternalCall<Env::Api>>>,
    >(
        self,
        id: Arg0,
        delay: Arg1,
        calls: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("schedule")
            .argument(&id)
            .argument(&delay)
            .argument(&calls)
            .original_result()
    }

    pub fn execute_operation<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeOperation")
            .argument(&id)
            .original_result()
    }

    pub fn cancel_operation<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelOperation")
            .argument(&id)
            .original_result()
    }

    pub fn get_operation_state<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OperationState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOperationState")
            .argument(&id)
            .original_result()
    }

    pub fn get_timestamp<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTimestamp")
            .argument(&id)
            .original_result()
    }

    pub fn min_delay(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMinDelay")
            .original_result()
    }

    pub fn grace_period(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGracePeriod")
            .original_result()
    }

    pub fn grant_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("grantRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn revoke_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revokeRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn renounce_role<
        Arg0: ProxyArg<Role>,
    >(
        self,
        role: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("renounceRole")
            .argument(&role)
            .original_result()
    }

    pub fn set_role_admin<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<Role>,
    >(
        self,
        role: Arg0,
        admin_role: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRoleAdmin")
            .argument(&role)
            .argument(&admin_role)
            .original_result()
    }

    pub fn has_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn get_role_members<
        Arg0: ProxyArg<Role>,
    >(
        self,
        role: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRoleMembers")
            .argument(&role)
            .original_result()
    }

    pub fn is_bootstrap_complete(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isBootstrapComplete")
            .original_result()
    }

    pub fn role_admin<
        Arg0: ProxyArg<Role>,
    >(
        self,
        role: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Role> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRoleAdmin")
            .argument(&role)
            .original_result()
    }
}
