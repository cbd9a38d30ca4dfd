#![no_std]

multiversx_sc::imports!();

pub mod governance_proxy;
pub mod share_registry_proxy;
pub mod timelock;
pub mod types;

use types::{OperationState, ProposalCore, ProposalState, VoteType};
use vault_common::{
    errors::{
        ERR_ALREADY_EXECUTED, ERR_ALREADY_VOTED, ERR_EMPTY_PROPOSAL, ERR_EXPIRED,
        ERR_INSUFFICIENT_VOTES, ERR_INVALID_ADDRESS, ERR_INVALID_CONFIG, ERR_NOT_ACTIVE,
        ERR_PROPOSAL_ALREADY_EXISTS, ERR_UNAUTHORIZED, ERR_UNEXPECTED_PROPOSAL_STATE,
        ERR_UNKNOWN_PROPOSAL,
    },
    types::{ExternalCall, Role},
};

// ============================================================
// Constants
// ============================================================

/// Quorum fractions are whole percentages of the past total supply.
const QUORUM_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

/// Share-weighted governance over the vault. Proposals are batches of
/// external calls; once they pass they go through the timelock and are
/// replayed exactly once.
#[multiversx_sc::contract]
pub trait VaultGovernance:
    vault_common::access_control::AccessControlModule
    + vault_common::external_call::ExternalCallModule
    + timelock::TimelockModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        share_registry: ManagedAddress,
        voting_delay: u64,
        voting_period: u64,
        quorum_fraction: u64,
        proposal_threshold: BigUint,
        timelock_delay: u64,
        grace_period: u64,
    ) {
        require!(!share_registry.is_zero(), ERR_INVALID_ADDRESS);
        require!(voting_period > 0, ERR_INVALID_CONFIG);
        require!(quorum_fraction <= QUORUM_DENOMINATOR, ERR_INVALID_CONFIG);
        require!(grace_period > 0, ERR_INVALID_CONFIG);

        self.share_registry().set(&share_registry);
        self.voting_delay().set(voting_delay);
        self.voting_period().set(voting_period);
        self.quorum_numerator().set(quorum_fraction);
        self.proposal_threshold().set(&proposal_threshold);
        self.min_delay().set(timelock_delay);
        self.grace_period().set(grace_period);

        let deployer = self.blockchain().get_caller();
        self.grant_role_internal(Role::DefaultAdmin, &deployer, &deployer);
        self.grant_role_internal(Role::Canceller, &deployer, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: completeBootstrap
    // The governance contract becomes its own sole admin.
    // ========================================================

    #[endpoint(completeBootstrap)]
    fn complete_bootstrap_endpoint(&self) {
        let own_address = self.blockchain().get_sc_address();
        self.complete_bootstrap(&own_address);
    }

    // ========================================================
    // ENDPOINT: propose
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        description: ManagedBuffer,
        actions: MultiValueEncoded<ExternalCall<Self::Api>>,
    ) -> ManagedByteArray<Self::Api, 32> {
        let actions = actions.to_vec();
        require!(!actions.is_empty(), ERR_EMPTY_PROPOSAL);

        let proposer = self.blockchain().get_caller();
        let now = self.blockchain().get_block_nonce();

        let threshold = self.proposal_threshold().get();
        if threshold > 0u64 {
            let weight = self.past_votes(&proposer, now.saturating_sub(1));
            require!(weight >= threshold, ERR_INSUFFICIENT_VOTES);
        }

        let description_hash = self.crypto().keccak256(&description);
        let id = self.hash_proposal_actions(&description_hash, &actions);
        require!(
            self.proposal_index(&id).is_empty(),
            ERR_PROPOSAL_ALREADY_EXISTS
        );

        let snapshot_block = now + self.voting_delay().get();
        let deadline_block = snapshot_block + self.voting_period().get();

        let proposal = ProposalCore {
            id: id.clone(),
            proposer: proposer.clone(),
            snapshot_block,
            deadline_block,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            abstain_votes: BigUint::zero(),
            quorum_votes: None,
            eta: 0,
            executed: false,
            canceled: false,
        };
        let seq = self.proposals().push(&proposal);
        self.proposal_index(&id).set(seq);
        self.proposal_actions(seq).set(&actions);

        self.proposal_created_event(
            &id,
            &proposer,
            snapshot_block,
            deadline_block,
            &description,
        );

        id
    }

    // ========================================================
    // ENDPOINT: castVote
    // Weight is read at the snapshot block; the first vote also
    // fixes the quorum requirement.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, id: ManagedByteArray<Self::Api, 32>, support: VoteType) -> BigUint {
        let seq = self.require_known_proposal(&id);
        let mut proposal = self.proposals().get(seq);
        require!(
            self.proposal_state(&proposal) == ProposalState::Active,
            ERR_NOT_ACTIVE
        );

        let voter = self.blockchain().get_caller();
        require!(!self.has_voted(seq, &voter).get(), ERR_ALREADY_VOTED);

        let weight = self.past_votes(&voter, proposal.snapshot_block);

        if proposal.quorum_votes.is_none() {
            let total_supply = self.past_total_supply(proposal.snapshot_block);
            let required = total_supply * self.quorum_numerator().get() / QUORUM_DENOMINATOR;
            proposal.quorum_votes = Some(required);
        }

        match support {
            VoteType::Against => proposal.against_votes += &weight,
            VoteType::For => proposal.for_votes += &weight,
            VoteType::Abstain => proposal.abstain_votes += &weight,
        }

        self.proposals().set(seq, &proposal);
        self.has_voted(seq, &voter).set(true);

        self.vote_cast_event(&id, &voter, support, &weight);

        weight
    }

    // ========================================================
    // ENDPOINT: queue
    // Pushes a succeeded batch into the timelock.
    // ========================================================

    #[endpoint(queue)]
    fn queue(&self, id: ManagedByteArray<Self::Api, 32>) -> u64 {
        let seq = self.require_known_proposal(&id);
        let mut proposal = self.proposals().get(seq);
        require!(
            self.proposal_state(&proposal) == ProposalState::Succeeded,
            ERR_UNEXPECTED_PROPOSAL_STATE
        );

        let actions = self.proposal_actions(seq).get();
        let eta = self.schedule_operation(
            timelock::GOVERNANCE_DOMAIN,
            &id,
            &actions,
            self.min_delay().get(),
        );

        proposal.eta = eta;
        self.proposals().set(seq, &proposal);

        self.proposal_queued_event(&id, eta);

        eta
    }

    // ========================================================
    // ENDPOINT: execute
    // Replays the batch. Any failing call reverts the whole
    // transaction and leaves the proposal queued.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, id: ManagedByteArray<Self::Api, 32>) {
        let seq = self.require_known_proposal(&id);
        let mut proposal = self.proposals().get(seq);
        match self.proposal_state(&proposal) {
            ProposalState::Queued => {},
            ProposalState::Executed => sc_panic!(ERR_ALREADY_EXECUTED),
            ProposalState::Expired => sc_panic!(ERR_EXPIRED),
            _ => sc_panic!(ERR_UNEXPECTED_PROPOSAL_STATE),
        }

        proposal.executed = true;
        self.proposals().set(seq, &proposal);
        self.proposal_executed_event(&id);

        self.execute_operation(timelock::GOVERNANCE_DOMAIN, &id);
    }

    // ========================================================
    // ENDPOINT: cancel
    // The proposer may withdraw a pending proposal; a Canceller
    // may stop any proposal that is still undecided or queued.
    // ========================================================

    #[endpoint(cancel)]
    fn cancel(&self, id: ManagedByteArray<Self::Api, 32>) {
        let seq = self.require_known_proposal(&id);
        let mut proposal = self.proposals().get(seq);
        let state = self.proposal_state(&proposal);

        let caller = self.blockchain().get_caller();
        let proposer_may_cancel = caller == proposal.proposer && state == ProposalState::Pending;
        require!(
            proposer_may_cancel || self.has_role(Role::Canceller, &caller),
            ERR_UNAUTHORIZED
        );
        require!(
            !matches!(
                state,
                ProposalState::Executed | ProposalState::Canceled | ProposalState::Expired
            ),
            ERR_UNEXPECTED_PROPOSAL_STATE
        );

        if state == ProposalState::Queued {
            self.cancel_operation(timelock::GOVERNANCE_DOMAIN, &id);
        }

        proposal.canceled = true;
        self.proposals().set(seq, &proposal);
        self.proposal_canceled_event(&id);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_known_proposal(&self, id: &ManagedByteArray<Self::Api, 32>) -> usize {
        let index = self.proposal_index(id);
        require!(!index.is_empty(), ERR_UNKNOWN_PROPOSAL);
        index.get()
    }

    fn proposal_state(&self, proposal: &ProposalCore<Self::Api>) -> ProposalState {
        if proposal.executed {
            return ProposalState::Executed;
        }
        if proposal.canceled {
            return ProposalState::Canceled;
        }

        let now = self.blockchain().get_block_nonce();
        if now < proposal.snapshot_block {
            return ProposalState::Pending;
        }
        if now < proposal.deadline_block {
            return ProposalState::Active;
        }
        if !proposal.vote_succeeded() || !proposal.quorum_reached() {
            return ProposalState::Defeated;
        }

        match self.operation_state(timelock::GOVERNANCE_DOMAIN, &proposal.id) {
            OperationState::Unset => ProposalState::Succeeded,
            OperationState::Waiting | OperationState::Ready => ProposalState::Queued,
            OperationState::Expired => ProposalState::Expired,
            OperationState::Done => ProposalState::Executed,
        }
    }

    fn hash_proposal_actions(
        &self,
        description_hash: &ManagedByteArray<Self::Api, 32>,
        actions: &ManagedVec<ExternalCall<Self::Api>>,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut payload = multiversx_sc::contract_base::ManagedSerializer::<Self::Api>::new()
            .top_encode_to_managed_buffer(actions);
        payload.append(description_hash.as_managed_buffer());
        self.crypto().keccak256(&payload)
    }

    fn past_votes(&self, account: &ManagedAddress, block: u64) -> BigUint {
        let share_registry = self.share_registry().get();
        self.tx()
            .to(&share_registry)
            .typed(share_registry_proxy::ShareRegistryProxy)
            .get_votes(account.clone(), block)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn past_total_supply(&self, block: u64) -> BigUint {
        let share_registry = self.share_registry().get();
        self.tx()
            .to(&share_registry)
            .typed(share_registry_proxy::ShareRegistryProxy)
            .get_past_total_supply(block)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(state)]
    fn state(&self, id: ManagedByteArray<Self::Api, 32>) -> ProposalState {
        let seq = self.require_known_proposal(&id);
        self.proposal_state(&self.proposals().get(seq))
    }

    /// (against, for, abstain)
    #[view(proposalVotes)]
    fn proposal_votes(
        &self,
        id: ManagedByteArray<Self::Api, 32>,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        let seq = self.require_known_proposal(&id);
        let proposal = self.proposals().get(seq);
        (proposal.against_votes, proposal.for_votes, proposal.abstain_votes).into()
    }

    #[view(proposalSnapshot)]
    fn proposal_snapshot(&self, id: ManagedByteArray<Self::Api, 32>) -> u64 {
        let seq = self.require_known_proposal(&id);
        self.proposals().get(seq).snapshot_block
    }

    #[view(proposalDeadline)]
    fn proposal_deadline(&self, id: ManagedByteArray<Self::Api, 32>) -> u64 {
        let seq = self.require_known_proposal(&id);
        self.proposals().get(seq).deadline_block
    }

    #[view(proposalEta)]
    fn proposal_eta(&self, id: ManagedByteArray<Self::Api, 32>) -> u64 {
        let seq = self.require_known_proposal(&id);
        self.proposals().get(seq).eta
    }

    /// Timelock state of the batch a proposal queued.
    #[view(proposalOperationState)]
    fn proposal_operation_state(&self, id: ManagedByteArray<Self::Api, 32>) -> OperationState {
        self.require_known_proposal(&id);
        self.operation_state(timelock::GOVERNANCE_DOMAIN, &id)
    }

    #[view(proposalProposer)]
    fn proposal_proposer(&self, id: ManagedByteArray<Self::Api, 32>) -> ManagedAddress {
        let seq = self.require_known_proposal(&id);
        self.proposals().get(seq).proposer
    }

    #[view(hasVoted)]
    fn has_voted_view(
        &self,
        id: ManagedByteArray<Self::Api, 32>,
        account: ManagedAddress,
    ) -> bool {
        let seq = self.require_known_proposal(&id);
        self.has_voted(seq, &account).get()
    }

    #[view(quorum)]
    fn quorum(&self, block: u64) -> BigUint {
        self.past_total_supply(block) * self.quorum_numerator().get() / QUORUM_DENOMINATOR
    }

    #[view(hashProposal)]
    fn hash_proposal(
        &self,
        description_hash: ManagedByteArray<Self::Api, 32>,
        actions: MultiValueEncoded<ExternalCall<Self::Api>>,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.hash_proposal_actions(&description_hash, &actions.to_vec())
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> usize {
        self.proposals().len()
    }

    /// Proposal id by creation sequence, starting at 1.
    #[view(getProposalIdAt)]
    fn get_proposal_id_at(&self, seq: usize) -> ManagedByteArray<Self::Api, 32> {
        self.proposals().get(seq).id
    }

    #[view(getProposal)]
    fn get_proposal(&self, id: ManagedByteArray<Self::Api, 32>) -> ProposalCore<Self::Api> {
        let seq = self.require_known_proposal(&id);
        self.proposals().get(seq)
    }

    #[view(getVotes)]
    fn get_votes(&self, account: ManagedAddress, block: u64) -> BigUint {
        self.past_votes(&account, block)
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(
        &self,
    ) -> MultiValue7<ManagedAddress, u64, u64, u64, BigUint, u64, u64> {
        (
            self.share_registry().get(),
            self.voting_delay().get(),
            self.voting_period().get(),
            self.quorum_numerator().get(),
            self.proposal_threshold().get(),
            self.min_delay().get(),
            self.grace_period().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_block: u64,
        #[indexed] end_block: u64,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: VoteType,
        weight: &BigUint,
    );

    #[event("proposalQueued")]
    fn proposal_queued_event(&self, #[indexed] id: &ManagedByteArray<Self::Api, 32>, eta: u64);

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] id: &ManagedByteArray<Self::Api, 32>);

    #[event("proposalCanceled")]
    fn proposal_canceled_event(&self, #[indexed] id: &ManagedByteArray<Self::Api, 32>);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("shareRegistry")]
    fn share_registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(votingDelay)]
    #[storage_mapper("votingDelay")]
    fn voting_delay(&self) -> SingleValueMapper<u64>;

    #[view(votingPeriod)]
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[view(quorumNumerator)]
    #[storage_mapper("quorumNumerator")]
    fn quorum_numerator(&self) -> SingleValueMapper<u64>;

    #[view(proposalThreshold)]
    #[storage_mapper("proposalThreshold")]
    fn proposal_threshold(&self) -> SingleValueMapper<BigUint>;

    /// Append-only proposal log, indexed by creation sequence.
    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<ProposalCore<Self::Api>>;

    #[storage_mapper("proposalIndex")]
    fn proposal_index(&self, id: &ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<usize>;

    #[storage_mapper("proposalActions")]
    fn proposal_actions(
        &self,
        seq: usize,
    ) -> SingleValueMapper<ManagedVec<ExternalCall<Self::Api>>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, seq: usize, account: &ManagedAddress) -> SingleValueMapper<bool>;
}
