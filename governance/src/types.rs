multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteType {
    Against,
    For,
    Abstain,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
}

/// Lifecycle of a timelock operation. `Expired` means the grace period after
/// the ready timestamp has passed without a successful execution.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperationState {
    Unset,
    Waiting,
    Ready,
    Expired,
    Done,
}

// ============================================================
// ProposalCore — one entry of the proposal log
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalCore<M: ManagedTypeApi> {
    pub id: ManagedByteArray<M, 32>,
    pub proposer: ManagedAddress<M>,
    pub snapshot_block: u64,
    pub deadline_block: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub abstain_votes: BigUint<M>,
    /// Captured from the past total supply on the first vote.
    pub quorum_votes: Option<BigUint<M>>,
    pub eta: u64,
    pub executed: bool,
    pub canceled: bool,
}

impl<M: ManagedTypeApi> ProposalCore<M> {
    pub fn vote_succeeded(&self) -> bool {
        self.for_votes > self.against_votes
    }

    pub fn quorum_reached(&self) -> bool {
        match &self.quorum_votes {
            Some(required) => &self.for_votes + &self.abstain_votes >= *required,
            None => false,
        }
    }
}
