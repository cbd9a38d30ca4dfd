multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Role — capabilities checked by every privileged endpoint
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    /// Administers every other role. Frozen once bootstrap completes.
    DefaultAdmin,
    /// Changes vault parameters. Held by the governance contract.
    Governance,
    /// Pauses and unpauses the vault.
    Guardian,
    /// Trades NFTs and manages plugins.
    Curator,
    Minter,
    Burner,
    /// Schedules timelock operations.
    Proposer,
    /// Executes ready timelock operations.
    Executor,
    /// Cancels proposals and pending operations.
    Canceller,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::DefaultAdmin,
        Role::Governance,
        Role::Guardian,
        Role::Curator,
        Role::Minter,
        Role::Burner,
        Role::Proposer,
        Role::Executor,
        Role::Canceller,
    ];
}

// ============================================================
// ExternalCall — one low-level call to another contract
// ============================================================

/// Target contract, EGLD carried with the call, endpoint name and raw
/// top-encoded arguments. Return data is never interpreted.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct ExternalCall<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}
