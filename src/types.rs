multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Checkpoint — one entry of an append-only weight history
// ============================================================

/// Value in force from `block` until the next checkpoint. Checkpoints of a
/// history are strictly increasing in `block`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    pub block: u64,
    pub value: BigUint<M>,
}
