// Shared world setup for the scenario tests. Every contract is registered in
// one world so cross-contract calls run for real.

#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use mock_marketplace::marketplace_proxy::MockMarketplaceProxy;
use nft_vault::vault_proxy::VaultProxy;
use vault_common::types::ExternalCall;
use vault_governance::{governance_proxy::VaultGovernanceProxy, types::VoteType};

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const USER1: TestAddress = TestAddress::new("user1");
pub const USER2: TestAddress = TestAddress::new("user2");
pub const SELLER: TestAddress = TestAddress::new("seller");
/// Plain account standing in for governance in vault-only tests.
pub const GOVERNOR: TestAddress = TestAddress::new("governor");

pub const VAULT: TestSCAddress = TestSCAddress::new("nft-vault");
pub const GOVERNANCE: TestSCAddress = TestSCAddress::new("vault-governance");
pub const MARKETPLACE: TestSCAddress = TestSCAddress::new("mock-marketplace");
pub const FACTORY: TestSCAddress = TestSCAddress::new("vault-factory");

pub const VAULT_CODE: MxscPath = MxscPath::new("output/nft-vault.mxsc.json");
pub const GOVERNANCE_CODE: MxscPath =
    MxscPath::new("governance/output/vault-governance.mxsc.json");
pub const MARKETPLACE_CODE: MxscPath =
    MxscPath::new("mock-marketplace/output/mock-marketplace.mxsc.json");
pub const FACTORY_CODE: MxscPath = MxscPath::new("vault-factory/output/vault-factory.mxsc.json");

pub const NFT_ID: TestTokenIdentifier = TestTokenIdentifier::new("APE-123456");

pub const INITIAL_BALANCE: u64 = 100_000;
pub const VAULT_URI: &str = "ipfs://vault";

pub const VOTING_PERIOD: u64 = 5;
pub const QUORUM_FRACTION: u64 = 4;
pub const PROPOSAL_THRESHOLD: u64 = 10;
pub const TIMELOCK_DELAY: u64 = 1;
pub const GRACE_PERIOD: u64 = 1_000;
pub const START_TIMESTAMP: u64 = 100;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("");

    blockchain.register_contract(VAULT_CODE, nft_vault::ContractBuilder);
    blockchain.register_contract(GOVERNANCE_CODE, vault_governance::ContractBuilder);
    blockchain.register_contract(MARKETPLACE_CODE, mock_marketplace::ContractBuilder);
    blockchain.register_contract(FACTORY_CODE, vault_factory::ContractBuilder);
    blockchain
}

pub fn buffer(value: &str) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::from(value)
}

/// Top-encoded argument, as the VM expects raw call arguments.
pub fn encoded<T: TopEncode>(value: &T) -> ManagedBuffer<StaticApi> {
    multiversx_sc::contract_base::ManagedSerializer::<StaticApi>::new()
        .top_encode_to_managed_buffer(value)
}

pub fn make_call(
    target: TestSCAddress,
    endpoint: &str,
    args: &[ManagedBuffer<StaticApi>],
) -> ExternalCall<StaticApi> {
    let mut arguments = ManagedVec::new();
    for arg in args {
        arguments.push(arg.clone());
    }

    ExternalCall {
        target: target.to_managed_address(),
        value: BigUint::zero(),
        endpoint: buffer(endpoint),
        arguments,
    }
}

pub fn call_batch(
    calls: &[ExternalCall<StaticApi>],
) -> MultiValueEncoded<StaticApi, ExternalCall<StaticApi>> {
    let mut actions = MultiValueEncoded::new();
    for call in calls {
        actions.push(call.clone());
    }
    actions
}

pub fn set_uri_call(uri: &str) -> ExternalCall<StaticApi> {
    make_call(VAULT, "setVaultUri", &[buffer(uri)])
}

pub struct VaultSetup {
    pub world: ScenarioWorld,
}

impl VaultSetup {
    /// Deploys the vault at block 1 without wiring governance.
    pub fn deploy() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(INITIAL_BALANCE);
        world.account(USER1).nonce(1).balance(INITIAL_BALANCE);
        world.account(USER2).nonce(1).balance(INITIAL_BALANCE);
        world.account(GOVERNOR).nonce(1).balance(INITIAL_BALANCE);
        world
            .account(SELLER)
            .nonce(1)
            .balance(INITIAL_BALANCE)
            .esdt_nft_balance(NFT_ID, 1u64, 1u64, ());

        world
            .current_block()
            .block_nonce(1)
            .block_timestamp(START_TIMESTAMP);

        world
            .tx()
            .from(OWNER)
            .typed(VaultProxy)
            .init(buffer(VAULT_URI), 0u64)
            .code(VAULT_CODE)
            .code_metadata(CodeMetadata::PAYABLE)
            .new_address(VAULT)
            .run();

        VaultSetup { world }
    }

    /// Deployed and initialized with `GOVERNOR` as the governance account.
    pub fn new() -> Self {
        let mut setup = Self::deploy();
        setup
            .world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(VaultProxy)
            .initialize(GOVERNOR)
            .run();
        setup
    }

    pub fn set_block(&mut self, nonce: u64) {
        self.world.current_block().block_nonce(nonce);
    }

    pub fn deposit(&mut self, from: TestAddress, amount: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(VaultProxy)
            .deposit()
            .egld(amount)
            .returns(ReturnsResult)
            .run()
    }

    /// Plain EGLD transfer into the vault, raising the value of every share.
    pub fn send_profit(&mut self, amount: u64) {
        self.world.transfer_step(
            TransferStep::new()
                .from("address:owner")
                .to("sc:nft-vault")
                .egld_value(amount),
        );
    }

    pub fn mint(&mut self, to: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(VaultProxy)
            .mint(to, amount)
            .run();
    }

    pub fn delegate(&mut self, from: TestAddress, delegatee: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(VaultProxy)
            .delegate(delegatee)
            .run();
    }

    pub fn deploy_marketplace(&mut self, offer_price: u64, funds: u64) {
        self.world
            .tx()
            .from(OWNER)
            .typed(MockMarketplaceProxy)
            .init(offer_price)
            .egld(funds)
            .code(MARKETPLACE_CODE)
            .new_address(MARKETPLACE)
            .run();
    }

    pub fn check_share_balance(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(VAULT)
            .typed(VaultProxy)
            .share_balance(account)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_votes(&mut self, account: TestAddress, block: u64, expected: u64) {
        self.world
            .query()
            .to(VAULT)
            .typed(VaultProxy)
            .get_votes(account, block)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_vault_uri(&mut self, expected: &str) {
        self.world
            .query()
            .to(VAULT)
            .typed(VaultProxy)
            .vault_uri()
            .returns(ExpectValue(buffer(expected)))
            .run();
    }
}

// ============================================================
// Governance
// ============================================================

pub struct GovernanceSetup {
    pub vault: VaultSetup,
}

impl GovernanceSetup {
    /// Vault and governance deployed at block 1; the vault is not yet
    /// initialized.
    pub fn deploy(voting_delay: u64) -> Self {
        let mut vault = VaultSetup::deploy();

        vault
            .world
            .tx()
            .from(OWNER)
            .typed(VaultGovernanceProxy)
            .init(
                VAULT,
                voting_delay,
                VOTING_PERIOD,
                QUORUM_FRACTION,
                PROPOSAL_THRESHOLD,
                TIMELOCK_DELAY,
                GRACE_PERIOD,
            )
            .code(GOVERNANCE_CODE)
            .code_metadata(CodeMetadata::PAYABLE)
            .new_address(GOVERNANCE)
            .run();

        GovernanceSetup { vault }
    }

    /// Vault wired to governance; USER1 holds 100 self-delegated shares
    /// from block 1 on.
    pub fn new(voting_delay: u64) -> Self {
        let mut setup = Self::deploy(voting_delay);
        setup.initialize_vault();
        setup.vault.mint(USER1, 100);
        setup.vault.delegate(USER1, USER1);
        setup
    }

    pub fn world(&mut self) -> &mut ScenarioWorld {
        &mut self.vault.world
    }

    pub fn initialize_vault(&mut self) {
        self.world()
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(VaultProxy)
            .initialize(GOVERNANCE)
            .run();
    }

    pub fn set_block(&mut self, nonce: u64) {
        self.world().current_block().block_nonce(nonce);
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world().current_block().block_timestamp(timestamp);
    }

    pub fn propose(
        &mut self,
        from: TestAddress,
        description: &str,
        calls: &[ExternalCall<StaticApi>],
    ) -> ManagedByteArray<StaticApi, 32> {
        self.world()
            .tx()
            .from(from)
            .to(GOVERNANCE)
            .typed(VaultGovernanceProxy)
            .propose(buffer(description), call_batch(calls))
            .returns(ReturnsResult)
            .run()
    }

    pub fn vote(
        &mut self,
        from: TestAddress,
        id: &ManagedByteArray<StaticApi, 32>,
        support: VoteType,
    ) {
        self.world()
            .tx()
            .from(from)
            .to(GOVERNANCE)
            .typed(VaultGovernanceProxy)
            .cast_vote(id.clone(), support)
            .run();
    }

    pub fn queue(&mut self, id: &ManagedByteArray<StaticApi, 32>) -> u64 {
        self.world()
            .tx()
            .from(USER2)
            .to(GOVERNANCE)
            .typed(VaultGovernanceProxy)
            .queue(id.clone())
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute(&mut self, id: &ManagedByteArray<StaticApi, 32>) {
        self.world()
            .tx()
            .from(USER2)
            .to(GOVERNANCE)
            .typed(VaultGovernanceProxy)
            .execute(id.clone())
            .run();
    }

    pub fn execute_expect_error(&mut self, id: &ManagedByteArray<StaticApi, 32>, message: &str) {
        self.world()
            .tx()
            .from(USER2)
            .to(GOVERNANCE)
            .typed(VaultGovernanceProxy)
            .execute(id.clone())
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn check_state(
        &mut self,
        id: &ManagedByteArray<StaticApi, 32>,
        expected: vault_governance::types::ProposalState,
    ) {
        self.world()
            .query()
            .to(GOVERNANCE)
            .typed(VaultGovernanceProxy)
            .state(id.clone())
            .returns(ExpectValue(expected))
            .run();
    }

    /// Proposes `calls` at block 2, passes them with USER1's vote and queues
    /// them at the deadline. Returns the proposal id and its eta.
    pub fn pass_and_queue(
        &mut self,
        description: &str,
        calls: &[ExternalCall<StaticApi>],
    ) -> (ManagedByteArray<StaticApi, 32>, u64) {
        self.set_block(2);
        let id = self.propose(USER1, description, calls);
        self.vote(USER1, &id, VoteType::For);

        self.set_block(2 + VOTING_PERIOD);
        let eta = self.queue(&id);
        (id, eta)
    }
}

pub fn no_args() -> MultiValueEncoded<StaticApi, ManagedBuffer<StaticApi>> {
    MultiValueEncoded::new()
}
