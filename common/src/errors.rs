// Every failure message is the bare error name so callers can match on it.

pub const ERR_ZERO_AMOUNT: &str = "ZeroAmount";
pub const ERR_INSUFFICIENT_SHARES: &str = "InsufficientShares";
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance";
pub const ERR_BELOW_MIN_CONTRIBUTION: &str = "BelowMinContribution";
pub const ERR_INSOLVENT: &str = "Insolvent";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_PAUSED: &str = "Paused";
pub const ERR_NOT_PAUSED: &str = "NotPaused";
pub const ERR_INVALID_ADDRESS: &str = "InvalidAddress";
pub const ERR_PLUGIN_ALREADY_ADDED: &str = "PluginAlreadyAdded";
pub const ERR_PLUGIN_NOT_FOUND: &str = "PluginNotFound";
pub const ERR_ALREADY_INITIALIZED: &str = "AlreadyInitialized";
pub const ERR_NOT_INITIALIZED: &str = "NotInitialized";
pub const ERR_TRANSFERS_DISABLED: &str = "TransfersDisabled";
pub const ERR_FUTURE_LOOKUP: &str = "FutureLookup";
pub const ERR_EXTERNAL_CALL_FAILED: &str = "ExternalCallFailed";

pub const ERR_INVALID_CONFIG: &str = "InvalidConfig";
pub const ERR_EMPTY_PROPOSAL: &str = "EmptyProposal";
pub const ERR_INSUFFICIENT_VOTES: &str = "InsufficientVotes";
pub const ERR_PROPOSAL_ALREADY_EXISTS: &str = "ProposalAlreadyExists";
pub const ERR_UNKNOWN_PROPOSAL: &str = "UnknownProposal";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
pub const ERR_NOT_ACTIVE: &str = "NotActive";
pub const ERR_UNEXPECTED_PROPOSAL_STATE: &str = "UnexpectedProposalState";

pub const ERR_NOT_SCHEDULED: &str = "NotScheduled";
pub const ERR_OPERATION_ALREADY_SCHEDULED: &str = "OperationAlreadyScheduled";
pub const ERR_INSUFFICIENT_DELAY: &str = "InsufficientDelay";
pub const ERR_NOT_READY: &str = "NotReady";
pub const ERR_EXPIRED: &str = "Expired";
pub const ERR_ALREADY_EXECUTED: &str = "AlreadyExecuted";
