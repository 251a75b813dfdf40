// ── Phase ──
pub const ERR_NOT_COMMIT_PHASE: &str = "not in commit phase";
pub const ERR_NOT_REVEAL_PHASE: &str = "not in reveal phase";
pub const ERR_NOT_FINISHED: &str = "voting not finished";

// ── Authorization ──
pub const ERR_ONLY_ADMIN: &str = "only admin";
pub const ERR_INVALID_RECIPIENT: &str = "invalid recipient";

// ── Validation ──
pub const ERR_INVALID_COMMITMENT: &str = "invalid commitment";
pub const ERR_COMMITMENT_INPUT_TOO_LONG: &str = "commitment input too long";
pub const ERR_INVALID_VOTE: &str = "invalid vote";
pub const ERR_ZERO_WEIGHT: &str = "weight must be positive";
pub const ERR_ALREADY_COMMITTED: &str = "already committed";
pub const ERR_NO_COMMITMENT: &str = "no commitment";
pub const ERR_ALREADY_REVEALED: &str = "already revealed";
pub const ERR_NOT_REVEALED: &str = "not revealed";
pub const ERR_COMMITMENT_MISMATCH: &str = "commitment mismatch";
pub const ERR_WEIGHT_MISMATCH: &str = "weight mismatch";
pub const ERR_WRONG_STAKE: &str = "incorrect stake amount";
pub const ERR_NOTHING_TO_REFUND: &str = "nothing to refund";
pub const ERR_INVALID_DEADLINES: &str = "invalid deadlines";
pub const ERR_ZERO_STAKE: &str = "stake must be positive";
pub const ERR_INVALID_TOKEN: &str = "invalid token address";

// ── Transfers ──
pub const ERR_TOKEN_TRANSFER_FAILED: &str = "token transfer failed";
pub const ERR_NATIVE_TRANSFER_FAILED: &str = "native transfer failed";

// ── Reentrancy ──
pub const ERR_REENTRANT_CALL: &str = "reentrant call";
