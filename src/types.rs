multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Phase: time-gated lifecycle, derived from block timestamp
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// `now <= commitDeadline`. Voters lock weight and post their stake.
    Commit,
    /// `commitDeadline < now <= revealDeadline`. Commitments are opened and tallied.
    Reveal,
    /// `now > revealDeadline`. Results are final; admin may slash and sweep.
    Finished,
}

// ============================================================
// Votes and results
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteChoice {
    No,
    Yes,
}

impl VoteChoice {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(VoteChoice::No),
            1 => Some(VoteChoice::Yes),
            _ => None,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WinningOutcome {
    No,
    Yes,
    Tie,
}

// ============================================================
// Voter Record: one sealed commitment per address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoterRecord<M: ManagedTypeApi> {
    pub commitment: ManagedByteArray<M, 32>,
    pub revealed: bool,
    /// Informational only; never used for gating.
    pub committed_at: u64,
    /// Tokens pulled at commit time. Stays locked after reveal.
    pub locked_weight: BigUint<M>,
}

// ============================================================
// Slash Outcome: per-voter result of a slashing batch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlashOutcome {
    /// No record for this address. Untouched.
    NotCommitted,
    /// Revealers are never slashed. Untouched.
    Revealed,
    /// Deposit and weight moved to the recipient, record purged.
    Slashed,
    /// At least one transfer failed. What could not move stays on the
    /// record so a later batch can retry it.
    Retained,
}
