multiversx_sc::imports!();

use crate::errors::{ERR_NOT_COMMIT_PHASE, ERR_NOT_FINISHED, ERR_NOT_REVEAL_PHASE};
use crate::types::Phase;

/// Lifecycle clock. The phase is a function of the block timestamp and the
/// two deadlines written at deploy time; it is never stored.
#[multiversx_sc::module]
pub trait PhaseModule {
    #[view(getCurrentPhase)]
    fn current_phase(&self) -> Phase {
        let now = self.blockchain().get_block_timestamp();
        if now <= self.commit_deadline().get() {
            Phase::Commit
        } else if now <= self.reveal_deadline().get() {
            Phase::Reveal
        } else {
            Phase::Finished
        }
    }

    fn require_phase(&self, expected: Phase) {
        if self.current_phase() == expected {
            return;
        }
        match expected {
            Phase::Commit => sc_panic!(ERR_NOT_COMMIT_PHASE),
            Phase::Reveal => sc_panic!(ERR_NOT_REVEAL_PHASE),
            Phase::Finished => sc_panic!(ERR_NOT_FINISHED),
        }
    }

    #[view(getCommitDeadline)]
    #[storage_mapper("commitDeadline")]
    fn commit_deadline(&self) -> SingleValueMapper<u64>;

    #[view(getRevealDeadline)]
    #[storage_mapper("revealDeadline")]
    fn reveal_deadline(&self) -> SingleValueMapper<u64>;
}
