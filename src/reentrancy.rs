multiversx_sc::imports!();

use crate::errors::ERR_REENTRANT_CALL;

/// Single non-reentrant flag shared by every endpoint that hands control to
/// another contract (token calls) or moves EGLD.
///
/// A failing call reverts all storage writes, the flag included, so only the
/// successful path has to release it explicitly.
#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    fn acquire_lock(&self) {
        require!(!self.reentrancy_lock().get(), ERR_REENTRANT_CALL);
        self.reentrancy_lock().set(true);
    }

    fn release_lock(&self) {
        self.reentrancy_lock().clear();
    }

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;
}
