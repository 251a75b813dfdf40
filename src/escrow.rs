multiversx_sc::imports!();

/// Per-voter EGLD stake ledger.
///
/// Every balance change happens before the EGLD leaves the contract and is
/// put back if the transfer cannot be made.
#[multiversx_sc::module]
pub trait EscrowModule {
    /// A plain EGLD transfer to a contract that is neither payable nor
    /// payable-by-SC aborts the whole transaction, so it is checked up front
    /// and reported as a failed transfer instead.
    fn can_receive_egld(&self, to: &ManagedAddress) -> bool {
        if to.is_zero() {
            return false;
        }
        if !self.blockchain().is_smart_contract(to) {
            return true;
        }
        let metadata = self.blockchain().get_code_metadata(to);
        metadata.is_payable() || metadata.is_payable_by_sc()
    }

    fn try_send_egld(&self, to: &ManagedAddress, amount: &BigUint) -> bool {
        if !self.can_receive_egld(to) {
            return false;
        }
        self.send().direct_egld(to, amount);
        true
    }

    /// Best-effort refund used right after a reveal. Returns whether the
    /// stake left the contract; on failure the balance is restored for a
    /// later `claimRefund`.
    fn try_refund_deposit(&self, voter: &ManagedAddress) -> bool {
        let balance = self.deposit_balance(voter).get();
        if balance == 0u64 {
            return false;
        }

        self.deposit_balance(voter).clear();
        if self.try_send_egld(voter, &balance) {
            self.deposit_refunded_event(voter, &balance);
            true
        } else {
            self.deposit_balance(voter).set(&balance);
            self.deposit_refund_pending_event(voter, &balance);
            false
        }
    }

    // ── Events ──

    #[event("depositRefunded")]
    fn deposit_refunded_event(&self, #[indexed] voter: &ManagedAddress, amount: &BigUint);

    #[event("depositRefundPending")]
    fn deposit_refund_pending_event(&self, #[indexed] voter: &ManagedAddress, amount: &BigUint);

    #[event("depositSlashed")]
    fn deposit_slashed_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    // ── Storage ──

    #[view(getDepositBalance)]
    #[storage_mapper("depositBalance")]
    fn deposit_balance(&self, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
