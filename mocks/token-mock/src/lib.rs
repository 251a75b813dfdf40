#![no_std]

multiversx_sc::imports!();

pub mod token_mock_proxy;

/// Minimal fungible-token ledger for tests. Transfers report failure through
/// their `bool` result, the way the voting contract expects.
#[multiversx_sc::contract]
pub trait TokenMock {
    #[init]
    fn init(&self) {}

    #[endpoint(mint)]
    fn mint(&self, account: ManagedAddress, amount: BigUint) {
        self.balances(&account).update(|balance| *balance += &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) -> bool {
        self.call_reentry_target();
        if self.fail_transfers().get() {
            return false;
        }
        self.move_balance(&from, &to, &amount)
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        self.call_reentry_target();
        if self.fail_transfers().get() {
            return false;
        }
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount)
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balances(&account).get()
    }

    #[endpoint(setFailTransfers)]
    fn set_fail_transfers(&self, fail: bool) {
        self.fail_transfers().set(fail);
    }

    /// When set, every transfer first calls `endpoint` on `target`, imitating
    /// a token with transfer hooks.
    #[endpoint(setReentryTarget)]
    fn set_reentry_target(&self, target: ManagedAddress, endpoint: ManagedBuffer) {
        self.reentry_target().set(&target);
        self.reentry_endpoint().set(&endpoint);
    }

    fn call_reentry_target(&self) {
        if self.reentry_target().is_empty() {
            return;
        }
        let target = self.reentry_target().get();
        let endpoint = self.reentry_endpoint().get();
        self.tx().to(&target).raw_call(endpoint).sync_call();
    }

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) -> bool {
        let balance = self.balances(from).get();
        if balance < *amount {
            return false;
        }
        self.balances(from).set(&(&balance - amount));
        self.balances(to).update(|to_balance| *to_balance += amount);
        true
    }

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("failTransfers")]
    fn fail_transfers(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("reentryTarget")]
    fn reentry_target(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("reentryEndpoint")]
    fn reentry_endpoint(&self) -> SingleValueMapper<ManagedBuffer>;
}
