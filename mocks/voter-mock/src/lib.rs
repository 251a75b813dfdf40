#![no_std]

multiversx_sc::imports!();

pub mod voter_mock_proxy;

/// A contract that votes. Deployed without payable metadata it cannot take
/// plain EGLD transfers, which is how tests exercise the refund failure paths.
#[multiversx_sc::contract]
pub trait VoterMock {
    #[init]
    fn init(&self, voting_address: ManagedAddress) {
        self.voting_address().set(&voting_address);
    }

    #[endpoint(commit)]
    #[payable("EGLD")]
    fn commit(&self, weight: BigUint, commitment: ManagedByteArray<Self::Api, 32>) {
        let stake = self.call_value().egld_value().clone_value();
        self.tx()
            .to(&self.voting_address().get())
            .egld(&stake)
            .raw_call("commit")
            .argument(&weight)
            .argument(&commitment)
            .sync_call();
    }

    #[endpoint(reveal)]
    fn reveal(&self, vote: u8, weight: BigUint, secret: ManagedBuffer) {
        self.tx()
            .to(&self.voting_address().get())
            .raw_call("reveal")
            .argument(&vote)
            .argument(&weight)
            .argument(&secret)
            .sync_call();
    }

    #[endpoint(claimRefund)]
    fn claim_refund(&self) {
        self.tx()
            .to(&self.voting_address().get())
            .raw_call("claimRefund")
            .sync_call();
    }

    #[storage_mapper("votingAddress")]
    fn voting_address(&self) -> SingleValueMapper<ManagedAddress>;
}
