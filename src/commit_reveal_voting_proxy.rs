#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use crate::types::{Phase, SlashOutcome, VoterRecord, WinningOutcome};

pub struct CommitRevealVotingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CommitRevealVotingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CommitRevealVotingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CommitRevealVotingProxyMethods { wrapped_tx: tx }
    }
}

pub struct CommitRevealVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> CommitRevealVotingProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token_address: Arg0,
        commit_deadline: Arg1,
        reveal_deadline: Arg2,
        required_stake: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&token_address)
            .argument(&commit_deadline)
            .argument(&reveal_deadline)
            .argument(&required_stake)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> CommitRevealVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn commit<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        weight: Arg0,
        commitment: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("commit")
            .argument(&weight)
            .argument(&commitment)
            .original_result()
    }

    pub fn reveal<
        Arg0: ProxyArg<u8>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        vote: Arg0,
        weight: Arg1,
        secret: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("reveal")
            .argument(&vote)
            .argument(&weight)
            .argument(&secret)
            .original_result()
    }

    pub fn claim_refund(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimRefund")
            .original_result()
    }

    pub fn slash_unrevealed<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        recipient: Arg0,
        voters: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, MultiValue2<ManagedAddress<Env::Api>, SlashOutcome>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("slashUnrevealed")
            .argument(&recipient)
            .argument(&voters)
            .original_result()
    }

    pub fn withdraw_tokens<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        recipient: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawTokens")
            .argument(&recipient)
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw_egld<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        recipient: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawEgld")
            .argument(&recipient)
            .argument(&amount)
            .original_result()
    }

    pub fn compute_commitment<
        Arg0: ProxyArg<u8>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        vote: Arg0,
        weight: Arg1,
        secret: Arg2,
        voter: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("computeCommitment")
            .argument(&vote)
            .argument(&weight)
            .argument(&secret)
            .argument(&voter)
            .original_result()
    }

    pub fn winning_outcome(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, WinningOutcome> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWinningOutcome")
            .original_result()
    }

    pub fn get_voter_record<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        voter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<VoterRecord<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoterRecord")
            .argument(&voter)
            .original_result()
    }

    pub fn get_locked_weight<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        voter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLockedWeight")
            .argument(&voter)
            .original_result()
    }

    pub fn get_token_custody(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenCustody")
            .original_result()
    }

    pub fn get_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<ManagedAddress<Env::Api>, ManagedAddress<Env::Api>, u64, u64, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getConfig")
            .original_result()
    }

    pub fn current_phase(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Phase> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentPhase")
            .original_result()
    }

    pub fn commit_deadline(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCommitDeadline")
            .original_result()
    }

    pub fn reveal_deadline(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRevealDeadline")
            .original_result()
    }

    pub fn deposit_balance<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        voter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDepositBalance")
            .argument(&voter)
            .original_result()
    }

    pub fn admin(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmin")
            .original_result()
    }

    pub fn token_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenAddress")
            .original_result()
    }

    pub fn required_stake(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRequiredStake")
            .original_result()
    }

    pub fn yes_total(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getYesTotal")
            .original_result()
    }

    pub fn no_total(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNoTotal")
            .original_result()
    }

    pub fn revealed_total(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRevealedTotal")
            .original_result()
    }
}
