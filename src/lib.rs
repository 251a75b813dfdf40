#![no_std]

multiversx_sc::imports!();

pub mod commit_reveal_voting_proxy;
pub mod errors;
pub mod escrow;
pub mod phase;
pub mod reentrancy;
pub mod token_proxy;
pub mod types;

use errors::*;
use types::{Phase, SlashOutcome, VoteChoice, VoterRecord, WinningOutcome};

// ============================================================
// Contract
// ============================================================

/// Binary commit-reveal vote weighted by locked tokens, with an EGLD stake
/// that is refunded on reveal and slashed otherwise.
#[multiversx_sc::contract]
pub trait CommitRevealVoting:
    phase::PhaseModule + escrow::EscrowModule + reentrancy::ReentrancyGuardModule
{
    // ========================================================
    // Init
    // ========================================================

    #[init]
    fn init(
        &self,
        token_address: ManagedAddress,
        commit_deadline: u64,
        reveal_deadline: u64,
        required_stake: BigUint,
    ) {
        require!(!token_address.is_zero(), ERR_INVALID_TOKEN);
        require!(commit_deadline < reveal_deadline, ERR_INVALID_DEADLINES);
        require!(required_stake > 0u64, ERR_ZERO_STAKE);

        let caller = self.blockchain().get_caller();
        self.admin().set(&caller);
        self.token_address().set(&token_address);
        self.commit_deadline().set(commit_deadline);
        self.reveal_deadline().set(reveal_deadline);
        self.required_stake().set(&required_stake);
        self.total_yes_weight().set(BigUint::zero());
        self.total_no_weight().set(BigUint::zero());
        self.total_revealed_weight().set(BigUint::zero());
    }

    // ========================================================
    // ENDPOINT: commit
    // Locks token weight and takes the exact stake.
    // ========================================================

    #[endpoint(commit)]
    #[payable("EGLD")]
    fn commit(&self, weight: BigUint, commitment: ManagedByteArray<Self::Api, 32>) {
        self.acquire_lock();

        let caller = self.blockchain().get_caller();
        // Checked before the phase so a second commit is always a validation error
        require!(self.voters(&caller).is_empty(), ERR_ALREADY_COMMITTED);
        self.require_phase(Phase::Commit);

        let payment = self.call_value().egld_value().clone_value();
        require!(payment == self.required_stake().get(), ERR_WRONG_STAKE);
        require!(weight > 0u64, ERR_ZERO_WEIGHT);
        require!(
            commitment != ManagedByteArray::new_from_bytes(&[0u8; 32]),
            ERR_INVALID_COMMITMENT
        );

        // ── Pull the weight first; nothing is recorded unless it arrives ──
        let own_address = self.blockchain().get_sc_address();
        let pulled: bool = self
            .tx()
            .to(&self.token_address().get())
            .typed(token_proxy::TokenProxy)
            .transfer_from(&caller, &own_address, &weight)
            .returns(ReturnsResult)
            .sync_call();
        require!(pulled, ERR_TOKEN_TRANSFER_FAILED);

        let record = VoterRecord {
            commitment: commitment.clone(),
            revealed: false,
            committed_at: self.blockchain().get_block_timestamp(),
            locked_weight: weight.clone(),
        };
        self.voters(&caller).set(&record);
        self.deposit_balance(&caller).update(|balance| *balance += &payment);

        self.commit_event(&caller, &commitment, &weight);

        self.release_lock();
    }

    // ========================================================
    // ENDPOINT: reveal
    // Opens the commitment, tallies it, then tries to refund
    // the stake. A failed refund never un-counts the vote.
    // ========================================================

    #[endpoint(reveal)]
    fn reveal(&self, vote: u8, weight: BigUint, secret: ManagedBuffer) {
        self.acquire_lock();
        self.require_phase(Phase::Reveal);

        let caller = self.blockchain().get_caller();
        require!(!self.voters(&caller).is_empty(), ERR_NO_COMMITMENT);
        let mut record = self.voters(&caller).get();
        require!(!record.revealed, ERR_ALREADY_REVEALED);
        require!(weight > 0u64, ERR_ZERO_WEIGHT);

        let choice = match VoteChoice::from_u8(vote) {
            Some(choice) => choice,
            None => sc_panic!(ERR_INVALID_VOTE),
        };

        let expected = self.compute_commitment(vote, &weight, &secret, &caller);
        require!(expected == record.commitment, ERR_COMMITMENT_MISMATCH);
        require!(weight == record.locked_weight, ERR_WEIGHT_MISMATCH);

        // ── Tally ──
        record.revealed = true;
        self.voters(&caller).set(&record);

        match choice {
            VoteChoice::Yes => self.total_yes_weight().update(|total| *total += &weight),
            VoteChoice::No => self.total_no_weight().update(|total| *total += &weight),
        }
        self.total_revealed_weight()
            .update(|total| *total += &weight);

        // ── Stake refund (best effort) ──
        let refunded = self.try_refund_deposit(&caller);

        self.reveal_event(&caller, choice, &weight, refunded);

        self.release_lock();
    }

    // ========================================================
    // ENDPOINT: claimRefund
    // Explicit retry for a refund that failed during reveal.
    // Unlike the reveal path, a failed transfer fails the call.
    // ========================================================

    #[endpoint(claimRefund)]
    fn claim_refund(&self) {
        self.acquire_lock();

        let caller = self.blockchain().get_caller();
        require!(!self.voters(&caller).is_empty(), ERR_NO_COMMITMENT);
        require!(self.voters(&caller).get().revealed, ERR_NOT_REVEALED);

        let balance = self.deposit_balance(&caller).get();
        require!(balance > 0u64, ERR_NOTHING_TO_REFUND);

        self.deposit_balance(&caller).clear();
        require!(
            self.try_send_egld(&caller, &balance),
            ERR_NATIVE_TRANSFER_FAILED
        );
        self.deposit_refunded_event(&caller, &balance);

        self.release_lock();
    }

    // ========================================================
    // ENDPOINT: slashUnrevealed
    // Admin-only, after the reveal window. Best effort per voter:
    // one failing transfer never blocks the rest of the batch.
    // ========================================================

    #[endpoint(slashUnrevealed)]
    fn slash_unrevealed(
        &self,
        recipient: ManagedAddress,
        voters: MultiValueEncoded<ManagedAddress>,
    ) -> MultiValueEncoded<MultiValue2<ManagedAddress, SlashOutcome>> {
        self.acquire_lock();
        self.require_admin();
        self.require_phase(Phase::Finished);
        require!(!recipient.is_zero(), ERR_INVALID_RECIPIENT);

        let mut outcomes = MultiValueEncoded::new();
        for voter in voters {
            let outcome = self.slash_voter(&voter, &recipient);
            outcomes.push((voter, outcome).into());
        }

        self.release_lock();
        outcomes
    }

    // ========================================================
    // ENDPOINTS: administrative sweep (Finished only)
    // ========================================================

    #[endpoint(withdrawTokens)]
    fn withdraw_tokens(&self, recipient: ManagedAddress, amount: BigUint) {
        self.acquire_lock();
        self.require_admin();
        self.require_phase(Phase::Finished);
        require!(!recipient.is_zero(), ERR_INVALID_RECIPIENT);

        require!(
            self.send_tokens(&recipient, &amount),
            ERR_TOKEN_TRANSFER_FAILED
        );

        self.release_lock();
    }

    #[endpoint(withdrawEgld)]
    fn withdraw_egld(&self, recipient: ManagedAddress, amount: BigUint) {
        self.acquire_lock();
        self.require_admin();
        self.require_phase(Phase::Finished);
        require!(!recipient.is_zero(), ERR_INVALID_RECIPIENT);

        require!(
            self.try_send_egld(&recipient, &amount),
            ERR_NATIVE_TRANSFER_FAILED
        );

        self.release_lock();
    }

    // ========================================================
    // INTERNAL: per-voter slashing
    // Storage is zeroed before each transfer and restored if
    // the transfer fails. The record is purged only once both
    // the deposit and the weight have left the contract.
    // ========================================================

    fn slash_voter(&self, voter: &ManagedAddress, recipient: &ManagedAddress) -> SlashOutcome {
        if self.voters(voter).is_empty() {
            return SlashOutcome::NotCommitted;
        }
        let mut record = self.voters(voter).get();
        if record.revealed {
            return SlashOutcome::Revealed;
        }

        let mut retained = false;

        let deposit = self.deposit_balance(voter).get();
        if deposit > 0u64 {
            self.deposit_balance(voter).clear();
            if self.try_send_egld(recipient, &deposit) {
                self.deposit_slashed_event(voter, recipient, &deposit);
            } else {
                self.deposit_balance(voter).set(&deposit);
                retained = true;
            }
        }

        if record.locked_weight > 0u64 {
            let weight = core::mem::replace(&mut record.locked_weight, BigUint::zero());
            self.voters(voter).set(&record);

            if self.send_tokens(recipient, &weight) {
                self.weight_slashed_event(voter, recipient, &weight);
            } else {
                record.locked_weight = weight;
                self.voters(voter).set(&record);
                self.weight_slash_failed_event(voter, recipient, &record.locked_weight);
                retained = true;
            }
        }

        if retained {
            return SlashOutcome::Retained;
        }

        self.voters(voter).clear();
        SlashOutcome::Slashed
    }

    // ========================================================
    // INTERNAL: helpers
    // ========================================================

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_ONLY_ADMIN);
    }

    fn length_prefix(&self, len: usize) -> u32 {
        match u32::try_from(len) {
            Ok(prefix) => prefix,
            Err(_) => sc_panic!(ERR_COMMITMENT_INPUT_TOO_LONG),
        }
    }

    fn send_tokens(&self, to: &ManagedAddress, amount: &BigUint) -> bool {
        self.tx()
            .to(&self.token_address().get())
            .typed(token_proxy::TokenProxy)
            .transfer(to, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    /// `keccak256(vote ‖ len(weight) ‖ weight ‖ len(secret) ‖ secret ‖ voter)`,
    /// lengths as 4-byte big-endian, weight as minimal big-endian bytes.
    #[view(computeCommitment)]
    fn compute_commitment(
        &self,
        vote: u8,
        weight: &BigUint,
        secret: &ManagedBuffer,
        voter: &ManagedAddress,
    ) -> ManagedByteArray<Self::Api, 32> {
        let weight_bytes = weight.to_bytes_be_buffer();

        let mut preimage = ManagedBuffer::new();
        preimage.append_bytes(&[vote]);
        preimage.append_u32_be(self.length_prefix(weight_bytes.len()));
        preimage.append(&weight_bytes);
        preimage.append_u32_be(self.length_prefix(secret.len()));
        preimage.append(secret);
        preimage.append(voter.as_managed_buffer());

        self.crypto().keccak256(&preimage)
    }

    #[view(getWinningOutcome)]
    fn winning_outcome(&self) -> WinningOutcome {
        let yes = self.total_yes_weight().get();
        let no = self.total_no_weight().get();
        if yes > no {
            WinningOutcome::Yes
        } else if no > yes {
            WinningOutcome::No
        } else {
            WinningOutcome::Tie
        }
    }

    #[view(getVoterRecord)]
    fn get_voter_record(&self, voter: &ManagedAddress) -> OptionalValue<VoterRecord<Self::Api>> {
        if self.voters(voter).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.voters(voter).get())
        }
    }

    #[view(getLockedWeight)]
    fn get_locked_weight(&self, voter: &ManagedAddress) -> BigUint {
        if self.voters(voter).is_empty() {
            return BigUint::zero();
        }
        self.voters(voter).get().locked_weight
    }

    #[view(getTokenCustody)]
    fn get_token_custody(&self) -> BigUint {
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&self.token_address().get())
            .typed(token_proxy::TokenProxy)
            .balance_of(&own_address)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue5<ManagedAddress, ManagedAddress, u64, u64, BigUint> {
        (
            self.admin().get(),
            self.token_address().get(),
            self.commit_deadline().get(),
            self.reveal_deadline().get(),
            self.required_stake().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("commit")]
    fn commit_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] commitment: &ManagedByteArray<Self::Api, 32>,
        weight: &BigUint,
    );

    #[event("reveal")]
    fn reveal_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] vote: VoteChoice,
        #[indexed] weight: &BigUint,
        refunded: bool,
    );

    #[event("weightSlashed")]
    fn weight_slashed_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("weightSlashFailed")]
    fn weight_slash_failed_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        weight: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTokenAddress)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRequiredStake)]
    #[storage_mapper("requiredStake")]
    fn required_stake(&self) -> SingleValueMapper<BigUint>;

    // ── Tally ──

    #[view(getYesTotal)]
    #[storage_mapper("totalYesWeight")]
    fn total_yes_weight(&self) -> SingleValueMapper<BigUint>;

    #[view(getNoTotal)]
    #[storage_mapper("totalNoWeight")]
    fn total_no_weight(&self) -> SingleValueMapper<BigUint>;

    #[view(getRevealedTotal)]
    #[storage_mapper("totalRevealedWeight")]
    fn total_revealed_weight(&self) -> SingleValueMapper<BigUint>;

    // ── Voters ──

    #[storage_mapper("voters")]
    fn voters(&self, voter: &ManagedAddress) -> SingleValueMapper<VoterRecord<Self::Api>>;
}
