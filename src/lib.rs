#![no_std]

multiversx_sc::imports!();

pub mod ponzi_proxy;

// ============================================================
// Constants
// ============================================================

/// One EGLD in its smallest denomination.
///
/// The affiliate join fee is `affiliatesCount` times this amount, and each
/// address listed in a `joinPonzi` call is paid exactly this amount.
const AFFILIATE_UNIT: u64 = 1_000_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PonziContract {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, owner_role_price: BigUint) {
        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.owner_role_price().set(&owner_role_price);
        self.deadline().set(0u64);
        self.affiliates_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: addNewAffiliate
    // Owner hand-picks an affiliate without payment.
    // ========================================================

    #[endpoint(addNewAffiliate)]
    fn add_new_affiliate(&self, addr: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "Not the Owner!");

        // Count stays in lockstep with the set: a repeated add is a no-op.
        if self.affiliates().insert(addr.clone()) {
            self.affiliates_count().update(|count| *count += 1);
        }

        self.affiliate_added_event(&addr, &caller);
    }

    // ========================================================
    // ENDPOINT: setDeadline
    // Opens (or closes, with 0) the registration window. No
    // relation is enforced between the old and new value.
    // ========================================================

    #[endpoint(setDeadline)]
    fn set_deadline(&self, timestamp: u64) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "Not the Owner!");

        self.deadline().set(timestamp);

        self.deadline_set_event(timestamp);
    }

    // ========================================================
    // ENDPOINT: joinPonzi
    // Self-service registration while the window is open.
    //
    // With a non-empty address list the fee is
    // affiliatesCount * AFFILIATE_UNIT — the count in storage,
    // not the list length — and each listed address is paid one
    // unit. With an empty list there is no fee check at all.
    // ========================================================

    #[endpoint(joinPonzi)]
    #[payable("EGLD")]
    fn join_ponzi(&self, addresses: MultiValueEncoded<ManagedAddress>) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        let now = self.blockchain().get_block_timestamp();
        let deadline = self.deadline().get();
        require!(deadline != 0 && now <= deadline, "Registration not Active!");

        if !addresses.is_empty() {
            let fee = BigUint::from(AFFILIATE_UNIT) * self.affiliates_count().get();
            require!(payment == fee, "Invalid Ether amount");

            // Paid per occurrence: duplicates and the caller's own
            // address are legal list entries.
            let share = BigUint::from(AFFILIATE_UNIT);
            for addr in addresses {
                self.send().direct_egld(&addr, &share);
            }
        }

        if self.affiliates().insert(caller.clone()) {
            self.affiliates_count().update(|count| *count += 1);
        }

        self.affiliate_joined_event(&caller, &payment);
    }

    // ========================================================
    // ENDPOINT: buyOwnerRole
    // Any affiliate can buy the owner role for the configured
    // price. The payment stays on the contract balance; the
    // outgoing owner receives nothing.
    // ========================================================

    #[endpoint(buyOwnerRole)]
    #[payable("EGLD")]
    fn buy_owner_role(&self, new_owner: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(self.affiliates().contains(&caller), "Not an Affiliate!");

        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment == self.owner_role_price().get(),
            "Invalid Ether amount"
        );

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);

        self.owner_role_bought_event(&previous_owner, &new_owner, &payment);
    }

    // ========================================================
    // ENDPOINT: ownerWithdraw
    // Owner drains the custodied balance to any destination.
    // ========================================================

    #[endpoint(ownerWithdraw)]
    fn owner_withdraw(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "Not the Owner!");

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(amount <= balance, "Insufficient funds!");

        self.send().direct_egld(&to, &amount);

        self.owner_withdrawal_event(&to, &amount);
    }

    // ========================================================
    // ENDPOINT: acceptFunds
    // Plain value receipt. Always succeeds, no state change
    // beyond the balance credit.
    // ========================================================

    #[endpoint(acceptFunds)]
    #[payable("EGLD")]
    fn accept_funds(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.funds_received_event(&caller, &payment);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getDeadline)]
    fn get_deadline(&self) -> u64 {
        self.deadline().get()
    }

    #[view(getAffiliatesCount)]
    fn get_affiliates_count(&self) -> u64 {
        self.affiliates_count().get()
    }

    #[view(getOwnerRolePrice)]
    fn get_owner_role_price(&self) -> BigUint {
        self.owner_role_price().get()
    }

    #[view(isAffiliate)]
    fn is_affiliate(&self, addr: &ManagedAddress) -> bool {
        self.affiliates().contains(addr)
    }

    #[view(getAffiliates)]
    fn get_affiliates(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.affiliates().len();
        let start = from as usize;
        let end = core::cmp::min(start + count as usize, total);

        for (idx, affiliate) in self.affiliates().iter().enumerate() {
            if idx >= start && idx < end {
                result.push(affiliate);
            }
            if idx >= end {
                break;
            }
        }
        result
    }

    #[view(getContractBalance)]
    fn get_contract_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("affiliateAdded")]
    fn affiliate_added_event(
        &self,
        #[indexed] affiliate: &ManagedAddress,
        #[indexed] added_by: &ManagedAddress,
    );

    #[event("deadlineSet")]
    fn deadline_set_event(&self, #[indexed] deadline: u64);

    #[event("affiliateJoined")]
    fn affiliate_joined_event(
        &self,
        #[indexed] affiliate: &ManagedAddress,
        payment: &BigUint,
    );

    #[event("ownerRoleBought")]
    fn owner_role_bought_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
        price: &BigUint,
    );

    #[event("ownerWithdrawal")]
    fn owner_withdrawal_event(
        &self,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("fundsReceived")]
    fn funds_received_event(
        &self,
        #[indexed] from: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("ownerRolePrice")]
    fn owner_role_price(&self) -> SingleValueMapper<BigUint>;

    // ── Roles ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("affiliates")]
    fn affiliates(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("affiliatesCount")]
    fn affiliates_count(&self) -> SingleValueMapper<u64>;

    // ── Registration window ──

    #[storage_mapper("deadline")]
    fn deadline(&self) -> SingleValueMapper<u64>;
}
