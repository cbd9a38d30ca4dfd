#![no_std]

multiversx_sc::imports!();

pub mod marketplace_proxy;

/// Minimal fixed-price NFT marketplace used by the vault's integration
/// tests. Sellers list an NFT at a price, buyers pay exactly that price, and
/// the contract itself buys any NFT offered to it at `offerPrice`.
#[multiversx_sc::contract]
pub trait MockMarketplace {
    #[init]
    #[payable("EGLD")]
    fn init(&self, offer_price: BigUint) {
        self.offer_price().set(&offer_price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(listNft)]
    #[payable("*")]
    fn list_nft(&self, price: BigUint) {
        let payment = self.call_value().single_esdt();
        require!(payment.token_nonce > 0, "not an nft");

        let seller = self.blockchain().get_caller();
        self.listing_seller(&payment.token_identifier, payment.token_nonce)
            .set(&seller);
        self.listing_price(&payment.token_identifier, payment.token_nonce)
            .set(&price);
    }

    #[endpoint(buyNft)]
    #[payable("EGLD")]
    fn buy_nft(&self, token: TokenIdentifier, nonce: u64) {
        require!(
            !self.listing_seller(&token, nonce).is_empty(),
            "not listed"
        );
        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment == self.listing_price(&token, nonce).get(),
            "wrong payment"
        );

        let buyer = self.blockchain().get_caller();
        let seller = self.listing_seller(&token, nonce).take();
        self.listing_price(&token, nonce).clear();

        self.send()
            .direct_esdt(&buyer, &token, nonce, &BigUint::from(1u64));
        self.send().direct_egld(&seller, &payment);
    }

    #[endpoint(acceptOffer)]
    #[payable("*")]
    fn accept_offer(&self) {
        let payment = self.call_value().single_esdt();
        require!(payment.amount == 1u64, "wrong payment");

        let offer = self.offer_price().get();
        require!(offer > 0u64, "no offer");
        require!(
            self.blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
                >= offer,
            "no offer"
        );

        let seller = self.blockchain().get_caller();
        self.send().direct_egld(&seller, &offer);
    }

    #[view(getListingPrice)]
    fn get_listing_price(&self, token: TokenIdentifier, nonce: u64) -> BigUint {
        self.listing_price(&token, nonce).get()
    }

    #[view(getOfferPrice)]
    #[storage_mapper("offerPrice")]
    fn offer_price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("listingSeller")]
    fn listing_seller(
        &self,
        token: &TokenIdentifier,
        nonce: u64,
    ) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("listingPrice")]
    fn listing_price(&self, token: &TokenIdentifier, nonce: u64) -> SingleValueMapper<BigUint>;
}
