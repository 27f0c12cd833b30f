pub mod store_card;
