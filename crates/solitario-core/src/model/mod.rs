pub mod card;
pub mod rank;
pub mod suit;
