pub mod catalog;
pub mod prices;
pub mod products;
pub mod refresh;
pub mod seed;
