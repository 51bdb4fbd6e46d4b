pub mod citizens;
pub mod complaints;
