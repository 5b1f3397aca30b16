pub mod account;
pub mod audit;
pub mod email;
pub mod identity;
pub mod password;
