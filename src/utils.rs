pub mod env;
pub mod initialization;
