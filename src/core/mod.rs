pub mod add;
pub mod aggregate;
pub mod backup;
pub mod del;
pub mod edit;
pub mod log;
pub mod parse;
