pub mod table;
pub mod types;

pub use table::BankTable;
