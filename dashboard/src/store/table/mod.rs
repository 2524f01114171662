pub mod aggregate;
pub mod filter;
pub mod lead_table;
pub mod table;
pub mod user_table;
