pub mod dashboard;
pub mod options;
pub mod seed;
pub mod table;
