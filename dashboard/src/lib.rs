pub mod consts;
pub mod export;
pub mod model;
pub mod settings;
pub mod store;
pub mod utils;
