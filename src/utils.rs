pub mod logging;
pub mod store;
