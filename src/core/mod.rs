pub mod add;
pub mod classifier;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod list;
pub mod log;
pub mod show;
pub mod validator;
