pub mod auth;
pub mod classifier;
pub mod notify;
pub mod script;
pub mod sequencer;
pub mod storage;
