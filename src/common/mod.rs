pub mod error;
pub mod query;
pub mod response;
pub mod storage;
