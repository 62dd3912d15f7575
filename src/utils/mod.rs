pub mod layout;
pub mod storage;
