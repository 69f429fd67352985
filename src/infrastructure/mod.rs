pub mod audio;
pub mod language;
pub mod observability;
pub mod storage;
