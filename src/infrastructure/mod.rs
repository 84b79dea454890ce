pub mod audio;
pub mod llm;
pub mod observability;
pub mod process;
pub mod providers;
pub mod speech;
pub mod storage;
pub mod workspace;
