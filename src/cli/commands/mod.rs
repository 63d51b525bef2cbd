pub mod codes;
pub mod config;
pub mod init;
pub mod preview;
pub mod transform;
