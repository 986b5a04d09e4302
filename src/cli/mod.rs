pub mod hooks;
pub mod init;
pub mod render;
pub mod serve;
pub mod start;
pub mod status;
