pub mod config;
pub mod dashboard;
pub mod init;
pub mod login;
pub mod logout;
pub mod passwd;
pub mod shell;
