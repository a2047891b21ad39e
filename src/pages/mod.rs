//! Page components the shell switches between.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod ppt;
pub mod word;
