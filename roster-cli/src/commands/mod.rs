pub mod info;
pub mod list;
pub mod search;
pub mod shell;
pub mod show;
pub mod sign_in;
