pub mod avatar;
pub mod badge;
pub mod typing;
