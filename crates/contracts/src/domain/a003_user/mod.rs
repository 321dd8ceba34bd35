pub mod dto;

pub use dto::User;
