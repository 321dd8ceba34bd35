pub mod dto;

pub use dto::DiningTable;
