pub mod document;
pub mod dto;
