//! # MasterBlog Shared
//!
//! Wire types shared by the server and any client of the posts API.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, FieldError};
