//! Public marketing pages and the chrome around them.

pub mod contact;
pub mod footer;
pub mod landing;
pub mod login;
pub mod navbar;
