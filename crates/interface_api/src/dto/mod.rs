//! Request and response bodies

pub mod claims;
pub mod submissions;
pub mod profile;
