/*
[INPUT]:  HTTP client configuration and typed errors
[OUTPUT]: The request dispatcher and its result types
[POS]:    HTTP layer - transport and error mapping
[UPDATE]: When dispatch behavior or error types change
*/

pub mod client;
pub mod error;

pub use client::{ClientConfig, MailchimpClient};
pub use error::{MailchimpError, Result};
