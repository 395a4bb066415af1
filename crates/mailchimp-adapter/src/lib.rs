/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Mailchimp adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod resources;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    MailchimpClient,
    MailchimpError,
    Result,
};

// Re-export the namespace tree
pub use resources::{
    Automations,
    Campaigns,
    Conversations,
    Ecommerce,
    EcommerceOrders,
    EcommerceProducts,
    FileManager,
    Lists,
    Mailchimp,
    NestedResource,
    Resource,
    Root,
    SubResource,
};

// The dispatcher speaks reqwest's method type
pub use reqwest::Method;
