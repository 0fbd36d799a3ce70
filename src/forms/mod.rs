pub mod auth;
pub mod contact;
pub mod faq;
pub mod payment;
