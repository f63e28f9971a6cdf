//! The contact page's content and the form behind it: who to call, where
//! the offices are, and how a filled-in form reaches the business.

pub mod directory;
pub mod form;
pub mod submit;

pub use directory::{ContactMethod, CONTACT_METHODS, OFFICE_ADDRESSES};
pub use form::{ContactField, ContactForm};
pub use submit::{ContactSink, Notice, NoticeKind, ScriptEndpoint};
