use axum::response::Response;

use errors::ServerError;

pub(crate) mod cmd;
mod config;
pub(crate) mod errors;
pub(crate) mod routes;
mod server;
mod templates;
mod trace;

pub(crate) mod pages {
    pub mod contact;
    pub mod versions;
}

#[cfg(test)]
pub(crate) mod test_helpers;

const CONTACT_STYLES: &str = include_str!("../../static/contact.css");

type ResponseResult<T = Response> = Result<T, ServerError>;
