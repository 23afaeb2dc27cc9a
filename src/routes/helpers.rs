use std::error::Error;

use serde::Serialize;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

/// `{ "success": true, "message": ... }`
#[derive(Serialize)]
pub struct SuccessBody<'a> {
    pub success: bool,
    pub message: &'a str,
}

impl<'a> SuccessBody<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// `{ "error": ... }`
#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}
