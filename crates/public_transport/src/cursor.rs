//! Opaque page cursors: base64 of the decimal page index.
//!
//! A decoded page always has a successor, so `page + 1` can not overflow.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{RequestError, RequestResult};

pub fn encode_cursor(page: u32) -> String {
    STANDARD.encode(page.to_string())
}

pub fn decode_cursor(cursor: &str) -> RequestResult<u32> {
    let invalid = || RequestError::InvalidCursor(cursor.to_owned());
    let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
    let text = String::from_utf8(bytes).map_err(|_| invalid())?;
    let page = text.parse::<u32>().map_err(|_| invalid())?;
    if page == u32::MAX {
        return Err(invalid());
    }
    Ok(page)
}
