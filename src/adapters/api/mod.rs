//! API boundary decoding - turns loosely shaped JSON into crate types.

mod payload;

pub use payload::{decode_list, decode_list_strict, ensure_array, ListPayload, WRAPPER_KEYS};
