//! Access log line tokenization.
//!
//! Only the first field of a line is interpreted: it is the client IP address
//! and the aggregation key. Everything after it (timestamp, request line,
//! status, user agent) is tokenized but ignored.

mod tokenizer;

// Re-export public API
pub use tokenizer::{ip_token, tokenize, FIELD_DELIMITER};
