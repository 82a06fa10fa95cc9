pub mod base64;
pub mod errors;

pub use base64::decode;
pub use base64::encode;
pub use errors::FormatError;
