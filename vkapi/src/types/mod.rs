mod envelope;
pub use self::envelope::{ApiErrorBody, ErrorEnvelope, RequestParam};
