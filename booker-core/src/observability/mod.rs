pub mod logging;
pub mod trace_context;

pub use logging::init_tracing;
pub use trace_context::{inject_request_id, TracedClientExt, TracedRequest, REQUEST_ID_HEADER};
