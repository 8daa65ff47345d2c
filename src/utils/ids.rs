use uuid::Uuid;

/// Fresh id for a tool call the server did not name, e.g. `call_3f2a...`.
pub fn tool_call_id() -> String {
    format!("call_{}", Uuid::new_v4().simple())
}

/// Correlation id for one adapter call (logs and events only; never sent).
pub fn request_id() -> String {
    Uuid::new_v4().to_string()
}
