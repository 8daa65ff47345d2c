//! Bidirectional translation between the neutral contract and the
//! OpenAI-compatible chat-completion wire format.
//!
//! Both directions are pure; the client composes them around the transport:
//! `to_wire_request` → POST → `parse_body` → `from_wire_response`.

pub mod request;
pub mod response;

pub use request::{map_role_from_wire, map_role_to_wire, to_wire_request};
pub use response::{from_wire_response, parse_body, ToolCallMode};
