//! JSON-line codec
//!
//! Output objects always carry `type` first, then the message's fields in
//! declaration order, with no whitespace.

use crate::error::{DecodeError, Error, Result};
use crate::message::Message;

/// Decode one line into whatever message its `type` names.
pub fn decode(line: &str) -> Result<Message> {
    serde_json::from_str(line.trim()).map_err(|e| Error::invalid_instruction(line, e))
}

/// Decode one line as an input instruction, rejecting output-only messages.
pub fn decode_instruction(line: &str) -> Result<Message> {
    let message = decode(line)?;
    if message.kind().is_output_only() {
        return Err(Error::invalid_instruction(
            line,
            DecodeError::OutputOnly(message.kind()),
        ));
    }
    Ok(message)
}

/// Encode a message as a single line of JSON.
pub fn encode(message: &Message) -> Result<String> {
    serde_json::to_string(message).map_err(Error::Encode)
}
