// Chat: caller-supplied history plus a new message, answered in one Gemini call.
// There is no server-side memory; the caller resends history every turn.

pub mod conversation;
pub mod handlers;
pub mod responder;
