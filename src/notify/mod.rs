/// Outbound notification delivery.
///
/// Submodules:
/// - `twilio` — WhatsApp delivery through the Twilio Messages REST API.

pub mod twilio;
