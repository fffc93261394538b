/// Alert composition.
///
/// Submodules:
/// - `message` — WhatsApp message text for the daily rain alert.

pub mod message;
