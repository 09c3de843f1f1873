// Page behavior module: the two things the script does on page-ready.
//
// Architecture:
// - model.rs: marker constants and persisted behavior tuning
// - dismiss.rs: delayed single-pass sweep that closes visible notices
// - gate.rs: click interception requiring confirmation before default actions

pub mod dismiss;
pub mod gate;
pub mod model;
