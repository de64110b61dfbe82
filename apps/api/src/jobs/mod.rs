// Job postings: public reads, session-guarded writes, and the
// description generator that forwards a title to the completion API.

pub mod description;
pub mod handlers;
pub mod prompts;
pub mod service;
pub mod validation;
