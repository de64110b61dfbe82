// Accounts and stateless bearer sessions.
// Register/login issue HS256 tokens; the guard verifies them on every
// protected route. There is no server-side revocation: a token lives until exp.

pub mod guard;
pub mod handlers;
pub mod password;
pub mod service;
pub mod tokens;
pub mod validation;
