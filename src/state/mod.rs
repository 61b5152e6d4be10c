//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` holds the plain data model and the pure transition function;
//! `store` wires that model to durable storage, the notification sink, and
//! the network. Consumers read the session reactively and mutate it only
//! through the store's named operations.

pub mod session;
pub mod store;
