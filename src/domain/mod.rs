//! Business logic for the service, written against ports so it never depends on the HTTP
//! layer or the database directly.
//!
//! * `driving_ports` are the entry points adapters (like the router) call into
//! * `driven_ports` are what the domain needs from the outside world (like persistence)

pub mod todo;

#[cfg(test)]
mod test_util;
