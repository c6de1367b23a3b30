//! Inbound adapters that translate external requests into domain calls while
//! keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`]; any future inbound transport would sit
//! alongside it.

pub mod http;
