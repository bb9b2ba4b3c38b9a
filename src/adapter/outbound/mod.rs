//! Outbound adapters: implementations of ports.

pub mod mesh_json;
