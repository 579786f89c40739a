// Adapters layer: transports around the verifier (HTTP server, wire DTOs, embedded page).

pub mod assets;
pub mod dto;
pub mod http;
