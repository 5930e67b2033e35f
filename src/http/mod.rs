mod client;

pub use client::ServerClient;
