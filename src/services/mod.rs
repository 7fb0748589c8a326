// src/services/mod.rs
pub mod anthropic;
pub mod chatbot;
pub mod model_client;
