pub mod chatbot;
pub mod stripe;
