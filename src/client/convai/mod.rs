//! Conversational AI operations

mod agents;
mod knowledge_base;
mod mcp;
mod settings;
mod telephony;
mod testing;
mod tools;
