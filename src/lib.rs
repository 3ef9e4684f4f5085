//! Landing Studio - AI-assisted landing page generation and modification
//!
//! Turns a natural-language description into a complete, self-contained HTML
//! landing page and then refines it through conversational instructions,
//! normalizing whatever the model returns into a well-formed document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
