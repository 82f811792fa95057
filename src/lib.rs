// Jaundice: how charged is this news article?
//
// This is the library root. Each module corresponds to one stage of the
// article pipeline or to the surfaces (terminal, HTTP) built on top of it.

pub mod adapters;
pub mod config;
pub mod normalizer;
pub mod output;
pub mod processing;
pub mod text;

#[cfg(feature = "web")]
pub mod web;
