// Titulares: headline analytics for news pageview exports
//
// This is the library root. Each module corresponds to one stage of the
// report: traffic reconciliation, title analysis, classification, and the
// enriched report itself.

pub mod classify;
pub mod config;
pub mod entities;
pub mod nlp;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod traffic;
