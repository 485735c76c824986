//! Documentation-comment extraction and style guide assembly.
//!
//! Stages, in order: [`walker`] finds style files, [`parser`] extracts and
//! parses `/** ... */` blocks, [`markup`] loads referenced example markup,
//! [`assemble`] arranges the records, and [`render`] writes the result.
//! [`pipeline::scan`] runs everything up to assembly.

pub mod assemble;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod toc;
pub mod walker;
