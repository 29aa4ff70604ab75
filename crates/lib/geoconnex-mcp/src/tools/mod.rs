//! MCP tool modules.
//!
//! Tools are grouped by purpose: open-ended graph exploration and the fixed
//! river-to-dataset lookups.

mod explore;
mod lookup;
