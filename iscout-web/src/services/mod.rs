//! Discovery pipeline services

pub mod claude_client;
pub mod discovery;
pub mod profile_parser;

pub use claude_client::{ClaudeClient, ClaudeError};
pub use discovery::{run_search, SearchOutcome, SearchParams};
pub use profile_parser::{parse_profiles, CandidateProfile};
