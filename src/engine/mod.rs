//! Engine module: CLI surface, digest, and the sequential runner

pub mod arg_parser;
pub mod cli;
pub mod digest;
pub mod hashing;
pub mod sequential;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use digest::Digest;
pub use hashing::{digest_reader, sum_file};
pub use sequential::{sum_path, sum_stream};
pub use tools::{format_line, format_sum, write_line};
