//! Property-based tests for grammar and emission guarantees

mod grammar;
