pub mod graph;
pub mod input;
pub mod keywords;
pub mod parse;
pub mod report;
pub mod script;
pub mod tokens;

#[cfg(test)]
mod commands_tests;
