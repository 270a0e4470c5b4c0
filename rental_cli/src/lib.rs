pub mod args;
pub mod catalog;
pub mod demo;
pub mod logic;
