#[path = "../common/mod.rs"]
mod common;

mod kite_tests;
