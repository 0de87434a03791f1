#[path = "mod_loader.rs"]
mod loader_tests;
