#[path = "mod_chart.rs"]
mod chart_tests;
