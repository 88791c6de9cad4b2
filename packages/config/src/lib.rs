// ABOUTME: Configuration constants shared by the todo service packages
// ABOUTME: Keeps environment variable names and defaults in one place

pub mod constants;
