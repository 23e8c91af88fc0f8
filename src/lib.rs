pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod services;
pub mod templates;

#[cfg(test)]
pub mod test_utils;
