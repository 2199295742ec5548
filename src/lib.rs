pub mod cli;
pub mod db;
pub mod error;
pub mod logging;
pub mod server;
pub mod tasks;

#[cfg(test)]
pub mod test_utils;
