// This file exposes the modules as public modules in the crate

pub mod tools;
pub mod wiki;
