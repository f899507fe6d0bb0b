// src/lib.rs

//! City list crawler library

pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod services;
pub mod utils;
