//! Route modules for the CMS server

pub mod documents;
pub mod health;
