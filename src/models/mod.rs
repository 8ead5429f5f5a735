//! Data models for the Staycation API

pub mod booking;
pub mod room;
pub mod user;
