//! Gym session booking route handlers

pub mod gym;
