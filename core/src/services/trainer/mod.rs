//! Trainer directory service

mod service;


pub use service::TrainerService;
