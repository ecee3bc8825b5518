//! Read-only view over a member's bookings

mod service;

#[cfg(test)]
mod tests;

pub use service::TransactionService;
