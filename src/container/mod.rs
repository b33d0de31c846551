//! Daily container counts.
//!
//! Each store's opener submits one count per day: donations received, how
//! full the trailer is, and the supplies on hand. Dispatch reviews the day's
//! submissions, sees which stores have not reported, and exports the lot as
//! CSV.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
