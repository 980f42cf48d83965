// src/form/mod.rs
//! Client side of the contact pipeline

pub mod controller;


pub use controller::{
    Field, FormController, FormError, SubmissionStatus, FALLBACK_ERROR, SEND_FAILED,
    SUCCESS_CONFIRMATION,
};
