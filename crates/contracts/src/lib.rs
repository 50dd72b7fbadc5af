//! Types shared between the frontend and the code generation service.

pub mod usecases;
