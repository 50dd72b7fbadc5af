pub mod api;
pub mod controller;
pub mod error;
pub mod state;
pub mod view;

pub use controller::{GenerateController, GenerateSettings, SubmitOutcome};
pub use error::GenerateError;
pub use view::GenerateProjectPage;
