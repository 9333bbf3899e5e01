pub mod application;

pub use application::workflow::ApprovalWorkflow;
