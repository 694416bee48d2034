mod submission;

pub use submission::{NewSubmission, Submission};
