pub mod job;
pub mod job_status;
pub mod site;

pub use job::{JobPosting, NewJob};
pub use job_status::JobStatus;
pub use site::Site;
