pub mod company;
pub mod progress;
pub mod status;

pub use company::CompanyRecord;
pub use progress::Progress;
pub use status::{status_label, LeadStatus, StatusMap};
