pub mod profile;
pub use profile::ProfileRecord;
