pub mod assessment;
pub mod document;
pub mod medication;
pub mod profile;

pub use assessment::*;
pub use document::*;
pub use medication::*;
pub use profile::*;
