//! Service layer: clients for the external collaborators this service
//! fronts.

pub mod directory;

pub use directory::DirectoryClient;
