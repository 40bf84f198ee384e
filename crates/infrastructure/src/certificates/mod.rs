//! Certificate material stored on disk

mod file_provider;

pub use file_provider::FileCertificateProvider;
