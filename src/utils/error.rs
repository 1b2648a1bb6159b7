use std::{fmt, result};

use thiserror::Error;

/// A type alias for handling errors related to memsnap.
pub type Result<T> = result::Result<T, MemsnapError>;

/// Identifies the kernel interface behind a query, carried in
/// [`MemsnapError::KernelCallFailed`] so a failure always names the exact
/// request that went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelRequest {
    /// `host_statistics64` with the `HOST_VM_INFO64` flavor.
    HostVmInfo64,
    /// `sysctl` with the two-level name `[CTL_VM, VM_SWAPUSAGE]`.
    VmSwapUsage,
}

impl KernelRequest {
    /// The raw request code(s) handed to the kernel.
    pub fn code(self) -> &'static [i32] {
        match self {
            // HOST_VM_INFO64 flavor value.
            KernelRequest::HostVmInfo64 => &[4],
            // CTL_VM, VM_SWAPUSAGE.
            KernelRequest::VmSwapUsage => &[2, 5],
        }
    }
}

impl fmt::Display for KernelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelRequest::HostVmInfo64 => write!(f, "host_statistics64(HOST_VM_INFO64)"),
            KernelRequest::VmSwapUsage => write!(f, "sysctl(CTL_VM, VM_SWAPUSAGE)"),
        }
    }
}

/// An error that can occur while memsnap runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemsnapError {
    /// A kernel query returned a nonzero status.
    #[error("kernel call '{request}' failed, {errno}")]
    KernelCallFailed {
        request: KernelRequest,
        errno: String,
    },
    /// A conversion was requested with a unit symbol outside the table.
    #[error("unrecognized unit '{symbol}', expected one of B, KB, MB, GB or TB")]
    UnknownUnit { symbol: String },
    /// The current platform has no implementation for this query.
    #[error("{what} is not supported on this platform")]
    UnsupportedPlatform { what: &'static str },
    /// An error when there is an IO exception.
    #[error("IO exception, {0}")]
    InvalidIo(String),
    /// An error around reading or parsing the config file.
    #[error("configuration file error, {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for MemsnapError {
    fn from(err: std::io::Error) -> Self {
        MemsnapError::InvalidIo(err.to_string())
    }
}

impl From<toml_edit::de::Error> for MemsnapError {
    fn from(err: toml_edit::de::Error) -> Self {
        MemsnapError::InvalidConfig(err.to_string())
    }
}
