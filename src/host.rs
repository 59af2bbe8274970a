//! Host operating-system classification.
//!
//! The generator only distinguishes two OS classes; every host-conditional
//! choice (profile selection, debug-server kill command) is centralized on
//! this enum instead of string comparisons scattered across modules.

/// Closed set of operating-system classes the generator distinguishes.
///
/// Unknown platforms deliberately behave as Linux; this is a documented
/// default, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    Windows,
}

/// Shell invocation used to forcibly terminate a running OpenOCD server.
///
/// `args` is a JSON-array fragment spliced verbatim into the task template,
/// so the template can assemble command and arguments independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillCommand {
    pub command: &'static str,
    pub args: &'static str,
}

impl HostOs {
    /// Classify a raw platform string into an OS class.
    ///
    /// Matching is by lowercase substring: anything containing `windows` is
    /// Windows, everything else (including unrecognized platforms) is Linux.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.to_lowercase();
        if raw.contains("windows") {
            HostOs::Windows
        } else {
            HostOs::Linux
        }
    }

    /// Detect the class of the host this process is running on.
    pub fn detect() -> Self {
        Self::classify(std::env::consts::OS)
    }

    /// Profile document key for this OS class.
    pub fn key(&self) -> &'static str {
        match self {
            HostOs::Linux => "linux",
            HostOs::Windows => "windows",
        }
    }

    /// OS-appropriate invocation for killing a background OpenOCD process.
    pub fn kill_openocd(&self) -> KillCommand {
        match self {
            HostOs::Windows => KillCommand {
                command: "taskkill",
                args: r#""/IM","openocd.exe","/F""#,
            },
            HostOs::Linux => KillCommand {
                command: "pkill",
                args: r#""-f","openocd""#,
            },
        }
    }
}
