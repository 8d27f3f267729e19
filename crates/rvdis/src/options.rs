//! Disassembly options.

use std::path::{Path, PathBuf};

/// Default cap on bytes read from the input, matching a single 1 KiB read.
pub const DEFAULT_MAX_BYTES: usize = 1024;

/// Where instruction bytes come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    #[default]
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Interpret a CLI path argument; `-` means standard input.
    #[must_use]
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }
}

/// Options for a disassembly run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisasmOptions {
    /// Input source.
    pub input: InputSource,
    /// Maximum number of bytes to read (0 = whole input).
    pub max_bytes: usize,
    /// Style diagnostics with terminal colors.
    pub color: bool,
}

impl Default for DisasmOptions {
    fn default() -> Self {
        Self {
            input: InputSource::default(),
            max_bytes: DEFAULT_MAX_BYTES,
            color: false,
        }
    }
}

impl DisasmOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set input source.
    #[must_use]
    pub fn with_input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    /// Set maximum number of bytes to read (0 = whole input).
    #[must_use]
    pub const fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Enable or disable colored diagnostics.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Byte limit, or `None` when the whole input should be read.
    #[must_use]
    pub const fn byte_limit(&self) -> Option<usize> {
        if self.max_bytes == 0 {
            None
        } else {
            Some(self.max_bytes)
        }
    }
}
