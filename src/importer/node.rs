use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::{debug, info};

use super::{Importer, ImporterConfig};
use crate::error::ImportError;

const BRIDGE_SCRIPT: &str = include_str!("bridge.js");

/// Package providing `IfcImporter`, relative to the modules directory.
pub const FRAGMENTS_PACKAGE: &str = "@thatopen/fragments";

/// Runs `IfcImporter` from `@thatopen/fragments` under Node.js.
///
/// IFC bytes are piped to the child's stdin. The fragment buffer is written by
/// the child to a scratch file and read back, so library logging can never end
/// up in the result. Anything the child prints on stderr becomes the error
/// detail when it exits unsuccessfully.
#[derive(Debug, Clone)]
pub struct NodeImporter {
    config: ImporterConfig,
    modules_dir: PathBuf,
    node: OsString,
}

impl NodeImporter {
    #[must_use]
    pub fn new<P: AsRef<Path>>(
        config: ImporterConfig,
        modules_dir: P,
        node: impl Into<OsString>,
    ) -> Self {
        let modules_dir = std::path::absolute(modules_dir.as_ref())
            .unwrap_or_else(|_| modules_dir.as_ref().to_path_buf());

        Self {
            config,
            modules_dir,
            node: node.into(),
        }
    }

    /// Checks that the fragments package and the asset directory exist.
    pub fn check_assets(&self) -> Result<(), ImportError> {
        let package = self.modules_dir.join(FRAGMENTS_PACKAGE);
        if !package.is_dir() {
            return Err(ImportError::MissingAssets { path: package });
        }
        if !self.config.asset_path.is_dir() {
            return Err(ImportError::MissingAssets {
                path: self.config.asset_path.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    fn command(&self, result_path: &Path) -> Command {
        let mut command = Command::new(&self.node);
        command
            .arg("-e")
            .arg(BRIDGE_SCRIPT)
            .env("FRAG_MODULES_DIR", &self.modules_dir)
            .env("FRAG_WASM_PATH", self.config.asset_base())
            .env("FRAG_OUTPUT_PATH", result_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Importer for NodeImporter {
    fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ImportError> {
        self.check_assets()?;

        let program = self.node.to_string_lossy().to_string();
        debug!(
            "spawning {program} (modules: {}, wasm: {})",
            self.modules_dir.display(),
            self.config.asset_base()
        );

        let result_file = ResultFile::new();
        let mut child = self
            .command(&result_file.path)
            .spawn()
            .map_err(|source| ImportError::Spawn { program, source })?;

        let mut stdin = child.stdin.take().ok_or_else(|| ImportError::Other {
            message: "importer stdin was not captured".to_string(),
        })?;

        // Feed stdin while stdout and stderr are drained, or a large model fills the pipes.
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || {
                let result = stdin.write_all(bytes);
                drop(stdin);
                result
            });
            let output = child.wait_with_output();
            let written = writer.join().unwrap_or_else(|_| {
                Err(std::io::Error::other("importer stdin writer panicked"))
            });
            (output, written)
        });

        let output = output?;

        if !output.status.success() {
            return Err(ImportError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        // A child that exits cleanly may close stdin early; only then is it an error.
        written?;

        if !output.stdout.is_empty() {
            debug!("importer stdout: {}", String::from_utf8_lossy(&output.stdout).trim());
        }
        let fragments = std::fs::read(&result_file.path)?;

        info!("importer produced {} bytes", fragments.len());
        Ok(fragments)
    }
}

/// Scratch file the child writes its result to, removed on drop.
struct ResultFile {
    path: PathBuf,
}

impl ResultFile {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "ifc-convert-{}-{n}.frag",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();
        Self { path }
    }
}

impl Drop for ResultFile {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
    }
}
