#![allow(dead_code)]

use ifc_convert::error::ImportError;
use ifc_convert::importer::Importer;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SMALL_IFC: &str = "ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [ReferenceView_V1.2]'),'2;1');
FILE_NAME('wall.ifc','2025-06-12T10:00:00',(''),(''),'web-ifc','Blender BIM','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('2nxdYOD9H0ZwpWr7$Ygf0Z',$,'Demo',$,$,$,$,$,$);
#2=IFCWALL('1F3x9Kd2j5JxsoZ1B0nHkV',$,'Wall 1',$,$,$,$,$,$);
ENDSEC;
END-ISO-10303-21;
";

/// A fresh directory under the system temp dir, removed on drop.
pub struct Scratch {
    pub dir: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "ifc-convert-{name}-{}-{n}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Hands the input back unchanged and counts calls.
#[derive(Default)]
pub struct EchoImporter {
    pub calls: Cell<usize>,
}

impl Importer for EchoImporter {
    fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ImportError> {
        self.calls.set(self.calls.get() + 1);
        Ok(bytes.to_vec())
    }
}

/// Always fails with the given message.
pub struct FailingImporter(pub &'static str);

impl Importer for FailingImporter {
    fn process(&self, _bytes: &[u8]) -> Result<Vec<u8>, ImportError> {
        Err(ImportError::Other {
            message: self.0.to_string(),
        })
    }
}

pub fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}
