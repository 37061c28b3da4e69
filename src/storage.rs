use crate::model::ScheduleDocument;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

pub trait Storage {
    /// Charge un document de planning depuis un support.
    fn load(&self) -> anyhow::Result<ScheduleDocument>;
    /// Sauvegarde de manière atomique (dernier écrivain gagnant).
    fn save(&self, document: &ScheduleDocument) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Charge le document, ou crée un document par défaut (dates par défaut,
    /// roster vide) nommé `default_name` si le fichier n'existe pas encore.
    pub fn load_or_create(&self, default_name: &str) -> anyhow::Result<ScheduleDocument> {
        if self.path.exists() {
            return self.load();
        }
        info!(path = %self.path.display(), "no schedule document, creating defaults");
        let document = ScheduleDocument::new(default_name);
        self.save(&document)?;
        Ok(document)
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<ScheduleDocument> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let document: ScheduleDocument =
            serde_json::from_slice(&data).with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(document)
    }

    fn save(&self, document: &ScheduleDocument) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(document)?;
        write_atomic(&self.path, &json)
    }
}

/// Écrit via un fichier temporaire voisin puis renomme.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
