use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::PathBuf,
};

use serde::{Serialize, de::DeserializeOwned};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, info};

use super::StoreError;

/// A homogeneous list of records persisted as one JSON array file.
///
/// Reads go straight to disk on every call. Every mutation is a full
/// read-modify-write cycle held under `write_lock`, and the new array is
/// written to a sibling temp file and renamed over the original, so a
/// concurrent reader sees either the old or the new array, never a mix.
///
/// Only one `RecordStore` may own a given path; two instances on the same
/// file do not share the lock.
pub struct RecordStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Opens the store, creating parent directories and an empty array file
    /// if nothing exists at `path` yet. Existing content is left untouched.
    pub async fn init<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let store = Self::new(path);

        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::io(parent, source))?;
        }

        let exists = fs::try_exists(&store.path)
            .await
            .map_err(|source| StoreError::io(&store.path, source))?;
        if !exists {
            store.write_all(&[]).await?;
            info!(path = %store.path.display(), "created empty record store");
        }

        Ok(store)
    }

    pub async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(source) => return Err(StoreError::io(&self.path, source)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Appends `record` once `check` has accepted it against the records
    /// already stored. A rejected record leaves the file untouched.
    pub async fn append<E, C>(&self, record: T, check: C) -> Result<(), E>
    where
        C: FnOnce(&[T], &T) -> Result<(), E>,
        E: From<StoreError>,
    {
        self.update(|records| {
            check(records.as_slice(), &record)?;
            records.push(record);
            Ok(())
        })
        .await
    }

    /// Applies `f` to the current records and persists the result.
    ///
    /// If `f` fails nothing is written and its error is returned as is.
    pub async fn update<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.list_all().await?;
        let result = f(&mut records)?;
        self.write_all(&records).await?;

        debug!(path = %self.path.display(), records = records.len(), "record store written");
        Ok(result)
    }

    async fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        let data = serde_json::to_vec(records).map_err(StoreError::Serialize)?;
        let tmp = self.temp_path();

        let mut file = fs::File::create(&tmp)
            .await
            .map_err(|source| StoreError::io(&tmp, source))?;
        file.write_all(&data)
            .await
            .map_err(|source| StoreError::io(&tmp, source))?;
        file.sync_all()
            .await
            .map_err(|source| StoreError::io(&tmp, source))?;
        drop(file);

        fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::io(&self.path, source))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, path::Path, sync::Arc};

    use serde::Deserialize;
    use uuid::Uuid;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: Uuid,
        text: String,
    }

    fn note(text: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            text: text.to_string(),
        }
    }

    fn accept(_: &[Note], _: &Note) -> Result<(), StoreError> {
        Ok(())
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("record_store_{}", Uuid::new_v4()))
            .join("notes.json")
    }

    async fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir).await;
        }
    }

    #[tokio::test]
    async fn init_creates_empty_array() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = RecordStore::<Note>::init(&path).await?;

        assert!(store.list_all().await?.is_empty());
        assert_eq!(fs::read_to_string(&path).await?, "[]");

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn init_keeps_existing_records() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = RecordStore::<Note>::init(&path).await?;
        store.append(note("kept"), accept).await?;

        let reopened = RecordStore::<Note>::init(&path).await?;
        let notes = reopened.list_all().await?;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "kept");

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let path = temp_path();
        let store = RecordStore::<Note>::new(&path);

        assert!(matches!(store.list_all().await, Err(StoreError::NotFound(_))));
        assert!(matches!(store.append(note("lost"), accept).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = RecordStore::<Note>::init(&path).await?;
        fs::write(&path, br#"[{"id": "not-closed""#).await?;

        assert!(matches!(store.list_all().await, Err(StoreError::Parse { .. })));
        // a failed read must not rewrite the file
        assert!(store.append(note("never written"), accept).await.is_err());
        assert_eq!(fs::read_to_string(&path).await?, r#"[{"id": "not-closed""#);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn sequential_appends_are_all_listed() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = RecordStore::<Note>::init(&path).await?;

        for i in 0..10 {
            store.append(note(&format!("note {i}")), accept).await?;
        }

        let notes = store.list_all().await?;
        assert_eq!(notes.len(), 10);
        assert_eq!(notes[0].text, "note 0");
        assert_eq!(notes[9].text, "note 9");
        let ids: HashSet<_> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 10);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn shrinking_rewrite_leaves_no_trailing_bytes() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = RecordStore::<Note>::init(&path).await?;
        store.append(note(&"long ".repeat(50)), accept).await?;
        store.append(note("short"), accept).await?;

        store
            .update(|notes| {
                notes.remove(0);
                Ok::<_, StoreError>(())
            })
            .await?;

        let raw = fs::read_to_string(&path).await?;
        let parsed: Vec<Note> = serde_json::from_str(&raw)?;
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "short");

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn rejected_append_writes_nothing() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = RecordStore::<Note>::init(&path).await?;
        store.append(note("only once"), accept).await?;

        let result = store
            .append(note("only once"), |notes, candidate| {
                if notes.iter().any(|n| n.text == candidate.text) {
                    return Err(anyhow::anyhow!("duplicate text"));
                }
                Ok(())
            })
            .await;
        assert!(result.is_err());
        assert_eq!(store.list_all().await?.len(), 1);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_update_writes_nothing() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = RecordStore::<Note>::init(&path).await?;
        store.append(note("first"), accept).await?;

        let result = store
            .update(|notes| {
                notes.clear();
                Err::<(), _>(anyhow::anyhow!("rejected"))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(store.list_all().await?.len(), 1);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_lose_nothing() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = Arc::new(RecordStore::<Note>::init(&path).await?);

        let mut written = HashSet::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let record = note(&format!("concurrent {i}"));
            written.insert(record.id);
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.append(record, accept).await }));
        }
        for handle in handles {
            handle.await??;
        }

        let stored: HashSet<_> = store.list_all().await?.into_iter().map(|n| n.id).collect();
        assert_eq!(stored, written);

        cleanup(&path).await;
        Ok(())
    }
}
