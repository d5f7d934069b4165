//! JSON file implementation of [`ReservationStore`].

use std::ffi::OsString;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reservas_app::ports::ReservationStore;
use reservas_domain::error::ReservasError;
use reservas_domain::reservation::Reservation;

use crate::error::StorageError;

const EMPTY_DOCUMENT: &[u8] = b"[]\n";

/// Reservation store backed by one pretty-printed JSON array on disk.
///
/// Saves write a sibling `*.tmp` file and rename it over the document, so a
/// reader sees either the old or the new collection, never a partial one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the document at `path`, creating it as an empty array (along with
    /// missing parent directories) if it does not exist yet. An existing file
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be inspected or created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        match tokio::fs::metadata(&path).await {
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(&path, EMPTY_DOCUMENT).await?;
                tracing::info!(path = %path.display(), "created empty reservation document");
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Self { path })
    }

    /// Use the document at `path` as-is, without bootstrapping it.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

async fn replace(temp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(temp, bytes).await?;
    tokio::fs::rename(temp, path).await
}

impl ReservationStore for JsonFileStore {
    fn load_all(&self) -> impl Future<Output = Result<Vec<Reservation>, ReservasError>> + Send {
        let path = self.path.clone();
        async move {
            let bytes = tokio::fs::read(&path).await.map_err(StorageError::from)?;
            let records: Vec<Reservation> =
                serde_json::from_slice(&bytes).map_err(StorageError::Decode)?;
            tracing::debug!(path = %path.display(), count = records.len(), "loaded reservations");
            Ok(records)
        }
    }

    fn save_all(
        &self,
        records: &[Reservation],
    ) -> impl Future<Output = Result<(), ReservasError>> + Send {
        let path = self.path.clone();
        let encoded = serde_json::to_vec_pretty(records);
        let count = records.len();
        async move {
            let mut bytes = encoded.map_err(StorageError::Encode)?;
            bytes.push(b'\n');

            let temp = temp_path(&path);
            if let Err(err) = replace(&temp, &path, &bytes).await {
                match tokio::fs::remove_file(&temp).await {
                    Err(cleanup) if cleanup.kind() != ErrorKind::NotFound => {
                        tracing::warn!(path = %temp.display(), error = %cleanup, "stale temp file left behind");
                    }
                    _ => {}
                }
                return Err(StorageError::from(err).into());
            }

            tracing::debug!(path = %path.display(), count, "saved reservations");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservas_domain::id::ReservationId;
    use reservas_domain::reservation::ReservationFields;
    use serde_json::json;

    /// Unique path under the system temp dir, removed on drop.
    struct TempDoc(PathBuf);

    impl TempDoc {
        fn new() -> Self {
            Self(std::env::temp_dir().join(format!("reservas-{}", uuid::Uuid::new_v4())))
        }

        fn file(&self) -> PathBuf {
            self.0.join("reservas.json")
        }
    }

    impl Drop for TempDoc {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn reservation(id: &str, hotel: &str) -> Reservation {
        Reservation::new(
            ReservationId::from(id),
            ReservationFields::default()
                .hotel(hotel)
                .num_huespedes(2)
                .fecha_inicio("2024-01-01")
                .fecha_fin("2024-01-05"),
        )
    }

    #[tokio::test]
    async fn should_create_empty_document_when_missing() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::open(tmp.file()).await.unwrap();

        assert!(store.load_all().await.unwrap().is_empty());
        assert_eq!(std::fs::read(tmp.file()).unwrap(), EMPTY_DOCUMENT);
    }

    #[tokio::test]
    async fn should_leave_existing_document_untouched_on_open() {
        let tmp = TempDoc::new();
        std::fs::create_dir_all(&tmp.0).unwrap();
        std::fs::write(tmp.file(), r#"[{"id": "1", "hotel": "Plaza"}]"#).unwrap();

        let store = JsonFileStore::open(tmp.file()).await.unwrap();
        let records = store.load_all().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "1");
        assert_eq!(records[0].hotel(), Some("Plaza"));
    }

    #[tokio::test]
    async fn should_reload_saved_collection_in_order() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::open(tmp.file()).await.unwrap();
        let records = vec![reservation("b", "Sol"), reservation("a", "Plaza")];

        store.save_all(&records).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), records);
        assert!(!temp_path(&tmp.file()).exists());
    }

    #[tokio::test]
    async fn should_keep_pass_through_fields() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::open(tmp.file()).await.unwrap();
        let mut record = reservation("1", "Plaza");
        record.fields.insert("titular".into(), json!("Ana"));
        record.fields.insert("extras".into(), json!({"cuna": true}));

        store.save_all(std::slice::from_ref(&record)).await.unwrap();

        let reloaded = store.load_all().await.unwrap();
        assert_eq!(reloaded, vec![record]);
    }

    #[tokio::test]
    async fn should_load_and_save_loosely_typed_records_verbatim() {
        let tmp = TempDoc::new();
        std::fs::create_dir_all(&tmp.0).unwrap();
        let document = json!([
            {"id": "1", "hotel": "Plaza", "num_huespedes": 2},
            {"id": "2", "hotel": null, "num_huespedes": "3", "fecha_inicio": 20_240_101}
        ]);
        std::fs::write(tmp.file(), document.to_string()).unwrap();
        let store = JsonFileStore::open(tmp.file()).await.unwrap();

        let records = store.load_all().await.unwrap();
        assert_eq!(records.len(), 2);
        store.save_all(&records).await.unwrap();

        let text = std::fs::read_to_string(tmp.file()).unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap(), document);
    }

    #[tokio::test]
    async fn should_remove_temp_file_when_replace_fails() {
        let tmp = TempDoc::new();
        // A non-empty directory where the document should be makes the rename fail.
        std::fs::create_dir_all(tmp.file().join("occupied")).unwrap();
        let store = JsonFileStore::at(tmp.file());

        assert!(matches!(
            store.save_all(&[reservation("1", "Plaza")]).await,
            Err(ReservasError::StorageUnavailable(_))
        ));
        assert!(!temp_path(&tmp.file()).exists());
    }

    #[tokio::test]
    async fn should_write_pretty_json_array() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::open(tmp.file()).await.unwrap();

        store
            .save_all(&[reservation("1", "Plaza")])
            .await
            .unwrap();

        let text = std::fs::read_to_string(tmp.file()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"1\""));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["hotel"], json!("Plaza"));
    }

    #[tokio::test]
    async fn should_report_corrupt_data_for_malformed_document() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::open(tmp.file()).await.unwrap();
        std::fs::write(tmp.file(), "{ not json").unwrap();

        assert!(matches!(
            store.load_all().await,
            Err(ReservasError::CorruptData(_))
        ));
    }

    #[tokio::test]
    async fn should_report_corrupt_data_when_document_is_not_an_array() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::open(tmp.file()).await.unwrap();
        std::fs::write(tmp.file(), r#"{"id": "1"}"#).unwrap();

        assert!(matches!(
            store.load_all().await,
            Err(ReservasError::CorruptData(_))
        ));
    }

    #[tokio::test]
    async fn should_report_storage_unavailable_when_document_missing() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::at(tmp.file());

        assert!(matches!(
            store.load_all().await,
            Err(ReservasError::StorageUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn should_report_storage_unavailable_when_directory_missing_on_save() {
        let tmp = TempDoc::new();
        let store = JsonFileStore::at(tmp.file());

        assert!(matches!(
            store.save_all(&[]).await,
            Err(ReservasError::StorageUnavailable(_))
        ));
    }
}
