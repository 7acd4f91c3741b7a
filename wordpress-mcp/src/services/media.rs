use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use wordpress_mcp_client::types::{MediaItem, decode};
use wordpress_mcp_client::{ApiError, FileUpload, Method, QueryParams, RequestOptions, WpApi};

use super::crud::{Crud, EntityConfig, Resource, defined_fields};
use super::envelope::ResponseEnvelope;
use crate::schemas::media::{
    CreateMediaParams, DeleteMediaParams, EditMediaMetadataParams, GetMediaParams,
    ListMediaParams, UpdateMediaParams,
};

const MEDIA_ENDPOINT: &str = "/wp/v2/media";
const LABEL: &str = "media item";

const UPDATABLE: &[&str] = &[
    "title",
    "status",
    "alt_text",
    "caption",
    "description",
    "post",
    "author",
    "slug",
    "comment_status",
    "ping_status",
];

const METADATA_FIELDS: &[&str] = &["alt_text", "caption", "description", "title"];

impl Resource for MediaItem {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Title: {}, Type: {}, URL: {}",
            self.id, self.title, self.media_type, self.source_url
        )
    }

    fn details(&self) -> Vec<String> {
        let mut fields = vec![
            format!("ID: {}", self.id),
            format!("Title: {}", self.title),
            format!("Media type: {}", self.media_type),
            format!("MIME type: {}", self.mime_type),
            format!("URL: {}", self.source_url),
        ];
        if let Some(date) = &self.date {
            fields.push(format!("Uploaded: {date}"));
        }
        if !self.alt_text.is_empty() {
            fields.push(format!("Alt text: {}", self.alt_text));
        }
        if !self.caption.rendered.is_empty() {
            fields.push(format!("Caption: {}", self.caption));
        }
        if !self.description.rendered.is_empty() {
            fields.push(format!("Description: {}", self.description));
        }
        if let Some(post) = self.post.filter(|p| *p != 0) {
            fields.push(format!("Attached to: {post}"));
        }
        fields
    }
}

/// Guess a MIME type from a file extension.
fn guess_mime_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Where the uploaded bytes come from.
enum UploadSource<'a> {
    Path(&'a str),
    Base64 { data: &'a str, file_name: &'a str },
}

/// Pick exactly one byte source from the parameters.
fn upload_source(params: &CreateMediaParams) -> Result<UploadSource<'_>, String> {
    match (&params.file_path, &params.data_base64) {
        (Some(_), Some(_)) => Err("provide either file_path or data_base64, not both".to_string()),
        (None, None) => Err("provide file_path or data_base64".to_string()),
        (Some(path), None) if path.trim().is_empty() => Err("file_path must not be empty".to_string()),
        (Some(path), None) => Ok(UploadSource::Path(path)),
        (None, Some(data)) => match params.file_name.as_deref() {
            Some(file_name) if !file_name.trim().is_empty() => {
                Ok(UploadSource::Base64 { data, file_name })
            }
            _ => Err("file_name is required with data_base64".to_string()),
        },
    }
}

/// Read the bytes of the chosen source and attach the metadata fields.
async fn build_upload(
    params: &CreateMediaParams,
    source: UploadSource<'_>,
) -> Result<FileUpload, ApiError> {
    let (file_name, bytes) = match source {
        UploadSource::Path(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|e| ApiError::Io {
                path: path.to_string(),
                detail: e.to_string(),
            })?;
            let name = params
                .file_name
                .clone()
                .or_else(|| {
                    Path::new(path)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                })
                .ok_or_else(|| ApiError::Serialization {
                    detail: format!("cannot derive a file name from {path}"),
                })?;
            (name, bytes)
        }
        UploadSource::Base64 { data, file_name } => {
            let bytes = STANDARD
                .decode(data.trim())
                .map_err(|e| ApiError::Serialization {
                    detail: format!("invalid base64 data: {e}"),
                })?;
            (file_name.to_string(), bytes)
        }
    };

    let metadata = defined_fields(params)?;
    let fields = QueryParams::normalize(&metadata)
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Ok(FileUpload {
        mime_type: params
            .mime_type
            .clone()
            .unwrap_or_else(|| guess_mime_type(&file_name).to_string()),
        file_name,
        bytes,
        fields,
    })
}

/// Media library operations.
pub struct MediaService {
    api: Arc<dyn WpApi>,
    crud: Crud<MediaItem>,
}

impl MediaService {
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        let config = EntityConfig::new(LABEL, MEDIA_ENDPOINT).with_update_method(Method::POST);
        Self {
            crud: Crud::new(Arc::clone(&api), config),
            api,
        }
    }

    pub async fn list(&self, params: &ListMediaParams) -> ResponseEnvelope {
        match QueryParams::from_serializable(params) {
            Ok(query) => self.crud.list(query, &[]).await,
            Err(e) => ResponseEnvelope::failure("list", LABEL, e),
        }
    }

    pub async fn get(&self, params: &GetMediaParams) -> ResponseEnvelope {
        self.crud.get(&params.id.to_string()).await
    }

    /// Upload a file as `multipart/form-data`.
    pub async fn create(&self, params: &CreateMediaParams) -> ResponseEnvelope {
        let source = match upload_source(params) {
            Ok(source) => source,
            Err(reason) => return ResponseEnvelope::failure("upload", LABEL, reason),
        };
        let upload = match build_upload(params, source).await {
            Ok(upload) => upload,
            Err(e) => return ResponseEnvelope::failure("upload", LABEL, e),
        };
        tracing::debug!(file = %upload.file_name, size = upload.bytes.len(), "uploading media");

        let result = self
            .api
            .call(MEDIA_ENDPOINT, RequestOptions::upload(upload))
            .await
            .and_then(|body| decode::<MediaItem>(MEDIA_ENDPOINT, body));
        match result {
            Ok(item) => {
                let mut blocks = vec![format!("Uploaded {LABEL}: {}", item.summary())];
                blocks.extend(item.details());
                ResponseEnvelope::success(blocks)
            }
            Err(e) => ResponseEnvelope::failure("upload", LABEL, e),
        }
    }

    pub async fn update(&self, params: &UpdateMediaParams) -> ResponseEnvelope {
        match defined_fields(params) {
            Ok(changes) => {
                self.crud
                    .update(&params.id.to_string(), changes, UPDATABLE)
                    .await
            }
            Err(e) => ResponseEnvelope::failure("update", LABEL, e),
        }
    }

    pub async fn edit_metadata(&self, params: &EditMediaMetadataParams) -> ResponseEnvelope {
        match defined_fields(params) {
            Ok(changes) => {
                self.crud
                    .update(&params.id.to_string(), changes, METADATA_FIELDS)
                    .await
            }
            Err(e) => ResponseEnvelope::failure("update", LABEL, e),
        }
    }

    pub async fn delete(&self, params: &DeleteMediaParams) -> ResponseEnvelope {
        self.crud
            .delete(
                &params.id.to_string(),
                QueryParams::new().with("force", params.force),
            )
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> CreateMediaParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn mime_type_from_extension() {
        assert_eq!(guess_mime_type("photo.JPG"), "image/jpeg");
        assert_eq!(guess_mime_type("clip.mp4"), "video/mp4");
        assert_eq!(guess_mime_type("blob"), "application/octet-stream");
    }

    async fn upload(value: serde_json::Value) -> Result<FileUpload, ApiError> {
        let params = params(value);
        let source = upload_source(&params).unwrap();
        build_upload(&params, source).await
    }

    #[tokio::test]
    async fn base64_upload_carries_metadata_fields() {
        let upload = upload(json!({
            "data_base64": STANDARD.encode(b"hello"),
            "file_name": "hello.txt",
            "alt_text": "Greeting",
            "post": 12
        }))
        .await
        .unwrap();

        assert_eq!(upload.bytes, b"hello");
        assert_eq!(upload.mime_type, "text/plain");
        assert!(upload.fields.contains(&("alt_text".to_string(), "Greeting".to_string())));
        assert!(upload.fields.contains(&("post".to_string(), "12".to_string())));
        assert!(upload.fields.contains(&("status".to_string(), "inherit".to_string())));
        assert!(!upload.fields.iter().any(|(k, _)| k == "file_name"));
    }

    #[tokio::test]
    async fn file_upload_reads_local_path() {
        let path = std::env::temp_dir().join("wordpress-mcp-upload-test.png");
        tokio::fs::write(&path, [1u8, 2, 3]).await.unwrap();

        let upload = upload(json!({ "file_path": path.to_string_lossy() }))
            .await
            .unwrap();

        assert_eq!(upload.file_name, "wordpress-mcp-upload-test.png");
        assert_eq!(upload.mime_type, "image/png");
        assert_eq!(upload.bytes, vec![1, 2, 3]);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("wordpress-mcp-no-such-file.png");
        let path = path.to_string_lossy().into_owned();

        let err = upload(json!({ "file_path": path })).await.unwrap_err();

        match &err {
            ApiError::Io { path: failed, .. } => assert_eq!(failed, &path),
            other => panic!("expected an io error, got {other:?}"),
        }
        assert!(err.is_expected());
        assert!(err.to_string().starts_with(&format!("Failed to read {path}:")));
    }

    #[tokio::test]
    async fn bad_base64_is_a_serialization_error() {
        let err = upload(json!({ "data_base64": "%%%", "file_name": "x.bin" }))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Serialization { .. }));
        assert!(err.to_string().contains("invalid base64"));
    }

    #[test]
    fn invalid_sources_are_rejected() {
        let reason = |value| upload_source(&params(value)).err().unwrap();

        assert!(reason(json!({})).contains("file_path or data_base64"));
        assert!(reason(json!({ "file_path": "a.png", "data_base64": "aGk=" })).contains("not both"));
        assert!(reason(json!({ "file_path": "  " })).contains("must not be empty"));
        assert!(reason(json!({ "data_base64": "aGk=" })).contains("file_name is required"));
        assert!(reason(json!({ "data_base64": "aGk=", "file_name": "" })).contains("file_name is required"));
    }
}
