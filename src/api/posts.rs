use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::client::ApiClient;
use super::error::{ApiError, OnFailure};
use crate::models::{
    CommentRequest, CreatePostRequest, LikeResponse, Post, PostComment, PostInteractions,
    ShareResponse,
};

impl ApiClient {
    /// `POST posts`: text-only post.
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, ApiError> {
        let builder = self.authorized(Method::POST, &["posts"])?.json(request);
        self.execute_json(builder, OnFailure::Fixed("Failed to create post"))
            .await
    }

    /// `GET posts`: the feed.
    pub async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        let builder = self.authorized(Method::GET, &["posts"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load posts"))
            .await
    }

    /// `GET posts/my-posts`.
    pub async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        let builder = self.authorized(Method::GET, &["posts", "my-posts"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load your posts"))
            .await
    }

    /// `GET posts/user/{id}`.
    pub async fn user_posts(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        let builder = self.authorized(Method::GET, &["posts", "user", user_id])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load user posts"))
            .await
    }

    /// `GET posts/{id}`.
    pub async fn post(&self, post_id: &str) -> Result<Post, ApiError> {
        let builder = self.authorized(Method::GET, &["posts", post_id])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load post"))
            .await
    }

    /// `POST posts/upload`: multipart `description` + `file`.
    ///
    /// The file size is checked against the configured ceiling before the
    /// file is read, and the bytes read are checked again; an oversized file
    /// never reaches the network.
    pub async fn upload_post(&self, description: &str, file: &Path) -> Result<Post, ApiError> {
        let file_error = |source| ApiError::File {
            path: file.to_path_buf(),
            source,
        };
        let limit = self.max_upload_bytes();

        let size = tokio::fs::metadata(file).await.map_err(file_error)?.len();
        check_upload_size(file, size, limit)?;

        // The file may have grown since the metadata call.
        let bytes = tokio::fs::read(file).await.map_err(file_error)?;
        check_upload_size(file, bytes.len() as u64, limit)?;

        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(media_mime(file))
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        let form = Form::new()
            .text("description", description.to_string())
            .part("file", part);

        let builder = self
            .authorized(Method::POST, &["posts", "upload"])?
            .multipart(form);
        self.execute_json(builder, OnFailure::Fixed("Failed to upload post"))
            .await
    }

    /// `POST posts/{id}/like`: toggles; the response carries the new flag.
    pub async fn like_post(&self, post_id: &str) -> Result<LikeResponse, ApiError> {
        let builder = self.authorized(Method::POST, &["posts", post_id, "like"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to like post"))
            .await
    }

    /// `POST posts/{id}/comments`.
    pub async fn add_comment(&self, post_id: &str, content: &str) -> Result<PostComment, ApiError> {
        let body = CommentRequest {
            content: content.to_string(),
        };
        let builder = self
            .authorized(Method::POST, &["posts", post_id, "comments"])?
            .json(&body);
        self.execute_json(builder, OnFailure::Fixed("Failed to add comment"))
            .await
    }

    /// `GET posts/{id}/comments`.
    pub async fn comments(&self, post_id: &str) -> Result<Vec<PostComment>, ApiError> {
        let builder = self.authorized(Method::GET, &["posts", post_id, "comments"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load comments"))
            .await
    }

    /// `POST posts/{id}/share`.
    pub async fn share_post(&self, post_id: &str) -> Result<ShareResponse, ApiError> {
        let builder = self.authorized(Method::POST, &["posts", post_id, "share"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to share post"))
            .await
    }

    /// `GET posts/{id}/interactions`.
    pub async fn interactions(&self, post_id: &str) -> Result<PostInteractions, ApiError> {
        let builder = self.authorized(Method::GET, &["posts", post_id, "interactions"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load interactions"))
            .await
    }
}

/// MIME type for an upload, from its extension.
pub fn media_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

fn check_upload_size(path: &Path, size: u64, limit: u64) -> Result<(), ApiError> {
    if size <= limit {
        return Ok(());
    }
    tracing::warn!(path = %path.display(), size, limit, "Upload rejected locally");
    Err(ApiError::UploadTooLarge { size, limit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(media_mime(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(media_mime(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(media_mime(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn upload_size_at_limit_is_accepted() {
        let path = Path::new("clip.mp4");
        assert!(check_upload_size(path, 16, 16).is_ok());

        let err = check_upload_size(path, 17, 16).unwrap_err();
        assert!(matches!(
            err,
            ApiError::UploadTooLarge {
                size: 17,
                limit: 16
            }
        ));
    }
}
