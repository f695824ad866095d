//! File listings (`RetFilesInfo`).

use bytes::Buf;
use music_proto::{FileInfo, RetFilesInfo};
use serde::Serialize;
use tracing::debug;

use crate::error::DataResult;
use crate::metadata::ResponseMetadata;
use crate::response::{decode_message, Response, ResponseKind};

/// One file available for download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub file_name: String,
    pub save_path: String,
    pub suffix: String,
    /// Size exactly as sent by the service
    pub size: String,
    pub url: String,
    /// Inline preview image, base64 encoded (often empty)
    pub image_base64: String,
    pub attributes: Vec<String>,
}

impl FileEntry {
    /// Size in bytes, when the service sent a plain integer.
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.trim().parse().ok()
    }
}

impl From<FileInfo> for FileEntry {
    fn from(info: FileInfo) -> Self {
        Self {
            file_name: info.file_name,
            save_path: info.save_path,
            suffix: info.suffix,
            size: info.size,
            url: info.file_url,
            image_base64: info.img_base64,
            attributes: info.attributes,
        }
    }
}

/// Files in the order the service listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileManifest {
    pub entries: Vec<FileEntry>,
}

impl FileManifest {
    pub fn decode<B: Buf>(buf: B) -> DataResult<Response<Self>> {
        let message: RetFilesInfo = decode_message(ResponseKind::FilesInfo, buf)?;
        Self::from_message(message)
    }

    pub fn from_message(message: RetFilesInfo) -> DataResult<Response<Self>> {
        let metadata = ResponseMetadata::from_request(message.request.as_ref());

        Response::build(ResponseKind::FilesInfo, metadata, move |_| {
            let entries: Vec<FileEntry> = message.file_infos.into_iter().map(FileEntry::from).collect();
            debug!(files = entries.len(), "Decoded file listing");
            Ok(Self { entries })
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry sizes that parse as integers.
    pub fn total_size_bytes(&self) -> u64 {
        self.entries.iter().filter_map(FileEntry::size_bytes).sum()
    }
}
