/*
[INPUT]:  File and folder identifiers
[OUTPUT]: File manager API calls
[POS]:    Resource layer - file manager namespace
[UPDATE]: When file manager endpoints change
*/

use std::sync::Arc;

use crate::http::MailchimpClient;
use crate::resources::resource::Resource;

const FILES: &str = "file-manager/files";
const FOLDERS: &str = "file-manager/folders";

/// The file manager: stored files and the folders that organize them.
#[derive(Debug, Clone)]
pub struct FileManager {
    /// file-manager/files
    pub files: Resource,
    /// file-manager/folders
    pub folders: Resource,
}

impl FileManager {
    pub(crate) fn new(client: Arc<MailchimpClient>) -> Self {
        Self {
            files: Resource::new(client.clone(), FILES),
            folders: Resource::new(client, FOLDERS),
        }
    }
}
