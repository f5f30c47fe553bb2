use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Record;

/// Post entity - a single social-media-style post.
///
/// A post without an `id` is transient: it has not been stored yet and no
/// read operation can see it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Option<i64>,
    pub author: Option<String>,
    pub post_content: Option<String>,
    pub image_url: Option<String>,
    pub created_date: Option<NaiveDateTime>,
    pub modified_date: Option<NaiveDateTime>,
}

impl Post {
    /// Create a new transient post.
    pub fn new(
        author: Option<String>,
        post_content: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: None,
            author,
            post_content,
            image_url,
            created_date: None,
            modified_date: None,
        }
    }

    /// Overwrite the caller-editable fields. Absent values clear the field.
    pub fn replace_content(
        &mut self,
        author: Option<String>,
        post_content: Option<String>,
        image_url: Option<String>,
    ) {
        self.author = author;
        self.post_content = post_content;
        self.image_url = image_url;
    }
}

impl Record for Post {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn on_create(&mut self, now: NaiveDateTime) {
        self.created_date = Some(now);
        self.modified_date = Some(now);
    }

    fn on_update(&mut self, now: NaiveDateTime) {
        // Never move modified_date backwards if the wall clock does.
        let floor = self.modified_date.max(self.created_date);
        self.modified_date = Some(floor.map_or(now, |floor| floor.max(now)));
    }
}
