// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::InputText;
use crate::utils::Date;
use std::path::PathBuf;

/// A local file that has yet to be uploaded.
#[derive(Clone, Debug, PartialEq)]
pub enum Uploadable {
    /// A file on disk.
    Path(PathBuf),
    /// In-memory contents, uploaded under the given file name.
    Bytes { name: String, data: Vec<u8> },
}

impl Uploadable {
    /// The file name the server will see.
    pub fn name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "file".to_string()),
            Self::Bytes { name, .. } => name.clone(),
        }
    }
}

/// A file already stored on the server, such as one received in an earlier message.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteFile {
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
}

/// Where the contents of a media item come from.
#[derive(Clone, Debug, PartialEq)]
pub enum FileSource {
    Upload(Uploadable),
    Remote(RemoteFile),
}

impl From<Uploadable> for FileSource {
    fn from(file: Uploadable) -> Self {
        Self::Upload(file)
    }
}

impl From<RemoteFile> for FileSource {
    fn from(file: RemoteFile) -> Self {
        Self::Remote(file)
    }
}

impl From<PathBuf> for FileSource {
    fn from(path: PathBuf) -> Self {
        Self::Upload(Uploadable::Path(path))
    }
}

impl From<&str> for FileSource {
    fn from(path: &str) -> Self {
        Self::Upload(Uploadable::Path(PathBuf::from(path)))
    }
}

/// A photo or video to be sent as part of a paid media message.
#[derive(Clone, Debug, PartialEq)]
pub enum InputMedia {
    Photo {
        source: FileSource,
        has_spoiler: bool,
    },
    Video {
        source: FileSource,
        thumb: Option<Uploadable>,
        width: i32,
        height: i32,
        duration: f64,
        supports_streaming: bool,
        has_spoiler: bool,
    },
}

impl InputMedia {
    pub fn photo(source: impl Into<FileSource>) -> Self {
        Self::Photo {
            source: source.into(),
            has_spoiler: false,
        }
    }

    pub fn video(source: impl Into<FileSource>) -> Self {
        Self::Video {
            source: source.into(),
            thumb: None,
            width: 0,
            height: 0,
            duration: 0.0,
            supports_streaming: false,
            has_spoiler: false,
        }
    }

    /// Cover the media with a spoiler animation.
    pub fn spoiler(mut self, value: bool) -> Self {
        match &mut self {
            Self::Photo { has_spoiler, .. } | Self::Video { has_spoiler, .. } => {
                *has_spoiler = value
            }
        }
        self
    }

    /// Thumbnail for a video. Has no effect on photos.
    pub fn thumb(mut self, file: Uploadable) -> Self {
        if let Self::Video { thumb, .. } = &mut self {
            *thumb = Some(file);
        }
        self
    }

    /// Dimensions of a video. Has no effect on photos.
    pub fn size(mut self, w: i32, h: i32) -> Self {
        if let Self::Video { width, height, .. } = &mut self {
            *width = w;
            *height = h;
        }
        self
    }

    /// Duration of a video, in seconds. Has no effect on photos.
    pub fn duration(mut self, seconds: f64) -> Self {
        if let Self::Video { duration, .. } = &mut self {
            *duration = seconds;
        }
        self
    }

    /// Whether a video may be played before it is fully downloaded.
    pub fn supports_streaming(mut self, value: bool) -> Self {
        if let Self::Video {
            supports_streaming, ..
        } = &mut self
        {
            *supports_streaming = value;
        }
        self
    }
}

/// Construct a paid media message, sent with
/// [`Client::send_paid_media`](crate::Client::send_paid_media).
#[derive(Clone, Debug, PartialEq)]
pub struct InputPaidMedia {
    pub(crate) stars_amount: i64,
    pub(crate) media: Vec<InputMedia>,
    pub(crate) caption: Option<InputText>,
    pub(crate) payload: Option<String>,
    pub(crate) silent: bool,
    pub(crate) reply_to: Option<i32>,
    pub(crate) quote: Option<InputText>,
    pub(crate) quote_offset: Option<i32>,
    pub(crate) schedule_date: Option<Date>,
    pub(crate) protect_content: bool,
    pub(crate) invert_media: bool,
    pub(crate) business_connection_id: Option<String>,
}

impl InputPaidMedia {
    /// Media that can only be viewed after paying `stars_amount` Telegram Stars.
    pub fn new(stars_amount: i64, media: Vec<InputMedia>) -> Self {
        Self {
            stars_amount,
            media,
            caption: None,
            payload: None,
            silent: false,
            reply_to: None,
            quote: None,
            quote_offset: None,
            schedule_date: None,
            protect_content: false,
            invert_media: false,
            business_connection_id: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<InputText>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Bot-defined payload, not shown to the user.
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Send the message without a notification sound.
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn reply_to(mut self, message_id: Option<i32>) -> Self {
        self.reply_to = message_id;
        self
    }

    /// Quote part of the message being replied to, starting at `offset`.
    pub fn quote(mut self, text: impl Into<InputText>, offset: Option<i32>) -> Self {
        self.quote = Some(text.into());
        self.quote_offset = offset;
        self
    }

    pub fn schedule_date(mut self, date: Option<Date>) -> Self {
        self.schedule_date = date;
        self
    }

    /// Prevent the message from being forwarded and saved.
    pub fn protect_content(mut self, protect: bool) -> Self {
        self.protect_content = protect;
        self
    }

    /// Show the caption above the media instead of below it.
    pub fn invert_media(mut self, invert: bool) -> Self {
        self.invert_media = invert;
        self
    }

    /// Send the message on behalf of the business account behind this connection.
    pub fn business_connection_id(mut self, id: impl Into<String>) -> Self {
        self.business_connection_id = Some(id.into());
        self
    }
}
