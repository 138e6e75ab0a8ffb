// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::utils::{self, Date};
use log::warn;
use oxigram_tl_types as tl;

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub raw: tl::types::MessageMediaPhoto,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub raw: tl::types::MessageMediaDocument,
}

/// A document carrying video attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Video {
    pub document: Document,
    pub raw_attrs: tl::types::DocumentAttributeVideo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    pub document: Document,
    pub raw_attrs: tl::types::DocumentAttributeSticker,
    animated: bool,
}

/// A tiny, heavily compressed preview of an image, sent inline with the message.
#[derive(Clone, Debug, PartialEq)]
pub struct StrippedThumbnail {
    pub data: Vec<u8>,
}

impl Photo {
    pub fn from_raw(photo: tl::enums::Photo) -> Self {
        Self {
            raw: tl::types::MessageMediaPhoto {
                spoiler: false,
                photo: Some(photo),
                ttl_seconds: None,
            },
        }
    }

    pub fn from_raw_media(photo: tl::types::MessageMediaPhoto) -> Self {
        Self { raw: photo }
    }

    pub fn id(&self) -> Option<i64> {
        use tl::enums::Photo as P;

        self.raw.photo.as_ref().map(|photo| match photo {
            P::Empty(photo) => photo.id,
            P::Photo(photo) => photo.id,
        })
    }

    /// Width and height of the largest size available.
    pub fn resolution(&self) -> Option<(i32, i32)> {
        match self.raw.photo.as_ref() {
            Some(tl::enums::Photo::Photo(photo)) => photo
                .sizes
                .iter()
                .filter_map(|size| match size {
                    tl::enums::PhotoSize::Size(size) => Some((size.w, size.h)),
                    _ => None,
                })
                .max_by_key(|(w, h)| w * h),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<Date> {
        match self.raw.photo.as_ref() {
            Some(tl::enums::Photo::Photo(photo)) => Some(utils::date(photo.date)),
            _ => None,
        }
    }

    /// Returns true if the photo is a spoiler.
    pub fn is_spoiler(&self) -> bool {
        self.raw.spoiler
    }

    /// Returns TTL seconds if the photo is self-destructive, None otherwise
    pub fn ttl_seconds(&self) -> Option<i32> {
        self.raw.ttl_seconds
    }
}

impl Document {
    pub fn from_raw(document: tl::enums::Document) -> Self {
        Self {
            raw: tl::types::MessageMediaDocument {
                nopremium: false,
                spoiler: false,
                video: false,
                round: false,
                voice: false,
                document: Some(document),
                ttl_seconds: None,
            },
        }
    }

    pub fn from_raw_media(document: tl::types::MessageMediaDocument) -> Self {
        Self { raw: document }
    }

    fn attributes(&self) -> &[tl::enums::DocumentAttribute] {
        match self.raw.document.as_ref() {
            Some(tl::enums::Document::Document(d)) => &d.attributes,
            _ => &[],
        }
    }

    pub fn id(&self) -> Option<i64> {
        use tl::enums::Document as D;

        self.raw.document.as_ref().map(|document| match document {
            D::Empty(document) => document.id,
            D::Document(document) => document.id,
        })
    }

    /// Return the file's name.
    ///
    /// If the file was uploaded with no file name, the returned string will be empty.
    pub fn name(&self) -> &str {
        self.attributes()
            .iter()
            .find_map(|attr| match attr {
                tl::enums::DocumentAttribute::Filename(attr) => Some(attr.file_name.as_ref()),
                _ => None,
            })
            .unwrap_or("")
    }

    /// Get the file's MIME type, if any.
    pub fn mime_type(&self) -> Option<&str> {
        match self.raw.document.as_ref() {
            Some(tl::enums::Document::Document(d)) => Some(d.mime_type.as_str()),
            _ => None,
        }
    }

    /// The date on which the file was created, if any.
    pub fn creation_date(&self) -> Option<Date> {
        match self.raw.document.as_ref() {
            Some(tl::enums::Document::Document(d)) => Some(utils::date(d.date)),
            _ => None,
        }
    }

    /// The size of the file.
    /// returns 0 if the document is empty.
    pub fn size(&self) -> i64 {
        match self.raw.document.as_ref() {
            Some(tl::enums::Document::Document(d)) => d.size,
            _ => 0,
        }
    }

    /// Returns true if the document is a spoiler
    pub fn is_spoiler(&self) -> bool {
        self.raw.spoiler
    }
}

impl Video {
    /// Interpret the document as a video, if it has video attributes.
    pub fn from_document(document: Document) -> Option<Self> {
        let raw_attrs = document.attributes().iter().find_map(|attr| match attr {
            tl::enums::DocumentAttribute::Video(video) => Some(video.clone()),
            _ => None,
        })?;
        Some(Self {
            document,
            raw_attrs,
        })
    }

    pub fn file_name(&self) -> Option<&str> {
        Some(self.document.name()).filter(|name| !name.is_empty())
    }

    pub fn width(&self) -> i32 {
        self.raw_attrs.w
    }

    pub fn height(&self) -> i32 {
        self.raw_attrs.h
    }

    /// Duration of the video, in seconds.
    pub fn duration(&self) -> f64 {
        self.raw_attrs.duration
    }

    pub fn supports_streaming(&self) -> bool {
        self.raw_attrs.supports_streaming
    }

    pub fn ttl_seconds(&self) -> Option<i32> {
        self.document.raw.ttl_seconds
    }
}

impl Sticker {
    pub fn from_document(document: &Document) -> Option<Self> {
        let mut animated = false;
        let mut sticker_attrs = None;
        for attr in document.attributes() {
            match attr {
                tl::enums::DocumentAttribute::Sticker(s) => sticker_attrs = Some(s.clone()),
                tl::enums::DocumentAttribute::Animated => animated = true,
                _ => (),
            }
        }
        Some(Self {
            document: document.clone(),
            raw_attrs: sticker_attrs?,
            animated,
        })
    }

    /// Get the emoji associated with the sticker.
    pub fn emoji(&self) -> &str {
        self.raw_attrs.alt.as_str()
    }

    /// Is this sticker an animated sticker?
    pub fn is_animated(&self) -> bool {
        self.animated
    }
}

/// Paid media that cannot be viewed before paying for it.
#[derive(Clone, Debug, PartialEq)]
pub struct PaidMediaPreview {
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Duration in seconds, for videos.
    pub duration: Option<i32>,
    pub thumbnail: Option<StrippedThumbnail>,
}

/// One of the items in a paid media message.
#[derive(Clone, Debug, PartialEq)]
pub enum PaidMedia {
    Photo(Photo),
    Video(Video),
    Preview(PaidMediaPreview),
}

/// The paid media attached to a message.
#[derive(Clone, Debug, PartialEq)]
pub struct PaidMediaInfo {
    /// The number of Telegram Stars that must be paid to buy access to the media.
    pub stars_amount: i64,
    pub media: Vec<PaidMedia>,
}

impl PaidMediaInfo {
    pub fn from_raw(paid: tl::types::MessageMediaPaidMedia) -> Self {
        let media = paid
            .extended_media
            .into_iter()
            .filter_map(|extended| match extended {
                tl::enums::MessageExtendedMedia::Preview(preview) => {
                    Some(PaidMedia::Preview(PaidMediaPreview {
                        width: preview.w,
                        height: preview.h,
                        duration: preview.video_duration,
                        thumbnail: match preview.thumb {
                            Some(tl::enums::PhotoSize::PhotoStrippedSize(stripped)) => {
                                Some(StrippedThumbnail {
                                    data: stripped.bytes,
                                })
                            }
                            _ => None,
                        },
                    }))
                }
                tl::enums::MessageExtendedMedia::Media(extended) => match extended.media {
                    tl::enums::MessageMedia::Photo(photo) => {
                        Some(PaidMedia::Photo(Photo::from_raw_media(photo)))
                    }
                    tl::enums::MessageMedia::Document(document) => {
                        let video = Video::from_document(Document::from_raw_media(document));
                        if video.is_none() {
                            warn!("paid media document without video attributes skipped");
                        }
                        video.map(PaidMedia::Video)
                    }
                    _ => None,
                },
            })
            .collect();

        Self {
            stars_amount: paid.stars_amount,
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_document() -> tl::types::MessageMediaDocument {
        tl::types::MessageMediaDocument {
            nopremium: false,
            spoiler: true,
            video: true,
            round: false,
            voice: false,
            document: Some(
                tl::types::Document {
                    id: 5,
                    access_hash: 6,
                    file_reference: vec![7],
                    date: 1_700_000_000,
                    mime_type: "video/mp4".into(),
                    size: 1024,
                    thumbs: None,
                    dc_id: 2,
                    attributes: vec![
                        tl::types::DocumentAttributeVideo {
                            round_message: false,
                            supports_streaming: true,
                            nosound: false,
                            duration: 12.5,
                            w: 1280,
                            h: 720,
                            preload_prefix_size: None,
                        }
                        .into(),
                        tl::types::DocumentAttributeFilename {
                            file_name: "clip.mp4".into(),
                        }
                        .into(),
                    ],
                }
                .into(),
            ),
            ttl_seconds: None,
        }
    }

    #[test]
    fn check_paid_media_parsing() {
        let info = PaidMediaInfo::from_raw(tl::types::MessageMediaPaidMedia {
            stars_amount: 50,
            extended_media: vec![
                tl::types::MessageExtendedMediaPreview {
                    w: Some(90),
                    h: Some(160),
                    thumb: Some(
                        tl::types::PhotoStrippedSize {
                            r#type: "i".into(),
                            bytes: vec![1, 2, 3],
                        }
                        .into(),
                    ),
                    video_duration: Some(12),
                }
                .into(),
                tl::types::MessageExtendedMedia {
                    media: video_document().into(),
                }
                .into(),
            ],
        });

        assert_eq!(info.stars_amount, 50);
        assert_eq!(info.media.len(), 2);
        assert_eq!(
            info.media[0],
            PaidMedia::Preview(PaidMediaPreview {
                width: Some(90),
                height: Some(160),
                duration: Some(12),
                thumbnail: Some(StrippedThumbnail {
                    data: vec![1, 2, 3]
                }),
            })
        );
        match &info.media[1] {
            PaidMedia::Video(video) => {
                assert_eq!(video.width(), 1280);
                assert_eq!(video.height(), 720);
                assert_eq!(video.duration(), 12.5);
                assert!(video.supports_streaming());
                assert_eq!(video.file_name(), Some("clip.mp4"));
                assert!(video.document.is_spoiler());
            }
            other => panic!("expected a video, got {other:?}"),
        }
    }

    #[test]
    fn check_document_without_video_attributes_is_skipped() {
        let mut document = video_document();
        if let Some(tl::enums::Document::Document(d)) = document.document.as_mut() {
            d.attributes.retain(|attr| !matches!(attr, tl::enums::DocumentAttribute::Video(_)));
        }

        let info = PaidMediaInfo::from_raw(tl::types::MessageMediaPaidMedia {
            stars_amount: 1,
            extended_media: vec![tl::types::MessageExtendedMedia {
                media: document.into(),
            }
            .into()],
        });
        assert!(info.media.is_empty());
    }
}
