// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending messages.
use super::{Client, RequestError};
use crate::types::{ChatRef, FileSource, InputMedia, InputPaidMedia, Message, Uploadable};
use crate::utils::generate_random_id;
use oxigram_tl_types as tl;
use std::io;

const MAX_PAID_MEDIA: usize = 10;

const DEFAULT_VIDEO_MIME: &str = "video/mp4";

fn missing_upload(kind: &str) -> RequestError {
    RequestError::Upload(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("server did not return the uploaded {kind}"),
    ))
}

impl Client {
    async fn save_file(&self, file: &Uploadable) -> Result<tl::enums::InputFile, RequestError> {
        Ok(self.config().uploader.save_file(file).await?)
    }

    /// Register an uploaded file with the server so it can be referenced by paid media.
    async fn upload_media(
        &self,
        peer: &tl::enums::InputPeer,
        media: tl::enums::InputMedia,
        business_connection_id: Option<&str>,
    ) -> Result<tl::enums::MessageMedia, RequestError> {
        Ok(self
            .invoke(&tl::functions::messages::UploadMedia {
                business_connection_id: business_connection_id.map(str::to_string),
                peer: peer.clone(),
                media,
            })
            .await?)
    }

    async fn input_paid_media(
        &self,
        peer: &tl::enums::InputPeer,
        media: InputMedia,
        business_connection_id: Option<&str>,
    ) -> Result<tl::enums::InputMedia, RequestError> {
        match media {
            InputMedia::Photo {
                source: FileSource::Remote(file),
                has_spoiler,
            } => Ok(tl::types::InputMediaPhoto {
                spoiler: has_spoiler,
                id: tl::types::InputPhoto {
                    id: file.id,
                    access_hash: file.access_hash,
                    file_reference: file.file_reference,
                }
                .into(),
                ttl_seconds: None,
            }
            .into()),
            InputMedia::Photo {
                source: FileSource::Upload(file),
                has_spoiler,
            } => {
                let uploaded = tl::types::InputMediaUploadedPhoto {
                    spoiler: has_spoiler,
                    file: self.save_file(&file).await?,
                    stickers: None,
                    ttl_seconds: None,
                };
                let media = self
                    .upload_media(peer, uploaded.into(), business_connection_id)
                    .await?;

                let photo = match media {
                    tl::enums::MessageMedia::Photo(tl::types::MessageMediaPhoto {
                        photo: Some(tl::enums::Photo::Photo(photo)),
                        ..
                    }) => photo,
                    _ => return Err(missing_upload("photo")),
                };

                Ok(tl::types::InputMediaPhoto {
                    spoiler: has_spoiler,
                    id: tl::types::InputPhoto {
                        id: photo.id,
                        access_hash: photo.access_hash,
                        file_reference: photo.file_reference,
                    }
                    .into(),
                    ttl_seconds: None,
                }
                .into())
            }
            InputMedia::Video {
                source: FileSource::Remote(file),
                has_spoiler,
                ..
            } => Ok(input_media_document(
                file.id,
                file.access_hash,
                file.file_reference,
                has_spoiler,
            )),
            InputMedia::Video {
                source: FileSource::Upload(file),
                thumb,
                width,
                height,
                duration,
                supports_streaming,
                has_spoiler,
            } => {
                let name = file.name();
                let mime_type = mime_guess::from_path(&name)
                    .first_raw()
                    .unwrap_or(DEFAULT_VIDEO_MIME)
                    .to_string();
                let thumb = match &thumb {
                    Some(thumb) => Some(self.save_file(thumb).await?),
                    None => None,
                };

                let uploaded = tl::types::InputMediaUploadedDocument {
                    nosound_video: true,
                    force_file: false,
                    spoiler: has_spoiler,
                    file: self.save_file(&file).await?,
                    thumb,
                    mime_type,
                    attributes: vec![
                        tl::types::DocumentAttributeVideo {
                            round_message: false,
                            supports_streaming,
                            nosound: false,
                            duration,
                            w: width,
                            h: height,
                            preload_prefix_size: None,
                        }
                        .into(),
                        tl::types::DocumentAttributeFilename { file_name: name }.into(),
                    ],
                    stickers: None,
                    ttl_seconds: None,
                };
                let media = self
                    .upload_media(peer, uploaded.into(), business_connection_id)
                    .await?;

                match media {
                    tl::enums::MessageMedia::Document(tl::types::MessageMediaDocument {
                        document: Some(tl::enums::Document::Document(document)),
                        ..
                    }) => Ok(input_media_document(
                        document.id,
                        document.access_hash,
                        document.file_reference,
                        has_spoiler,
                    )),
                    _ => Err(missing_upload("video")),
                }
            }
        }
    }

    /// Send photos and videos that can only be viewed after paying for them with Telegram
    /// Stars.
    ///
    /// Between 1 and 10 media items can be sent at once. Local files are uploaded through the
    /// configured [`FileUploader`](crate::FileUploader) first.
    ///
    /// Returns the messages that were sent.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use oxigram_client::types::{InputMedia, InputPaidMedia};
    ///
    /// let paid = InputPaidMedia::new(
    ///     50,
    ///     vec![InputMedia::photo("photo.jpg"), InputMedia::video("clip.mp4").spoiler(true)],
    /// )
    /// .caption("Behind the scenes");
    ///
    /// client.send_paid_media("@my_channel", paid).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_paid_media<C: Into<ChatRef>>(
        &self,
        chat: C,
        paid: InputPaidMedia,
    ) -> Result<Vec<Message>, RequestError> {
        if paid.media.is_empty() || paid.media.len() > MAX_PAID_MEDIA {
            return Err(RequestError::InvalidArgument(format!(
                "paid media must contain between 1 and {MAX_PAID_MEDIA} items, got {}",
                paid.media.len()
            )));
        }

        let peer = self.resolve_peer(chat).await?;
        let business_connection_id = paid.business_connection_id.as_deref();

        let mut extended_media = Vec::with_capacity(paid.media.len());
        for media in paid.media {
            extended_media.push(
                self.input_paid_media(&peer, media, business_connection_id)
                    .await?,
            );
        }

        let (message, entities) = match &paid.caption {
            Some(caption) => self.parse_text(caption),
            None => (String::new(), Vec::new()),
        };

        let reply_to = paid.reply_to.map(|reply_to_msg_id| {
            let (quote_text, quote_entities) = match &paid.quote {
                Some(quote) => {
                    let (text, entities) = self.parse_text(quote);
                    (Some(text), (!entities.is_empty()).then_some(entities))
                }
                None => (None, None),
            };

            tl::types::InputReplyToMessage {
                reply_to_msg_id,
                top_msg_id: None,
                reply_to_peer_id: None,
                quote_text,
                quote_entities,
                quote_offset: paid.quote_offset,
            }
            .into()
        });

        let request = tl::functions::messages::SendMedia {
            silent: paid.silent,
            background: false,
            clear_draft: false,
            noforwards: paid.protect_content,
            update_stickersets_order: false,
            invert_media: paid.invert_media,
            peer,
            reply_to,
            media: tl::types::InputMediaPaidMedia {
                stars_amount: paid.stars_amount,
                extended_media,
                payload: paid.payload,
            }
            .into(),
            message,
            random_id: generate_random_id(),
            entities: (!entities.is_empty()).then_some(entities),
            schedule_date: paid.schedule_date.map(|date| date.timestamp() as i32),
            send_as: None,
            effect: None,
        };

        let updates = self
            .invoke_maybe_business(&request, business_connection_id)
            .await?;
        Ok(self.messages_from_updates(updates))
    }

    /// Send a paid reaction of `amount` Telegram Stars to a message.
    ///
    /// With `is_private`, the reaction is shown anonymously in the top senders list. `None`
    /// keeps the setting used for previous paid reactions.
    pub async fn send_paid_reaction<C: Into<ChatRef>>(
        &self,
        chat: C,
        message_id: i32,
        amount: i32,
        is_private: Option<bool>,
    ) -> Result<bool, RequestError> {
        let peer = self.resolve_peer(chat).await?;
        self.invoke(&tl::functions::messages::SendPaidReaction {
            peer,
            msg_id: message_id,
            count: amount,
            random_id: generate_random_id(),
            private: is_private,
        })
        .await?;
        Ok(true)
    }
}

fn input_media_document(
    id: i64,
    access_hash: i64,
    file_reference: Vec<u8>,
    spoiler: bool,
) -> tl::enums::InputMedia {
    tl::types::InputMediaDocument {
        spoiler,
        id: tl::types::InputDocument {
            id,
            access_hash,
            file_reference,
        }
        .into(),
        ttl_seconds: None,
        query: None,
    }
    .into()
}
