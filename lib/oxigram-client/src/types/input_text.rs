// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use oxigram_tl_types as tl;

/// How the text of captions and messages should be interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Markdown and HTML are both understood.
    #[default]
    Default,
    Markdown,
    Html,
    /// The text is sent as-is.
    Disabled,
}

/// Text with optional formatting, used for captions and gift messages.
///
/// Explicit `entities` take precedence over parsing the text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputText {
    pub(crate) text: String,
    pub(crate) parse_mode: Option<ParseMode>,
    pub(crate) entities: Option<Vec<tl::enums::MessageEntity>>,
}

impl InputText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
            entities: None,
        }
    }

    /// Override the client-wide parse mode for this text.
    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    /// Use these entities instead of parsing the text.
    pub fn entities(mut self, entities: Vec<tl::enums::MessageEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for InputText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for InputText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
