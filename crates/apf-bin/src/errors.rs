/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use zune_apf::{ApfDecodeErrors, ApfEncodeErrors};

/// Everything that can stop a conversion
pub enum WorkflowErrors {
    DecodeErrors(ApfDecodeErrors),
    EncodeErrors(ApfEncodeErrors),
    PngDecodeErrors(png::DecodingError),
    PngEncodeErrors(png::EncodingError),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(err) => writeln!(f, "APF decoding failed: {err:?}"),
            Self::EncodeErrors(err) => writeln!(f, "APF encoding failed: {err:?}"),
            Self::PngDecodeErrors(err) => writeln!(f, "PNG decoding failed: {err}"),
            Self::PngEncodeErrors(err) => writeln!(f, "PNG encoding failed: {err}"),
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl From<ApfDecodeErrors> for WorkflowErrors {
    fn from(value: ApfDecodeErrors) -> Self {
        WorkflowErrors::DecodeErrors(value)
    }
}

impl From<ApfEncodeErrors> for WorkflowErrors {
    fn from(value: ApfEncodeErrors) -> Self {
        WorkflowErrors::EncodeErrors(value)
    }
}

impl From<png::DecodingError> for WorkflowErrors {
    fn from(value: png::DecodingError) -> Self {
        WorkflowErrors::PngDecodeErrors(value)
    }
}

impl From<png::EncodingError> for WorkflowErrors {
    fn from(value: png::EncodingError) -> Self {
        WorkflowErrors::PngEncodeErrors(value)
    }
}

impl From<std::io::Error> for WorkflowErrors {
    fn from(value: std::io::Error) -> Self {
        WorkflowErrors::IoErrors(value)
    }
}
