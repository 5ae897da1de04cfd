//! Error types for deck rendering.
//!
//! This module provides the main error type [`DeckError`] which wraps the
//! error conditions that can occur while composing pages and writing the
//! output document, plus [`ComposeError`] for failures inside a single page
//! composer.

use std::{io, path::PathBuf};

use thiserror::Error;

use capdeck_core::style::UnknownStyleToken;

/// A failure while composing a single page.
///
/// Compose errors are programming errors in the page content — an undefined
/// style token, a bad color literal, or a placement escaping the page — and
/// surface while composing, before any output exists.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Style(#[from] UnknownStyleToken),

    #[error("{0}")]
    Color(String),

    #[error("{element} at ({x}, {y}) escapes the page content region")]
    OutOfBounds {
        element: &'static str,
        x: f32,
        y: f32,
    },
}

/// The main error type for deck rendering.
///
/// Every failure is fatal to the run: there is no partial-success mode, and
/// the assembler never leaves a half-written document at the output path.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("page `{page}` failed to compose")]
    Compose {
        page: &'static str,
        #[source]
        source: ComposeError,
    },

    #[error("PDF conversion failed: {0}")]
    Pdf(String),

    #[error("cannot write output to `{path}`")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
