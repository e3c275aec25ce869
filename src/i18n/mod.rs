// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Fluent translation files are embedded at build time. The active locale is
//! resolved from the CLI, then the config file, then the OS, then `en-US`.
//! Keys missing from the active locale fall back to English, and keys
//! missing everywhere render as `MISSING: <key>`.

pub mod fluent;

pub use fluent::I18n;
