//! Catalogs embedded into the binary at compile time using
//! [`rust-embed`](rust_embed).

use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use rust_embed::Embed;
use std::borrow::Cow;

#[derive(Embed)]
#[folder = "../../assets/"]
pub struct Builtins;
impl Builtins {
    /// Get the raw document for a builtin catalog by name.
    pub fn load(name: impl AsRef<str>) -> Result<Cow<'static, [u8]>> {
        Self::get(Self::strip(name.as_ref()))
            .map(|f| f.data)
            .ok_or_raise(|| ErrorKind::AssetNotFound(Self::identifier(name.as_ref())))
    }

    pub(crate) fn identifier(name: impl AsRef<str>) -> String {
        format!("builtin:{}", Self::strip(name.as_ref()))
    }

    fn strip(name: &str) -> &str {
        name.trim().trim_start_matches("builtin:")
    }
}
