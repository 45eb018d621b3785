//! Palettes shipped inside the binary as TOML documents.

mod loader;

use std::sync::LazyLock;

use include_dir::{Dir, include_dir};
use loader::{BuiltinThemes, load_builtin_themes};

use crate::style::theme::types::{Theme, ThemeRegistration};

static PALETTE_FILES: Dir<'static> =
	include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

static BUNDLE: LazyLock<BuiltinThemes> = LazyLock::new(|| {
	match load_builtin_themes(&PALETTE_FILES) {
		Ok(bundle) => bundle,
		Err(error) => panic!("bundled palette documents are invalid: {error:#}"),
	}
});

/// The palette marked `default = true` in the bundle.
pub fn default_theme() -> Theme {
	BUNDLE.default_theme
}

/// Every bundled palette, in file order.
pub(super) fn registrations() -> &'static [ThemeRegistration] {
	&BUNDLE.registrations
}
