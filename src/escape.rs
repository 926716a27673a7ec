use {
	::core::fmt::{self, Debug},
	::std::borrow::Cow,
};

/// the prefix of a value that should be emitted verbatim
pub const BYPASS_OPEN: &str = "!_";
/// the suffix of a value that should be emitted verbatim
pub const BYPASS_CLOSE: &str = "_!";

/// how text and attribute values are made safe for the output
///
/// values wrapped as `!_..._!` never reach these functions, see [`Escaper::bypass`]
#[derive(Clone, Copy)]
pub struct Escaper {
	/// escape literal content and free text
	pub text: fn(&str) -> Cow<'_, str>,
	/// escape a value placed inside a double-quoted attribute
	pub attribute: fn(&str) -> Cow<'_, str>,
}

impl Escaper {
	/// `&`, `<` and `>` in text, plus `"` in attribute values
	pub const HTML: Self = Self {
		text: ::html_escape::encode_text::<str>,
		attribute: ::html_escape::encode_double_quoted_attribute::<str>,
	};

	/// pass everything through unchanged
	pub const VERBATIM: Self = Self {
		text: verbatim,
		attribute: verbatim,
	};

	/// if `raw` is wrapped as `!_..._!`, the inner text
	///
	/// the markers may not overlap, so `!_!` is not a bypass
	#[must_use]
	pub fn bypass(raw: &str) -> Option<&str> {
		raw.strip_prefix(BYPASS_OPEN)?.strip_suffix(BYPASS_CLOSE)
	}

	/// escape content
	#[must_use]
	pub fn text<'s>(&self, raw: &'s str) -> Cow<'s, str> {
		match Self::bypass(raw) {
			Some(inner) => Cow::Borrowed(inner),
			None => (self.text)(raw),
		}
	}

	/// escape an attribute value
	#[must_use]
	pub fn attribute<'s>(&self, raw: &'s str) -> Cow<'s, str> {
		match Self::bypass(raw) {
			Some(inner) => Cow::Borrowed(inner),
			None => (self.attribute)(raw),
		}
	}
}

impl Debug for Escaper {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_struct("Escaper").finish_non_exhaustive()
	}
}

fn verbatim(raw: &str) -> Cow<'_, str> {
	Cow::Borrowed(raw)
}

impl Default for Escaper {
	fn default() -> Self {
		Self::HTML
	}
}
