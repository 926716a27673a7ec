use ::std::error::Error;

/// result of an emission
pub type Result<T, E = MarkupError> = ::core::result::Result<T, E>;

/// a failure while building markup
///
/// nothing already written to the buffer is rolled back, so a failure inside nested content leaves
/// that tag (and every enclosing one) unterminated
#[derive(Debug, ::thiserror::Error, ::miette::Diagnostic)]
pub enum MarkupError {
	/// nested content for a tag is not something that can build markup
	#[error("nested content of `<{tag}>` expected a node or text, found {found}")]
	#[diagnostic(
		code(xmlmarkup::invalid_nested),
		help("children are written as `[\"name\", ...]` nodes or plain strings")
	)]
	InvalidNested {
		/// the tag whose children were being built
		tag: String,
		/// what was found instead
		found: &'static str,
	},
	/// a document node does not have the shape `["name", ...]`
	#[error("invalid node at {path}: expected `[\"name\", ...]`, found {found}")]
	#[diagnostic(code(xmlmarkup::document::invalid_node))]
	InvalidNode {
		/// where the node is in the document
		path: String,
		/// what was found instead
		found: &'static str,
	},
	/// an error raised by caller code inside nested content
	#[error(transparent)]
	#[diagnostic(code(xmlmarkup::nested))]
	Nested(Box<dyn Error + Send + Sync>),
	/// failed to read input
	#[error("io error")]
	#[diagnostic(code(xmlmarkup::io))]
	Io(#[from] ::std::io::Error),
	/// input was not valid json
	#[cfg(feature = "json")]
	#[error("invalid json")]
	#[diagnostic(code(xmlmarkup::json))]
	Json(#[from] ::serde_json::Error),
}

impl MarkupError {
	/// wrap an error from caller code so it can be returned out of nested content
	pub fn nested(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
		Self::Nested(error.into())
	}
}
