#![doc = include_str!("../README.md")]
#![warn(
	clippy::pedantic,
	clippy::allow_attributes_without_reason,
	missing_docs
)]
#![allow(clippy::missing_errors_doc, reason = "capitalization :(")]
#![allow(
	clippy::module_name_repetitions,
	reason = "`MarkupError` reads better than `Error` at use sites"
)]

use {
	crate::{
		args::Nested,
		escape::Escaper,
		stack::{ContextStack, PendingTag},
		tag::Body,
	},
	::core::fmt::{self, Debug},
	::std::borrow::Cow,
	::tracing::{instrument, trace, Level},
};
pub use {
	crate::{
		args::{Attributes, Scalar, TagArg},
		diagnostics::{MarkupError, Result},
		tag::Tag,
	},
	::miette,
	::thiserror,
};

/// argument roles and the [`tag!`] macro
pub mod args;
/// error types
pub mod diagnostics;
/// rendering json documents
#[cfg(feature = "json")]
pub mod document;
/// making text safe for the output
pub mod escape;
/// saved state of enclosing tags
pub mod stack;
/// tags waiting to be emitted
pub mod tag;

#[cfg(test)]
mod tests;

/// builds markup into a single buffer
///
/// one instance is reused at every nesting level: nested content receives the same builder and
/// writes into the same buffer, while the enclosing tag is parked on a [`ContextStack`]
///
/// every method that writes takes `&mut self`, so a builder can't be shared between threads
/// without external locking, and doing so is not supported
pub struct XmlMarkup {
	buffer: String,
	pending: Option<PendingTag>,
	stack: ContextStack,
	escaper: Escaper,
}

impl XmlMarkup {
	/// an empty builder escaping with [`Escaper::HTML`]
	#[must_use]
	pub fn new() -> Self {
		Self::with_escaper(Escaper::HTML)
	}

	/// an empty builder using the given escaper
	#[must_use]
	pub fn with_escaper(escaper: Escaper) -> Self {
		Self {
			buffer: String::new(),
			pending: None,
			stack: ContextStack::new(),
			escaper,
		}
	}

	/// emit a tag, sorting `args` into attributes, text and nested content by their role
	///
	/// - text: `<name>text</name>`
	/// - nested content (and no text): `<name>`, whatever the nested builder writes, `</name>`
	/// - neither: `<name/>`
	///
	/// see [`tag!`] for the shorthand
	pub fn tag<'a>(
		&mut self,
		name: impl Into<Cow<'a, str>>,
		args: impl IntoIterator<Item = TagArg<'a>>,
	) -> Result<&mut Self> {
		self.emit(Tag::resolve(name, args))
	}

	/// emit an already built tag
	///
	/// # errors
	///
	/// errors from nested content are returned as-is. the opening tag, and anything written before
	/// the error, stay in the buffer without a closing tag
	#[instrument(skip_all, fields(tag = %tag.name), level = Level::TRACE)]
	pub fn emit(&mut self, tag: Tag<'_>) -> Result<&mut Self> {
		let (pending, body) = tag.into_parts();
		self.open(pending);

		let result = match body {
			Body::SelfClosing => {
				trace!("self-closing");
				self.buffer.push_str("/>");
				Ok(())
			}
			Body::Text => {
				trace!("text content");
				self.buffer.push('>');
				if let Some(pending) = &self.pending {
					if let Some(text) = &pending.text {
						self.buffer.push_str(&self.escaper.text(text.as_str()));
					}
				}
				self.close();
				Ok(())
			}
			Body::Nested(nested) => {
				trace!("nested content");
				self.buffer.push('>');
				self.nest(nested)
			}
		};

		self.pending = None;
		result.map(|()| self)
	}

	/// write escaped text directly, usually between children inside nested content
	pub fn text<'v>(&mut self, value: impl Into<Scalar<'v>>) -> &mut Self {
		let value = value.into();
		self.buffer.push_str(&self.escaper.text(value.as_str()));
		self
	}

	/// the markup written so far
	#[must_use]
	pub fn target(&self) -> &str {
		&self.buffer
	}

	/// take the markup
	#[must_use]
	pub fn into_target(self) -> String {
		self.buffer
	}

	/// how many tags are currently open around the caller
	#[must_use]
	pub fn depth(&self) -> usize {
		self.stack.depth()
	}

	/// whether no tag is pending or saved
	#[must_use]
	pub fn is_idle(&self) -> bool {
		self.pending.is_none() && self.stack.is_empty()
	}

	fn open(&mut self, pending: PendingTag) {
		let pending = self.pending.insert(pending);

		self.buffer.push('<');
		self.buffer.push_str(&pending.name);

		for (name, value) in pending.attributes.iter() {
			self.buffer.push(' ');
			self.buffer.push_str(name);
			self.buffer.push_str("=\"");
			self.buffer.push_str(&self.escaper.attribute(value));
			self.buffer.push('"');
		}
	}

	fn close(&mut self) {
		if let Some(pending) = &self.pending {
			self.buffer.push_str("</");
			self.buffer.push_str(&pending.name);
			self.buffer.push('>');
		}
	}

	fn nest(&mut self, nested: Nested<'_>) -> Result<()> {
		// park the tag so nested emissions can reuse the slot
		if let Some(pending) = self.pending.take() {
			self.stack.push(pending);
		}

		let outcome = nested(self);

		// restore even on error so the stack stays balanced
		self.pending = self.stack.pop();
		outcome?;

		self.close();
		Ok(())
	}
}

impl Default for XmlMarkup {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for XmlMarkup {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_struct("XmlMarkup")
			.field("buffer", &self.buffer)
			.field("pending", &self.pending)
			.field("depth", &self.stack.depth())
			.finish_non_exhaustive()
	}
}

impl From<XmlMarkup> for String {
	fn from(markup: XmlMarkup) -> String {
		markup.buffer
	}
}
