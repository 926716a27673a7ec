use {
	crate::{
		args::{Attributes, Nested, Scalar, TagArg},
		stack::PendingTag,
		Result, XmlMarkup,
	},
	::core::fmt::{self, Debug},
	::std::borrow::Cow,
	::tracing::trace,
};

/// a tag waiting to be emitted
///
/// build one directly, or let [`Tag::resolve`] sort an argument list into it
pub struct Tag<'a> {
	/// the tag name
	pub name: Cow<'a, str>,
	/// attributes, written in order
	pub attributes: Attributes<'a>,
	/// literal content, takes precedence over [`Tag::nested`]
	pub text: Option<Scalar<'a>>,
	/// builder for children
	pub nested: Option<Nested<'a>>,
}

/// what follows the opening tag
pub(crate) enum Body<'a> {
	/// `<name/>`
	SelfClosing,
	/// `<name>text</name>`, the text is held by the pending slot
	Text,
	/// `<name>` children `</name>`
	Nested(Nested<'a>),
}

impl<'a> Tag<'a> {
	/// a tag with no attributes or content
	#[must_use]
	pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
		Self {
			name: name.into(),
			attributes: Attributes::new(),
			text: None,
			nested: None,
		}
	}

	/// classify each argument by its role
	///
	/// order does not matter, and a later argument of the same role replaces an earlier one
	pub fn resolve(
		name: impl Into<Cow<'a, str>>,
		args: impl IntoIterator<Item = TagArg<'a>>,
	) -> Self {
		let mut tag = Self::new(name);
		for arg in args {
			tag.apply(arg);
		}
		tag
	}

	/// fill the role of a single argument
	pub fn apply(&mut self, arg: TagArg<'a>) {
		match arg {
			TagArg::Attributes(attributes) => {
				if !self.attributes.is_empty() {
					trace!(tag = %self.name, "replacing attributes");
				}
				self.attributes = attributes;
			}
			TagArg::Text(text) => {
				if self.text.is_some() {
					trace!(tag = %self.name, "replacing text");
				}
				self.text = Some(text);
			}
			TagArg::Nested(nested) => {
				if self.nested.is_some() {
					trace!(tag = %self.name, "replacing nested content");
				}
				self.nested = Some(nested);
			}
		}
	}

	/// replace the attributes
	#[must_use]
	pub fn with_attributes(mut self, attributes: impl Into<Attributes<'a>>) -> Self {
		self.attributes = attributes.into();
		self
	}

	/// set one attribute
	#[must_use]
	pub fn attr(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Scalar<'a>>) -> Self {
		self.attributes.insert(name, value);
		self
	}

	/// set the literal content
	#[must_use]
	pub fn with_text(mut self, text: impl Into<Scalar<'a>>) -> Self {
		self.text = Some(text.into());
		self
	}

	/// set the builder for children
	#[must_use]
	pub fn with_children(mut self, build: impl FnOnce(&mut XmlMarkup) -> Result<()> + 'a) -> Self {
		self.nested = Some(Box::new(build));
		self
	}

	/// split into the snapshot kept in the pending slot and the body to write after the opening tag
	pub(crate) fn into_parts(self) -> (PendingTag, Body<'a>) {
		let body = match (&self.text, self.nested) {
			(Some(_), _) => Body::Text,
			(None, Some(nested)) => Body::Nested(nested),
			(None, None) => Body::SelfClosing,
		};

		(
			PendingTag {
				name: self.name.into_owned(),
				attributes: self.attributes.into_owned(),
				text: self.text.map(Scalar::into_owned),
			},
			body,
		)
	}
}

impl Debug for Tag<'_> {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_struct("Tag")
			.field("name", &self.name)
			.field("attributes", &self.attributes)
			.field("text", &self.text)
			.field("nested", &self.nested.is_some())
			.finish()
	}
}
