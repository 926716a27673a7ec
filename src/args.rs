use {
	crate::{Result, XmlMarkup},
	::core::fmt::{self, Debug},
	::indexmap::IndexMap,
	::std::borrow::Cow,
};

/// a primitive value coerced to text, used for content and attribute values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scalar<'a>(pub Cow<'a, str>);

impl<'a> Scalar<'a> {
	/// the text of this value
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// detach from any borrowed input
	#[must_use]
	pub fn into_owned(self) -> Scalar<'static> {
		Scalar(Cow::Owned(self.0.into_owned()))
	}
}

impl<'a> From<&'a str> for Scalar<'a> {
	fn from(value: &'a str) -> Self {
		Self(Cow::Borrowed(value))
	}
}

impl<'a> From<&'a String> for Scalar<'a> {
	fn from(value: &'a String) -> Self {
		Self(Cow::Borrowed(value))
	}
}

impl From<String> for Scalar<'_> {
	fn from(value: String) -> Self {
		Self(Cow::Owned(value))
	}
}

impl<'a> From<Cow<'a, str>> for Scalar<'a> {
	fn from(value: Cow<'a, str>) -> Self {
		Self(value)
	}
}

macro_rules! scalar_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Scalar<'_> {
				fn from(value: $ty) -> Self {
					Self(Cow::Owned(value.to_string()))
				}
			}

			impl From<$ty> for TagArg<'_> {
				fn from(value: $ty) -> Self {
					Self::Text(Scalar::from(value))
				}
			}
		)*
	};
}

scalar_from_display!(
	char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// attribute name to value, emitted in insertion order
///
/// inserting a name that is already present replaces its value but keeps its position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes<'a> {
	inner: IndexMap<Cow<'a, str>, Scalar<'a>>,
}

impl<'a> Attributes<'a> {
	/// an empty set
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// set an attribute
	pub fn insert(&mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Scalar<'a>>) {
		self.inner.insert(name.into(), value.into());
	}

	/// set an attribute, builder style
	#[must_use]
	pub fn with(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Scalar<'a>>) -> Self {
		self.insert(name, value);
		self
	}

	/// the raw value of an attribute
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&str> {
		self.inner.get(name).map(Scalar::as_str)
	}

	/// the attributes, in emission order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.inner
			.iter()
			.map(|(name, value)| (&**name, value.as_str()))
	}

	/// how many attributes are set
	#[must_use]
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// whether no attributes are set
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// detach from any borrowed input
	#[must_use]
	pub fn into_owned(self) -> Attributes<'static> {
		Attributes {
			inner: self
				.inner
				.into_iter()
				.map(|(name, value)| (Cow::Owned(name.into_owned()), value.into_owned()))
				.collect(),
		}
	}
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Scalar<'a>>> FromIterator<(K, V)> for Attributes<'a> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		for (name, value) in iter {
			attributes.insert(name, value);
		}
		attributes
	}
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Scalar<'a>>> Extend<(K, V)> for Attributes<'a> {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

/// nested content, called with the same builder to write children in place
pub type Nested<'a> = Box<dyn FnOnce(&mut XmlMarkup) -> Result<()> + 'a>;

/// one argument to [`XmlMarkup::tag`], classified by role
pub enum TagArg<'a> {
	/// the attribute set
	Attributes(Attributes<'a>),
	/// literal content, escaped when written
	Text(Scalar<'a>),
	/// a builder for children
	Nested(Nested<'a>),
}

impl<'a> TagArg<'a> {
	/// wrap a closure as nested content
	pub fn nested(build: impl FnOnce(&mut XmlMarkup) -> Result<()> + 'a) -> Self {
		Self::Nested(Box::new(build))
	}

	/// which role this argument fills
	#[must_use]
	pub fn role(&self) -> &'static str {
		match self {
			Self::Attributes(_) => "attributes",
			Self::Text(_) => "text",
			Self::Nested(_) => "nested",
		}
	}
}

impl Debug for TagArg<'_> {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Attributes(attributes) => fmt.debug_tuple("Attributes").field(attributes).finish(),
			Self::Text(text) => fmt.debug_tuple("Text").field(text).finish(),
			Self::Nested(_) => fmt.write_str("Nested(..)"),
		}
	}
}

impl<'a> From<Scalar<'a>> for TagArg<'a> {
	fn from(value: Scalar<'a>) -> Self {
		Self::Text(value)
	}
}

impl<'a> From<&'a str> for TagArg<'a> {
	fn from(value: &'a str) -> Self {
		Self::Text(value.into())
	}
}

impl<'a> From<&'a String> for TagArg<'a> {
	fn from(value: &'a String) -> Self {
		Self::Text(value.into())
	}
}

impl From<String> for TagArg<'_> {
	fn from(value: String) -> Self {
		Self::Text(value.into())
	}
}

impl<'a> From<Cow<'a, str>> for TagArg<'a> {
	fn from(value: Cow<'a, str>) -> Self {
		Self::Text(value.into())
	}
}

impl<'a> From<Attributes<'a>> for TagArg<'a> {
	fn from(value: Attributes<'a>) -> Self {
		Self::Attributes(value)
	}
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Scalar<'a>>> From<IndexMap<K, V>> for TagArg<'a> {
	fn from(value: IndexMap<K, V>) -> Self {
		Self::Attributes(value.into_iter().collect())
	}
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Scalar<'a>>> From<Vec<(K, V)>> for TagArg<'a> {
	fn from(value: Vec<(K, V)>) -> Self {
		Self::Attributes(value.into_iter().collect())
	}
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Scalar<'a>>, const N: usize> From<[(K, V); N]>
	for TagArg<'a>
{
	fn from(value: [(K, V); N]) -> Self {
		Self::Attributes(value.into_iter().collect())
	}
}

/// the value a nested block written with [`tag!`] ends in
///
/// a block may end in a statement, or in the result of a last emission without `?`, whose error
/// is then returned instead of dropped
#[doc(hidden)]
pub trait NestedOutcome {
	/// the outcome of the nested content
	fn into_result(self) -> Result<()>;
}

impl NestedOutcome for () {
	fn into_result(self) -> Result<()> {
		Ok(())
	}
}

impl NestedOutcome for &mut XmlMarkup {
	fn into_result(self) -> Result<()> {
		Ok(())
	}
}

impl NestedOutcome for Result<()> {
	fn into_result(self) -> Result<()> {
		self
	}
}

impl NestedOutcome for Result<&mut XmlMarkup> {
	fn into_result(self) -> Result<()> {
		self.map(|_| ())
	}
}

/// emit a tag, classifying each argument by how it is written
///
/// ```rs
/// tag!(markup, "name")?; // <name/>
/// tag!(markup, "name", "text")?; // any other expression becomes a `TagArg`, here text
/// tag!(markup, "name", { "class" => "menu", "width" => 30 })?; // attributes
/// tag!(markup, "name", |markup| {
///     tag!(markup, "child")?;
///     tag!(markup, "last") // an error from a tail emission is returned too
/// })?; // nested content, the body must be a block
/// tag!(markup, "name", |_| {})?; // empty nested content, `<name></name>`
/// ```
///
/// arguments after the name may come in any order; a repeated role replaces the earlier one
#[macro_export]
macro_rules! tag {
	($markup:expr, $name:expr $(,)?) => {
		$markup.tag($name, ::core::iter::empty::<$crate::TagArg<'_>>())
	};
	($markup:expr, $name:expr, $($args:tt)+) => {
		$markup.tag($name, $crate::tag_args![$($args)+])
	};
}

/// build an array of [`TagArg`](crate::TagArg)s with the shape rules of [`tag!`]
#[macro_export]
macro_rules! tag_args {
	{ @acc [$($acc:expr,)*] } => {
		[$($acc,)*]
	};

	{ @acc [$($acc:expr,)*] |_| $body:block $(, $($rest:tt)*)? } => {
		$crate::tag_args! {
			@acc [
				$($acc,)*
				$crate::TagArg::nested(|_: &mut $crate::XmlMarkup| -> $crate::Result<()> {
					$crate::args::NestedOutcome::into_result($body)
				}),
			]
			$($($rest)*)?
		}
	};

	{ @acc [$($acc:expr,)*] |$markup:ident| $body:block $(, $($rest:tt)*)? } => {
		$crate::tag_args! {
			@acc [
				$($acc,)*
				$crate::TagArg::nested(|$markup: &mut $crate::XmlMarkup| -> $crate::Result<()> {
					$crate::args::NestedOutcome::into_result($body)
				}),
			]
			$($($rest)*)?
		}
	};

	{ @acc [$($acc:expr,)*] { $($key:expr => $value:expr),* $(,)? } $(, $($rest:tt)*)? } => {
		$crate::tag_args! {
			@acc [
				$($acc,)*
				$crate::TagArg::Attributes({
					#[allow(unused_mut, reason = "macro")]
					let mut attributes = $crate::Attributes::new();
					$(attributes.insert($key, $value);)*
					attributes
				}),
			]
			$($($rest)*)?
		}
	};

	{ @acc [$($acc:expr,)*] $arg:expr $(, $($rest:tt)*)? } => {
		$crate::tag_args! {
			@acc [$($acc,)* $crate::TagArg::from($arg),]
			$($($rest)*)?
		}
	};

	{ $($args:tt)* } => {
		$crate::tag_args! { @acc [] $($args)* }
	};
}
