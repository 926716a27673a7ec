//! json documents, shaped like the arguments of [`XmlMarkup::tag`]
//!
//! a node is an array headed by the tag name, and every following element is classified by its
//! json type:
//!
//! - object: attributes
//! - string or number: text
//! - array: children, each a node or a string/number written as free text
//! - `null` or boolean: ignored
//!
//! ```json
//! ["ul", {"class": "menu"}, [["li", "one"], ["li", "two"]]]
//! ```

use {
	crate::{Attributes, MarkupError, Result, TagArg, XmlMarkup},
	::serde_json::Value,
	::tracing::{instrument, warn, Level},
};

/// render a document into a new builder and return its markup
pub fn render_document(node: &Value) -> Result<String> {
	let mut markup = XmlMarkup::new();
	markup.document(node)?;
	Ok(markup.into_target())
}

/// parse a json document and render it
pub fn render_document_str(source: &str) -> Result<String> {
	render_document(&::serde_json::from_str::<Value>(source)?)
}

impl XmlMarkup {
	/// emit a document node and everything under it
	///
	/// # errors
	///
	/// - [`MarkupError::InvalidNode`] if a node is not `["name", ...]`
	/// - [`MarkupError::InvalidNested`] if a child is neither a node nor text; the enclosing tags
	///   are left open
	#[instrument(skip_all, level = Level::DEBUG)]
	pub fn document(&mut self, node: &Value) -> Result<&mut Self> {
		self.node(node, "$")
	}

	fn node(&mut self, node: &Value, path: &str) -> Result<&mut Self> {
		let Value::Array(items) = node else {
			return Err(MarkupError::InvalidNode {
				path: path.to_string(),
				found: kind(node),
			});
		};

		let (name, args) = match items.split_first() {
			Some((Value::String(name), args)) => (name, args),
			Some((head, _)) => {
				return Err(MarkupError::InvalidNode {
					path: format!("{path}[0]"),
					found: kind(head),
				});
			}
			None => {
				return Err(MarkupError::InvalidNode {
					path: path.to_string(),
					found: "an empty array",
				});
			}
		};

		let args = args
			.iter()
			.enumerate()
			.filter_map(|(index, arg)| argument(name, arg, format!("{path}[{}]", index + 1)))
			.collect::<Vec<_>>();

		self.tag(name.as_str(), args)
	}
}

fn argument<'v>(name: &'v str, arg: &'v Value, path: String) -> Option<TagArg<'v>> {
	match arg {
		Value::Object(object) => {
			let mut attributes = Attributes::new();
			for (key, value) in object {
				match value {
					Value::String(value) => attributes.insert(key.as_str(), value.as_str()),
					Value::Number(_) | Value::Bool(_) => {
						attributes.insert(key.as_str(), value.to_string());
					}
					_ => warn!(%path, attribute = %key, found = kind(value), "ignoring attribute"),
				}
			}
			Some(TagArg::Attributes(attributes))
		}
		Value::String(text) => Some(TagArg::from(text.as_str())),
		Value::Number(number) => Some(TagArg::from(number.to_string())),
		Value::Array(children) => Some(TagArg::nested(move |markup| {
			for (index, child) in children.iter().enumerate() {
				match child {
					Value::String(text) => {
						markup.text(text.as_str());
					}
					Value::Number(number) => {
						markup.text(number.to_string());
					}
					Value::Array(_) => {
						markup.node(child, &format!("{path}[{index}]"))?;
					}
					_ => {
						return Err(MarkupError::InvalidNested {
							tag: name.to_string(),
							found: kind(child),
						});
					}
				}
			}
			Ok(())
		})),
		Value::Null | Value::Bool(_) => {
			warn!(%path, found = kind(arg), "ignoring argument");
			None
		}
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
