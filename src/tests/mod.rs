#![allow(dependency_on_unit_never_type_fallback)]

use {
	crate::{
		escape::Escaper,
		stack::{ContextStack, PendingTag},
		tag, Attributes, MarkupError, Result, Tag, TagArg, XmlMarkup,
	},
	::std::borrow::Cow,
};

fn trace() {
	let _ = ::tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(::tracing::Level::TRACE)
		.try_init();
}

fn pending(name: &str) -> PendingTag {
	PendingTag {
		name: name.to_string(),
		attributes: Attributes::new(),
		text: None,
	}
}

#[test]
pub fn escapes_text() {
	assert_eq!(Escaper::HTML.text("H&R Block"), "H&amp;R Block");
	assert_eq!(Escaper::HTML.text("<li>"), "&lt;li&gt;");
	assert_eq!(Escaper::HTML.text(r#"say "hi""#), r#"say "hi""#);
	assert!(matches!(Escaper::HTML.text("plain"), Cow::Borrowed("plain")));
}

#[test]
pub fn escapes_attribute_quotes() {
	assert_eq!(
		Escaper::HTML.attribute(r#"a "b" & <c>"#),
		"a &quot;b&quot; &amp; &lt;c&gt;"
	);
}

#[test]
pub fn bypass_strips_markers() {
	assert_eq!(Escaper::bypass("!_&copy;_!"), Some("&copy;"));
	assert_eq!(Escaper::bypass("!__!"), Some(""));
	assert_eq!(Escaper::bypass("!_!"), None);
	assert_eq!(Escaper::bypass("!_open"), None);
	assert_eq!(Escaper::bypass("x!_a_!"), None);

	assert_eq!(Escaper::HTML.text("!_&copy;_!"), "&copy;");
	assert_eq!(Escaper::HTML.attribute("!_<li>_!"), "<li>");
	assert_eq!(Escaper::HTML.text("!_a & b"), "!_a &amp; b");
}

#[test]
pub fn verbatim_escaper() {
	let mut xml = XmlMarkup::with_escaper(Escaper::VERBATIM);
	tag!(xml, "a", { "href" => "?a=1&b=2" }, "<b>").unwrap();
	assert_eq!(xml.target(), r#"<a href="?a=1&b=2"><b></a>"#);
}

#[test]
pub fn resolves_roles_in_any_order() {
	let tag = Tag::resolve(
		"td",
		[
			TagArg::nested(|_| Ok(())),
			TagArg::from(3),
			TagArg::from(vec![("class", "x")]),
		],
	);

	assert_eq!(tag.name, "td");
	assert_eq!(tag.attributes.get("class"), Some("x"));
	assert_eq!(tag.text.as_ref().map(|text| text.as_str()), Some("3"));
	assert!(tag.nested.is_some());
}

#[test]
pub fn later_argument_replaces_earlier() {
	let tag = Tag::resolve(
		"td",
		[
			TagArg::from([("a", "1"), ("b", "2")]),
			TagArg::from("first"),
			TagArg::from([("c", "3")]),
			TagArg::from("second"),
		],
	);

	assert_eq!(tag.attributes.len(), 1);
	assert_eq!(tag.attributes.get("a"), None);
	assert_eq!(tag.attributes.get("c"), Some("3"));
	assert_eq!(tag.text.map(|text| text.0), Some(Cow::Borrowed("second")));
}

#[test]
pub fn scalars_coerce_to_text() {
	assert_eq!(TagArg::from(30).role(), "text");
	assert_eq!(crate::Scalar::from(30).as_str(), "30");
	assert_eq!(crate::Scalar::from(2.5).as_str(), "2.5");
	assert_eq!(crate::Scalar::from(30.0).as_str(), "30");
	assert_eq!(crate::Scalar::from('x').as_str(), "x");
	assert_eq!(crate::Scalar::from(-7_i64).as_str(), "-7");
}

#[test]
pub fn attributes_keep_insertion_order() {
	let attributes = Attributes::new()
		.with("src", "a.gif")
		.with("width", 30)
		.with("alt", "a")
		.with("width", 40);

	assert_eq!(
		attributes.iter().collect::<Vec<_>>(),
		[("src", "a.gif"), ("width", "40"), ("alt", "a")]
	);
}

#[test]
pub fn stack_is_lifo() {
	let mut stack = ContextStack::new();
	assert!(stack.is_empty());

	stack.push(pending("outer"));
	stack.push(pending("inner"));

	assert_eq!(stack.depth(), 2);
	assert_eq!(stack.names().collect::<Vec<_>>(), ["outer", "inner"]);
	assert_eq!(stack.last().map(|pending| &*pending.name), Some("inner"));

	assert_eq!(stack.pop(), Some(pending("inner")));
	assert_eq!(stack.pop(), Some(pending("outer")));
	assert_eq!(stack.pop(), None);
}

#[test]
pub fn nested_content_sees_enclosing_tags() {
	trace();

	let mut xml = XmlMarkup::new();
	tag!(xml, "table", |xml| {
		assert_eq!(xml.depth(), 1);
		assert_eq!(xml.stack.names().collect::<Vec<_>>(), ["table"]);

		tag!(xml, "tr", |xml| {
			assert_eq!(xml.depth(), 2);
			assert_eq!(xml.stack.names().collect::<Vec<_>>(), ["table", "tr"]);
			assert!(xml.pending.is_none());

			tag!(xml, "td", "x")?;
		})?;

		assert_eq!(xml.depth(), 1);
	})
	.unwrap();

	assert!(xml.is_idle());
	assert_eq!(xml.target(), "<table><tr><td>x</td></tr></table>");
}

#[test]
pub fn snapshot_is_restored_verbatim() {
	let mut xml = XmlMarkup::new();
	tag!(xml, "outer", { "class" => "dropdown" }, |xml| {
		let saved = xml.stack.last().cloned();
		tag!(xml, "inner", { "class" => "other" }, "x")?;
		assert_eq!(xml.stack.last().cloned(), saved);
		assert_eq!(
			saved.and_then(|saved| saved.attributes.get("class").map(str::to_string)),
			Some("dropdown".to_string())
		);
	})
	.unwrap();

	assert_eq!(
		xml.target(),
		r#"<outer class="dropdown"><inner class="other">x</inner></outer>"#
	);
}

#[test]
pub fn text_wins_over_nested() {
	let mut called = false;
	let mut xml = XmlMarkup::new();

	xml.tag(
		"p",
		[
			TagArg::nested(|_| {
				called = true;
				Ok(())
			}),
			TagArg::from("text"),
		],
	)
	.unwrap();

	assert!(!called);
	assert_eq!(xml.target(), "<p>text</p>");
}

#[test]
pub fn nested_error_leaves_tag_open() {
	trace();

	let mut xml = XmlMarkup::new();
	let result = tag!(xml, "outer", |xml| {
		tag!(xml, "inner", |xml| {
			tag!(xml, "ok", "1")?;
			return Err(MarkupError::nested("boom"));
		})?;
	})
	.map(|_| ());

	match result {
		Err(MarkupError::Nested(error)) => assert_eq!(error.to_string(), "boom"),
		other => panic!("expected a nested error, got {other:?}"),
	}

	assert_eq!(xml.target(), "<outer><inner><ok>1</ok>");
	assert!(xml.is_idle());

	tag!(xml, "next").unwrap();
	assert_eq!(xml.target(), "<outer><inner><ok>1</ok><next/>");
}

#[test]
pub fn idle_after_every_branch() {
	let mut xml = XmlMarkup::new();

	tag!(xml, "a").unwrap();
	assert!(xml.is_idle());

	tag!(xml, "b", "text").unwrap();
	assert!(xml.is_idle());

	tag!(xml, "c", |xml| {
		xml.text("t");
	})
	.unwrap();
	assert!(xml.is_idle());

	assert_eq!(xml.target(), "<a/><b>text</b><c>t</c>");
}

#[test]
pub fn builder_methods() -> Result<()> {
	let mut xml = XmlMarkup::new();
	xml.emit(
		Tag::new("img")
			.with_attributes(Attributes::new().with("src", "x.png"))
			.attr("width", 30),
	)?
	.emit(Tag::new("b").with_text("bold"))?;

	assert_eq!(xml.target(), r#"<img src="x.png" width="30"/><b>bold</b>"#);
	assert_eq!(String::from(xml), r#"<img src="x.png" width="30"/><b>bold</b>"#);
	Ok(())
}
