use {
	crate::args::{Attributes, Scalar},
	::tracing::trace,
};

/// the pending slot's contents, owned so it can outlive the arguments it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTag {
	/// the tag name
	pub name: String,
	/// attributes, already written with the opening tag
	pub attributes: Attributes<'static>,
	/// literal content, if any
	pub text: Option<Scalar<'static>>,
}

/// saved pending tags of every enclosing nested emission, innermost last
#[derive(Debug, Default)]
pub struct ContextStack {
	frames: Vec<PendingTag>,
}

impl ContextStack {
	/// an empty stack
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// save a pending tag before its nested content runs
	pub fn push(&mut self, pending: PendingTag) {
		trace!(tag = %pending.name, depth = self.frames.len() + 1, "push");
		self.frames.push(pending);
	}

	/// restore the innermost saved tag
	pub fn pop(&mut self) -> Option<PendingTag> {
		let pending = self.frames.pop();
		if let Some(pending) = &pending {
			trace!(tag = %pending.name, depth = self.frames.len(), "pop");
		}
		pending
	}

	/// the innermost saved tag
	#[must_use]
	pub fn last(&self) -> Option<&PendingTag> {
		self.frames.last()
	}

	/// how many tags are saved
	#[must_use]
	pub fn depth(&self) -> usize {
		self.frames.len()
	}

	/// whether no tag is saved
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// names of the saved tags, outermost first
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.frames.iter().map(|pending| &*pending.name)
	}
}
