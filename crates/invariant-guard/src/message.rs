//! Failure messages, given either as a literal or as a closure that builds the
//! text only when an assertion fails.

use std::borrow::Cow;
use std::fmt;

/// Message attached to a failed assertion.
pub enum Message<'a> {
    /// Text known up front.
    Literal(Cow<'a, str>),
    /// Text built on demand. Invoked at most once, and only on failure.
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> Message<'a> {
    /// Create a literal message.
    pub fn literal(text: impl Into<Cow<'a, str>>) -> Self {
        Message::Literal(text.into())
    }

    /// Create a lazily evaluated message.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> String + 'a,
    {
        Message::Lazy(Box::new(f))
    }

    /// Produce the final text, running the closure of a lazy message.
    pub fn resolve(self) -> String {
        match self {
            Message::Literal(text) => text.into_owned(),
            Message::Lazy(f) => f(),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Message::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Conversion into a [`Message`].
///
/// The assertion functions take `impl IntoMessage` and only call
/// [`IntoMessage::into_message`] once the condition has failed, so passing a
/// closure costs nothing on the success path.
pub trait IntoMessage<'a> {
    /// Convert into a message without resolving it.
    fn into_message(self) -> Message<'a>;
}

impl<'a> IntoMessage<'a> for Message<'a> {
    fn into_message(self) -> Message<'a> {
        self
    }
}

impl<'a> IntoMessage<'a> for &'a str {
    fn into_message(self) -> Message<'a> {
        Message::Literal(Cow::Borrowed(self))
    }
}

impl<'a> IntoMessage<'a> for &'a String {
    fn into_message(self) -> Message<'a> {
        Message::Literal(Cow::Borrowed(self.as_str()))
    }
}

impl<'a> IntoMessage<'a> for String {
    fn into_message(self) -> Message<'a> {
        Message::Literal(Cow::Owned(self))
    }
}

impl<'a> IntoMessage<'a> for Cow<'a, str> {
    fn into_message(self) -> Message<'a> {
        Message::Literal(self)
    }
}

impl<'a, F> IntoMessage<'a> for F
where
    F: FnOnce() -> String + 'a,
{
    fn into_message(self) -> Message<'a> {
        Message::lazy(self)
    }
}
