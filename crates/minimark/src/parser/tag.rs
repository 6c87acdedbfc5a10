//! Tag arguments and the queue handlers consume them from.

use smallvec::SmallVec;

use crate::error::TagError;

/// Arguments of a single tag, in source order.
pub type Arguments = SmallVec<[TagArgument; 4]>;

/// One `:`-separated argument of a tag, already unquoted and unescaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagArgument {
    value: String,
    quoted: bool,
    offset: usize,
}

impl TagArgument {
    pub fn new(value: impl Into<String>, quoted: bool, offset: usize) -> Self {
        Self {
            value: value.into(),
            quoted,
            offset,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the argument was written in quotes.
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Byte offset of the argument in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn lower_value(&self) -> String {
        self.value.to_lowercase()
    }

    /// `true` or `on`, ignoring case.
    pub fn is_true(&self) -> bool {
        self.value.eq_ignore_ascii_case("true") || self.value.eq_ignore_ascii_case("on")
    }

    /// `false` or `off`, ignoring case.
    pub fn is_false(&self) -> bool {
        self.value.eq_ignore_ascii_case("false") || self.value.eq_ignore_ascii_case("off")
    }

    pub fn as_int(&self) -> Option<i64> {
        self.value.trim().parse().ok()
    }

    pub fn as_float(&self) -> Option<f32> {
        self.value.trim().parse().ok().filter(|value: &f32| value.is_finite())
    }
}

/// A cursor over the arguments of one tag.
///
/// Handlers pop arguments in order; errors carry the index of the argument
/// they refer to.
///
/// # Examples
///
/// ```
/// use minimark::parser::{ArgumentQueue, TagArgument};
///
/// let args = [TagArgument::new("show_text", false, 7), TagArgument::new("hi", true, 17)];
/// let mut queue = ArgumentQueue::new(&args);
/// assert_eq!(queue.pop().map(TagArgument::value), Some("show_text"));
/// assert!(queue.has_next());
/// ```
#[derive(Clone, Debug)]
pub struct ArgumentQueue<'a> {
    args: &'a [TagArgument],
    index: usize,
}

impl<'a> ArgumentQueue<'a> {
    pub fn new(args: &'a [TagArgument]) -> Self {
        Self { args, index: 0 }
    }

    /// Take the next argument.
    pub fn pop(&mut self) -> Option<&'a TagArgument> {
        let arg = self.args.get(self.index)?;
        self.index += 1;
        Some(arg)
    }

    /// Take the next argument or fail with `reason`.
    pub fn pop_or(&mut self, reason: impl Into<String>) -> Result<&'a TagArgument, TagError> {
        match self.args.get(self.index) {
            Some(arg) => {
                self.index += 1;
                Ok(arg)
            }
            None => Err(TagError::Argument {
                index: self.index,
                reason: reason.into(),
            }),
        }
    }

    pub fn peek(&self) -> Option<&'a TagArgument> {
        self.args.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.args.len()
    }

    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.args.len() - self.index
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Build an error about the most recently taken argument.
    pub fn error(&self, reason: impl Into<String>) -> TagError {
        TagError::Argument {
            index: self.index.saturating_sub(1),
            reason: reason.into(),
        }
    }

    /// Fail if any argument is left over.
    pub fn finish(&self) -> Result<(), TagError> {
        match self.peek() {
            Some(extra) => Err(self.error_at_next(format!("unexpected argument '{}'", extra.value()))),
            None => Ok(()),
        }
    }

    /// Build an error about the next, not yet taken, argument.
    pub fn error_at_next(&self, reason: impl Into<String>) -> TagError {
        TagError::Argument {
            index: self.index,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<TagArgument> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| TagArgument::new(*value, false, i))
            .collect()
    }

    #[test]
    fn pop_in_order() {
        let args = args(&["a", "b"]);
        let mut queue = ArgumentQueue::new(&args);
        assert_eq!(queue.remaining(), 2);
        assert_eq!(queue.pop().map(TagArgument::value), Some("a"));
        assert_eq!(queue.peek().map(TagArgument::value), Some("b"));
        assert_eq!(queue.pop().map(TagArgument::value), Some("b"));
        assert!(queue.pop().is_none());
        assert!(!queue.has_next());
    }

    #[test]
    fn pop_or_reports_missing_index() {
        let args = args(&["open_url"]);
        let mut queue = ArgumentQueue::new(&args);
        assert!(queue.pop_or("action").is_ok());
        assert_eq!(
            queue.pop_or("value"),
            Err(TagError::Argument {
                index: 1,
                reason: "value".into()
            })
        );
    }

    #[test]
    fn finish_rejects_leftovers() {
        let args = args(&["Hello", " world"]);
        let mut queue = ArgumentQueue::new(&args);
        queue.pop();
        assert_eq!(
            queue.finish(),
            Err(TagError::Argument {
                index: 1,
                reason: "unexpected argument ' world'".into()
            })
        );
        queue.pop();
        assert_eq!(queue.finish(), Ok(()));
    }

    #[test]
    fn error_points_at_last_taken() {
        let args = args(&["a", "b"]);
        let mut queue = ArgumentQueue::new(&args);
        queue.pop();
        queue.pop();
        assert_eq!(
            queue.error("bad"),
            TagError::Argument {
                index: 1,
                reason: "bad".into()
            }
        );
    }

    #[test]
    fn boolean_and_numeric_values() {
        assert!(TagArgument::new("TRUE", false, 0).is_true());
        assert!(TagArgument::new("off", false, 0).is_false());
        assert!(!TagArgument::new("maybe", false, 0).is_true());
        assert_eq!(TagArgument::new("12", false, 0).as_int(), Some(12));
        assert_eq!(TagArgument::new("-0.5", false, 0).as_float(), Some(-0.5));
        assert_eq!(TagArgument::new("red", false, 0).as_float(), None);
        assert_eq!(TagArgument::new("NaN", false, 0).as_float(), None);
    }
}
