//! Tree builder.
//!
//! Consumes lexer tokens and maintains a stack of open frames. Each frame
//! owns the tag that opened it, its style delta and the children collected
//! so far; closing a frame folds it into its parent as a styled node.

use styled::{Component, Style};

use crate::config::ParserConfig;
use crate::error::{ParseError, TagError};
use crate::placeholder::Placeholders;
use crate::registry::{Directive, Entry, Modifier, Tag, TagContext};

use super::lexer::{Lexer, Token, TokenKind};
use super::tag::{ArgumentQueue, TagArgument};

/// Parses markup into a component tree.
///
/// # Examples
///
/// ```
/// use minimark::parser::parse;
/// use minimark::{ParserConfig, Placeholders};
///
/// let tree = parse("<bold>Hello</bold> World", &ParserConfig::default(), &Placeholders::new()).unwrap();
/// assert_eq!(tree.plain_text(), "Hello World");
/// assert_eq!(tree.children().len(), 2);
/// ```
pub fn parse(input: &str, config: &ParserConfig, placeholders: &Placeholders) -> Result<Component, ParseError> {
    Session {
        config,
        placeholders,
        depth: 0,
        nesting: 0,
    }
    .run(input)
}

/// Shared state of one parse and all parses nested inside it.
#[derive(Clone, Copy)]
pub(crate) struct Session<'a> {
    pub(crate) config: &'a ParserConfig,
    pub(crate) placeholders: &'a Placeholders,
    pub(crate) depth: usize,
    /// Tags open in the enclosing parses.
    pub(crate) nesting: usize,
}

impl<'a> Session<'a> {
    pub(crate) fn nested(&self, input: &str) -> Result<Component, ParseError> {
        let depth = self.depth + 1;
        if depth > self.config.max_recursion_depth {
            return Err(ParseError::RecursionLimitExceeded { depth });
        }
        log::trace!("nested parse at depth {depth}: {input:?}");
        Session { depth, ..*self }.run(input)
    }

    fn run(self, input: &str) -> Result<Component, ParseError> {
        let mut builder = TreeBuilder::new(self);
        let mut lexer = Lexer::new(input);

        while let Some(next) = lexer.next() {
            let token = match next {
                Ok(token) => token,
                Err(err) if !self.config.strict_syntax => {
                    log::debug!("{err}, reading the tag as text");
                    lexer.resume();
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            builder.process(token, &mut lexer)?;
        }

        builder.finish()
    }
}

/// An open tag.
struct Frame {
    /// Lowercased tag name, for matching close tags.
    name: String,
    args: Vec<String>,
    delta: Style,
    /// Style in effect inside this frame.
    resolved: Style,
    children: Vec<Component>,
    modifier: Option<Box<dyn Modifier>>,
    offset: usize,
}

impl Frame {
    /// Close args must be a prefix of the open args.
    fn closed_by(&self, name: &str, args: &[TagArgument]) -> bool {
        self.name == name
            && args.len() <= self.args.len()
            && args.iter().zip(&self.args).all(|(close, open)| close.value() == open)
    }
}

struct TreeBuilder<'a> {
    session: Session<'a>,
    base: Style,
    root: Vec<Component>,
    frames: Vec<Frame>,
}

impl<'a> TreeBuilder<'a> {
    fn new(session: Session<'a>) -> Self {
        // Only the outermost parse carries the base style.
        let base = if session.depth == 0 {
            session.config.base_style.clone()
        } else {
            Style::default()
        };
        Self {
            session,
            base,
            root: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Tags open at this point, counting enclosing parses.
    fn nesting(&self) -> usize {
        self.session.nesting + self.frames.len()
    }

    fn current_style(&self) -> &Style {
        self.frames.last().map_or(&self.base, |frame| &frame.resolved)
    }

    fn append(&mut self, node: Component) {
        match self.frames.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.root.push(node),
        }
    }

    fn append_text(&mut self, text: impl Into<String>) {
        self.append(Component::text(text));
    }

    fn process(&mut self, token: Token<'_>, lexer: &mut Lexer<'_>) -> Result<(), ParseError> {
        let Token { kind, raw, offset } = token;
        match kind {
            TokenKind::Literal(text) => {
                self.append_text(text.into_owned());
                Ok(())
            }
            TokenKind::OpenTag {
                name,
                args,
                self_closing,
            } => self.open_tag(name, &args, self_closing, raw, offset, lexer),
            TokenKind::CloseTag { name, args } => self.close_tag(name, &args, raw, offset),
        }
    }

    fn open_tag(
        &mut self,
        name: &str,
        args: &[TagArgument],
        self_closing: bool,
        raw: &str,
        offset: usize,
        lexer: &mut Lexer<'_>,
    ) -> Result<(), ParseError> {
        let lower = name.to_lowercase();
        let config = self.session.config;

        let resolved = {
            let session = Session {
                nesting: self.nesting(),
                ..self.session
            };
            let ctx = TagContext::new(session, self.current_style(), offset);
            let mut queue = ArgumentQueue::new(args);
            if let Some(placeholder) = self.session.placeholders.named(&lower) {
                Some(placeholder.to_tag(&ctx))
            } else {
                match config.registry.resolve(&lower) {
                    Some(Entry::Directive(directive)) => Some(Ok(Tag::Directive(directive))),
                    Some(Entry::Handler(handler)) => Some(handler.resolve(&lower, &mut queue, &ctx)),
                    None => None,
                }
            }
        };

        let tag = match resolved {
            Some(Ok(tag)) => tag,
            Some(Err(TagError::Parse(err))) => return Err(*err),
            Some(Err(TagError::Argument { index, reason })) => {
                if config.strict_tags {
                    return Err(ParseError::TagArgument {
                        tag: lower,
                        arg_index: index,
                        reason,
                    });
                }
                log::debug!("<{lower}> argument {index} rejected ({reason}), keeping tag as text");
                self.append_text(raw);
                return Ok(());
            }
            None => {
                if config.strict_tags {
                    return Err(ParseError::UnknownTag { name: lower, offset });
                }
                log::debug!("unknown tag <{lower}> at offset {offset}, keeping it as text");
                self.append_text(raw);
                return Ok(());
            }
        };

        match tag {
            Tag::Insert(nodes) => {
                for node in nodes {
                    self.append(node);
                }
            }
            Tag::Style(_) | Tag::Modify(_) if self_closing => {
                log::trace!("self-closing <{lower}/> has no content to style");
            }
            Tag::Style(_) | Tag::Modify(_) if self.nesting() >= config.max_nesting_depth => {
                let depth = self.nesting() + 1;
                if config.strict_tags {
                    return Err(ParseError::NestingLimitExceeded {
                        name: lower,
                        depth,
                        offset,
                    });
                }
                log::debug!("<{lower}> at offset {offset} would nest {depth} tags deep, keeping it as text");
                self.append_text(raw);
            }
            Tag::Style(delta) => self.push_frame(lower, args, delta, None, offset),
            Tag::Modify(modifier) => self.push_frame(lower, args, Style::default(), Some(modifier), offset),
            Tag::Directive(Directive::Reset) => {
                if config.strict_closing {
                    return Err(ParseError::ResetNotAllowed { offset });
                }
                self.close_all();
            }
            Tag::Directive(Directive::Pre) => {
                if !self_closing {
                    let body = lexer.take_verbatim(name);
                    if !body.is_empty() {
                        self.append_text(body);
                    }
                }
            }
        }
        Ok(())
    }

    fn close_tag(&mut self, name: &str, args: &[TagArgument], raw: &str, offset: usize) -> Result<(), ParseError> {
        let config = self.session.config;

        if name.is_empty() {
            if self.frames.is_empty() {
                log::debug!("</> at offset {offset} has nothing to close, keeping it as text");
                self.append_text(raw);
            } else {
                self.pop_frame();
            }
            return Ok(());
        }

        let lower = name.to_lowercase();
        let known = self.session.placeholders.named(&lower).is_some();
        match config.registry.resolve(&lower) {
            Some(Entry::Directive(Directive::Reset)) if !known => return Ok(()),
            None if !known => {
                if config.strict_tags {
                    return Err(ParseError::UnknownTag { name: lower, offset });
                }
                self.append_text(raw);
                return Ok(());
            }
            _ => {}
        }

        let Some(index) = self.frames.iter().rposition(|frame| frame.closed_by(&lower, args)) else {
            log::debug!("</{lower}> at offset {offset} matches no open tag, keeping it as text");
            self.append_text(raw);
            return Ok(());
        };

        let inner = self.frames.len() - index - 1;
        if inner > 0 {
            if config.strict_closing {
                return Err(ParseError::MismatchedCloseTag {
                    expected: self.frames.last().map(|frame| frame.name.clone()),
                    found: lower,
                    offset,
                });
            }
            log::debug!("</{lower}> at offset {offset} also closes {inner} inner tag(s)");
        }
        while self.frames.len() > index {
            self.pop_frame();
        }
        Ok(())
    }

    fn push_frame(
        &mut self,
        name: String,
        args: &[TagArgument],
        delta: Style,
        modifier: Option<Box<dyn Modifier>>,
        offset: usize,
    ) {
        log::trace!("push <{name}> at depth {}", self.frames.len() + 1);
        let resolved = self.current_style().apply(&delta);
        self.frames.push(Frame {
            name,
            args: args.iter().map(|arg| arg.value().to_string()).collect(),
            delta,
            resolved,
            children: Vec::new(),
            modifier,
            offset,
        });
    }

    fn pop_frame(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        log::trace!("pop <{}> at depth {}", frame.name, self.frames.len() + 1);

        let mut node = Component::empty().with_style(frame.delta).with_children(frame.children);
        if let Some(mut modifier) = frame.modifier {
            node = modifier.apply(node);
        }
        self.append(node);
    }

    fn close_all(&mut self) {
        while !self.frames.is_empty() {
            self.pop_frame();
        }
    }

    fn finish(mut self) -> Result<Component, ParseError> {
        if let Some(innermost) = self.frames.last() {
            if self.session.config.strict_closing {
                return Err(ParseError::UnclosedTag {
                    names: self.frames.iter().map(|frame| frame.name.clone()).collect(),
                    offset: innermost.offset,
                });
            }
            log::debug!("closing {} unclosed tag(s) at end of input", self.frames.len());
            self.close_all();
        }

        if self.base.is_empty() && self.root.len() == 1 {
            if let Some(only) = self.root.pop() {
                return Ok(only);
            }
        }
        Ok(Component::empty().with_style(self.base).with_children(self.root))
    }
}
