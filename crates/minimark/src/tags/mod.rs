//! Built-in tags.

mod color;
mod content;
mod decoration;
mod event;
mod gradient;
mod insertion;

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::placeholder::ArgumentTag;
use crate::registry::{Directive, TagRegistry, TagRegistryBuilder};

pub use gradient::{Gradient, Rainbow};

static STANDARD: Lazy<Arc<TagRegistry>> = Lazy::new(|| Arc::new(standard_builder().build()));

/// The shared registry with every built-in tag.
pub fn standard() -> Arc<TagRegistry> {
    Arc::clone(&STANDARD)
}

/// A builder pre-populated with every built-in tag.
pub fn standard_builder() -> TagRegistryBuilder {
    let builder = TagRegistry::builder();
    let builder = color::register(builder);
    let builder = decoration::register(builder);
    let builder = event::register(builder);
    let builder = insertion::register(builder);
    let builder = content::register(builder);
    let builder = gradient::register(builder);
    builder
        .register(["arg", "argument"], ArgumentTag)
        .directive(["reset"], Directive::Reset)
        .directive(["pre"], Directive::Pre)
}
