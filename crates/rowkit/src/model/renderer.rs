//! Item renderers.
//!
//! A renderer turns one model value into the content of its row. Views call
//! it whenever a row is created or re-attached, so it should be cheap and
//! side-effect free.
//!
//! ```
//! use rowkit::model::{FnRenderer, ItemRenderer};
//!
//! struct Person {
//!     name: String,
//!     email: String,
//! }
//!
//! let renderer = FnRenderer::new(|p: &Person| format!("{} <{}>", p.name, p.email));
//! let ada = Person { name: "Ada".into(), email: "ada@example.com".into() };
//! assert_eq!(renderer.render(&ada), "Ada <ada@example.com>");
//! ```

use std::fmt;

/// Converts a model value into displayable row content.
pub trait ItemRenderer<T>: Send + Sync {
    /// Renders the row content for `value`.
    fn render(&self, value: &T) -> String;
}

/// Renders values with their [`Display`](fmt::Display) implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayRenderer;

impl<T: fmt::Display> ItemRenderer<T> for DisplayRenderer {
    fn render(&self, value: &T) -> String {
        value.to_string()
    }
}

/// Renders values with a closure.
pub struct FnRenderer<F> {
    render: F,
}

impl<F> FnRenderer<F> {
    /// Wraps `render`.
    pub fn new(render: F) -> Self {
        Self { render }
    }
}

impl<T, F> ItemRenderer<T> for FnRenderer<F>
where
    F: Fn(&T) -> String + Send + Sync,
{
    fn render(&self, value: &T) -> String {
        (self.render)(value)
    }
}

impl<F> fmt::Debug for FnRenderer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRenderer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renderer() {
        assert_eq!(ItemRenderer::<i32>::render(&DisplayRenderer, &42), "42");
        assert_eq!(ItemRenderer::<&str>::render(&DisplayRenderer, &"Apple"), "Apple");
    }

    #[test]
    fn test_fn_renderer() {
        let renderer = FnRenderer::new(|n: &u32| format!("#{n}"));
        assert_eq!(renderer.render(&7), "#7");
    }
}
