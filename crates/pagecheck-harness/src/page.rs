//! Synthetic pages with inline markup and component placeholders

use crate::component::{Component, RenderContext};
use crate::error::{HarnessError, HarnessResult};
use crate::params::PageParameters;

/// A page built from inline markup, with components attached by id.
///
/// Rendering substitutes each attached component into the element carrying
/// a matching `data-component-id` attribute: the element's tag and
/// attributes are kept, its body is replaced with the component's output.
/// Placeholders with no attached component render unchanged.
pub struct Page {
    markup: String,
    components: Vec<Box<dyn Component>>,
    params: PageParameters,
}

impl Page {
    /// Create a page from complete markup (doctype through `</html>`)
    pub fn with_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            components: Vec::new(),
            params: PageParameters::new(),
        }
    }

    /// Attach the parameters the page is started with
    pub fn with_parameters(mut self, params: PageParameters) -> Self {
        self.params = params;
        self
    }

    /// Attach a component to its placeholder
    pub fn add(mut self, component: impl Component + 'static) -> Self {
        self.components.push(Box::new(component));
        self
    }

    pub fn parameters(&self) -> &PageParameters {
        &self.params
    }

    /// Render the page, substituting every attached component.
    ///
    /// Fails when a component's placeholder does not exist in the markup.
    pub(crate) fn render(&self) -> HarnessResult<String> {
        let ctx = RenderContext::new(&self.params);
        let mut markup = self.markup.clone();
        for component in &self.components {
            let body = component.render(&ctx);
            markup = substitute(&markup, component.id().as_str(), &body)?;
        }
        Ok(markup)
    }
}

/// Replace the body of the element carrying `data-component-id="<id>"`.
///
/// The scan is textual (no DOM round-trip, so untouched markup is preserved
/// byte-for-byte) and depth-aware: nested elements with the same tag name do
/// not confuse the close-tag search. A self-closing placeholder is expanded
/// to an open/close pair around the body.
pub(crate) fn substitute(markup: &str, id: &str, body: &str) -> HarnessResult<String> {
    let attr_pos = find_placeholder(markup, id).ok_or_else(|| HarnessError::UnboundComponent {
        id: id.to_string(),
    })?;

    let tag_start = markup[..attr_pos]
        .rfind('<')
        .ok_or_else(|| HarnessError::UnboundComponent { id: id.to_string() })?;
    let tag_name: String = markup[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ':')
        .collect();

    let tag_end = find_tag_end(markup, tag_start).ok_or_else(|| {
        HarnessError::UnclosedPlaceholder {
            id: id.to_string(),
            tag: tag_name.clone(),
        }
    })?;

    let start_tag = &markup[tag_start..tag_end];
    if start_tag.trim_end().ends_with('/') {
        // Self-closing placeholder: expand to an open/close pair
        let open = start_tag.trim_end().trim_end_matches('/').trim_end();
        let replacement = format!("{}>{}</{}>", open, body, tag_name);
        let mut result = String::with_capacity(markup.len() + body.len());
        result.push_str(&markup[..tag_start]);
        result.push_str(&replacement);
        result.push_str(&markup[tag_end + 1..]);
        return Ok(result);
    }

    let close_start = find_matching_close(markup, tag_end + 1, &tag_name).ok_or_else(|| {
        HarnessError::UnclosedPlaceholder {
            id: id.to_string(),
            tag: tag_name.clone(),
        }
    })?;

    let mut result = String::with_capacity(markup.len() + body.len());
    result.push_str(&markup[..tag_end + 1]);
    result.push_str(body);
    result.push_str(&markup[close_start..]);
    Ok(result)
}

/// Locate the placeholder attribute for the given id (either quote style)
fn find_placeholder(markup: &str, id: &str) -> Option<usize> {
    let double = format!("data-component-id=\"{}\"", id);
    let single = format!("data-component-id='{}'", id);
    markup.find(&double).or_else(|| markup.find(&single))
}

/// Index of the '>' closing the tag that starts at `tag_start`, skipping
/// any '>' inside quoted attribute values
fn find_tag_end(markup: &str, tag_start: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (offset, c) in markup[tag_start..].char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '>') => return Some(tag_start + offset),
            (None, _) => {}
        }
    }
    None
}

/// Index of the `</tag` closing the element whose start tag ends before
/// `from`, counting nested same-named elements
fn find_matching_close(markup: &str, from: usize, tag_name: &str) -> Option<usize> {
    let open = format!("<{}", tag_name);
    let close = format!("</{}", tag_name);
    let mut depth = 0usize;
    let mut pos = from;

    loop {
        let next_close = next_token(markup, pos, &close)?;
        match next_token(markup, pos, &open) {
            Some(next_open) if next_open < next_close => {
                let end = find_tag_end(markup, next_open)?;
                // Self-closing nested elements do not open a level
                if !markup[next_open..end].trim_end().ends_with('/') {
                    depth += 1;
                }
                pos = end + 1;
            }
            _ => {
                if depth == 0 {
                    return Some(next_close);
                }
                depth -= 1;
                pos = next_close + close.len();
            }
        }
    }
}

/// Find `pat` at a tag-name boundary (so `<span` does not match `<spanner`)
fn next_token(markup: &str, from: usize, pat: &str) -> Option<usize> {
    let mut search = from;
    while let Some(rel) = markup.get(search..)?.find(pat) {
        let at = search + rel;
        let after = at + pat.len();
        let boundary = markup[after..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'));
        if boundary {
            return Some(at);
        }
        search = at + 1;
    }
    None
}
