use std::borrow::Cow;

use ramhorns::Template;
use url::Url;

use crate::error::PostListError;
use crate::view::PreviewPlaceholder;

const VIEW_BASE_URL: &str = "http://localhost/view/";

/// Renders one post preview. Receives the slug (and its key), nothing else.
pub trait PostPreview {
    fn render(&self, placeholder: &PreviewPlaceholder) -> String;
}

#[derive(ramhorns::Content)]
struct PreviewItem<'a> {
    key: &'a str,
    slug: &'a str,
    href: &'a str,
}

pub struct TemplatePreview<'a> {
    pub template: Template<'a>,
    view_base: Url,
}

impl<'a> TemplatePreview<'a> {
    pub fn new(preview_tpl_src: impl Into<Cow<'a, str>>) -> Result<TemplatePreview<'a>, PostListError> {
        // ramhorns takes its own `beef::Cow`, so hand it the borrowed/owned str directly.
        let parsed = match preview_tpl_src.into() {
            Cow::Borrowed(s) => Template::new(s),
            Cow::Owned(s) => Template::new(s),
        };
        let template = match parsed {
            Ok(x) => x,
            Err(e) => return Err(PostListError::Template(format!("preview template: {}", e))),
        };
        let view_base = Url::parse(VIEW_BASE_URL)
            .map_err(|e| PostListError::Template(format!("preview base url: {}", e)))?;

        Ok(TemplatePreview {
            template,
            view_base,
        })
    }

    /// `/view/<slug>/` with the slug percent-encoded as a single path segment.
    pub fn view_href(&self, slug: &str) -> String {
        let mut url = self.view_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(slug).push("");
        }
        url.path().to_string()
    }
}

impl PostPreview for TemplatePreview<'_> {
    fn render(&self, placeholder: &PreviewPlaceholder) -> String {
        let href = self.view_href(&placeholder.slug);
        self.template.render(&PreviewItem {
            key: placeholder.key.as_str(),
            slug: placeholder.slug.as_str(),
            href: href.as_str(),
        })
    }
}
