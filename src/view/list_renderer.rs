use std::borrow::Cow;

use ramhorns::Template;

use crate::error::PostListError;
use crate::view::preview::PostPreview;
use crate::view::PostListView;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    class_name: &'a str,
    previews: Vec<RenderedPreview>,
}

#[derive(ramhorns::Content)]
struct RenderedPreview {
    html: String,
}

/// Wraps every rendered preview in the list container.
pub struct ListRenderer<'a, P> {
    pub template: Template<'a>,
    pub preview: P,
}

impl<'a, P: PostPreview> ListRenderer<'a, P> {
    pub fn new(list_tpl_src: impl Into<Cow<'a, str>>, preview: P) -> Result<ListRenderer<'a, P>, PostListError> {
        // ramhorns takes its own `beef::Cow`, so hand it the borrowed/owned str directly.
        let parsed = match list_tpl_src.into() {
            Cow::Borrowed(s) => Template::new(s),
            Cow::Owned(s) => Template::new(s),
        };
        let template = match parsed {
            Ok(x) => x,
            Err(e) => return Err(PostListError::Template(format!("list template: {}", e))),
        };

        Ok(ListRenderer {
            template,
            preview,
        })
    }

    pub fn render(&self, view: &PostListView) -> String {
        let previews = view.previews.iter()
            .map(|placeholder| RenderedPreview { html: self.preview.render(placeholder) })
            .collect();

        self.template.render(&ListPage {
            class_name: view.class_name.as_str(),
            previews,
        })
    }
}
