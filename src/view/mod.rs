use std::io;
use std::path::Path;

use serde::Serialize;

pub mod list_renderer;
pub mod preview;

pub const DEFAULT_CONTAINER_CLASS: &str = "mb-8 flex h-72 flex-col gap-2 overflow-scroll font-sans";

pub const LIST_TEMPLATE_FILE: &str = "postlist.tpl";
pub const PREVIEW_TEMPLATE_FILE: &str = "preview.tpl";

const DEFAULT_LIST_TEMPLATE: &str = r#"<div class="{{class_name}}">{{#previews}}
{{{html}}}{{/previews}}
</div>
"#;

const DEFAULT_PREVIEW_TEMPLATE: &str = r#"<a data-key="{{key}}" href="{{href}}">{{slug}}</a>"#;

/// What the child preview receives. `key` and `slug` are both the directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewPlaceholder {
    pub key: String,
    pub slug: String,
}

impl PreviewPlaceholder {
    pub fn new(name: String) -> Self {
        PreviewPlaceholder {
            key: name.clone(),
            slug: name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostListView {
    pub class_name: String,
    pub previews: Vec<PreviewPlaceholder>,
}

impl PostListView {
    pub fn new(previews: Vec<PreviewPlaceholder>) -> Self {
        PostListView {
            class_name: DEFAULT_CONTAINER_CLASS.to_string(),
            previews,
        }
    }

    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.class_name = class_name.to_string();
        self
    }
}

/// Raw template text for the list container and for a single preview.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSources {
    pub list: String,
    pub preview: String,
}

impl Default for TemplateSources {
    fn default() -> Self {
        TemplateSources {
            list: DEFAULT_LIST_TEMPLATE.to_string(),
            preview: DEFAULT_PREVIEW_TEMPLATE.to_string(),
        }
    }
}

impl TemplateSources {
    /// Files missing from `template_dir` fall back to the built-in templates.
    pub fn load(template_dir: Option<&Path>) -> io::Result<TemplateSources> {
        let mut sources = TemplateSources::default();
        let Some(template_dir) = template_dir else {
            return Ok(sources);
        };

        if let Some(list) = read_if_exists(&template_dir.join(LIST_TEMPLATE_FILE))? {
            sources.list = list;
        }
        if let Some(preview) = read_if_exists(&template_dir.join(PREVIEW_TEMPLATE_FILE))? {
            sources.preview = preview;
        }

        Ok(sources)
    }
}

fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error reading template {}: {}", path.display(), e))),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_placeholder_key_is_slug() {
        let placeholder = PreviewPlaceholder::new("hello-world".to_string());
        assert_eq!(placeholder.key, "hello-world");
        assert_eq!(placeholder.slug, "hello-world");
    }

    #[test]
    fn test_view_to_json() {
        let view = PostListView::new(vec![PreviewPlaceholder::new("a".to_string())]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["class_name"], DEFAULT_CONTAINER_CLASS);
        assert_eq!(json["previews"][0]["slug"], "a");
        assert_eq!(json["previews"][0]["key"], "a");
    }

    #[test]
    fn test_load_templates() {
        assert_eq!(TemplateSources::load(None).unwrap(), TemplateSources::default());

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREVIEW_TEMPLATE_FILE), "<p>{{slug}}</p>").unwrap();
        let sources = TemplateSources::load(Some(dir.path())).unwrap();
        assert_eq!(sources.preview, "<p>{{slug}}</p>");
        assert_eq!(sources.list, DEFAULT_LIST_TEMPLATE);
    }
}
