use std::io;
use std::sync::Arc;

use ntex::web;
use spdlog::{debug, error, info};

use crate::config::Config;
use crate::error::PostListError;
use crate::post_list::{PostList, PostsRoot};
use crate::view::list_renderer::ListRenderer;
use crate::view::preview::TemplatePreview;
use crate::view::{PostListView, TemplateSources};

type PostListRenderer = ListRenderer<'static, TemplatePreview<'static>>;

pub struct AppState {
    post_list: PostList,
    renderer: PostListRenderer,
    container_class: Option<String>,
}

impl AppState {
    /// Templates are parsed once here so a broken template fails at startup.
    pub fn new(post_list: PostList, templates: TemplateSources, container_class: Option<String>) -> Result<Self, PostListError> {
        let preview = TemplatePreview::new(templates.preview)?;
        let renderer = ListRenderer::new(templates.list, preview)?;

        Ok(AppState {
            post_list,
            renderer,
            container_class,
        })
    }

    pub async fn render_view(&self) -> Result<PostListView, PostListError> {
        let view = self.post_list.render().await?;
        debug!("Rendering {} post previews", view.previews.len());
        Ok(match self.container_class {
            Some(ref class_name) => view.with_class_name(class_name),
            None => view,
        })
    }

    pub async fn render_html(&self) -> Result<String, PostListError> {
        let view = self.render_view().await?;
        Ok(self.renderer.render(&view))
    }
}

fn list_error(e: PostListError) -> web::HttpResponse {
    error!("Error listing posts: {}", e);
    web::HttpResponse::InternalServerError()
        .body(format!("Error listing posts: {}", e))
}

async fn list_response(state: &AppState) -> web::HttpResponse {
    match state.render_html().await {
        Ok(rendered) => web::HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(e) => list_error(e),
    }
}

#[web::get("/")]
async fn index(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    list_response(&state).await
}

#[web::get("/list")]
async fn list(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    list_response(&state).await
}

#[web::get("/posts.json")]
async fn posts_json(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let view = match state.render_view().await {
        Ok(view) => view,
        Err(e) => return list_error(e),
    };

    match serde_json::to_string(&view) {
        Ok(json) => web::HttpResponse::Ok()
            .content_type("application/json")
            .body(json),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error serializing posts: {}", e)),
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(list)
        .service(posts_json);
}

pub fn build_state(config: &Config, posts_root: PostsRoot) -> io::Result<AppState> {
    let templates = TemplateSources::load(config.paths.template_dir.as_deref())?;
    let post_list = PostList::new(posts_root).with_order(config.defaults.listing_order);

    AppState::new(post_list, templates, config.defaults.container_class.clone())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
}

pub async fn server_run(config: Config, posts_root: PostsRoot) -> io::Result<()> {
    info!("Serving posts from {}", posts_root.path().display());

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let app_state = Arc::new(build_state(&config, posts_root)?);

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .configure(routes)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
