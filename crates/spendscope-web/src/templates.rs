//! Page templates, embedded at compile time and rendered with minijinja.

use minijinja::{context, Environment, Value};
use spendscope_common::{GraphEntry, ImageEntry, Result};

pub const INDEX_TEMPLATE_NAME: &str = "index.html";

/// The dashboard page: chart fragments followed by the image gallery.
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Build the template environment. `.html` templates auto-escape, so chart
/// fragments are marked `|safe` inside the template itself.
pub fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
    Ok(env)
}

pub fn render_dashboard(
    env: &Environment<'_>,
    graphs: &[GraphEntry],
    images: &[ImageEntry],
    images_url: &str,
) -> Result<String> {
    let page = env.get_template(INDEX_TEMPLATE_NAME)?.render(context! {
        graphs => graphs,
        images => images,
        // validated config value, not user input
        images_url => Value::from_safe_string(images_url.to_string()),
    })?;
    Ok(page)
}
