//! Landing page with upload forms for `/files/` and `/uploadfiles/`.

use axum::{response::Html, routing::get, Router};

use crate::http::server::AppState;

const UPLOAD_FORM: &str = r#"<body>
<form action="/files/" enctype="multipart/form-data" method="post">
<input name="files" type="file" multiple>
<input type="submit">
</form>
<form action="/uploadfiles/" enctype="multipart/form-data" method="post">
<input name="files" type="file" multiple>
<input type="submit">
</form>
</body>
"#;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(upload_form))
}

pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}
