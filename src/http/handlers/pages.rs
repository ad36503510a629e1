use axum::response::Html;

// Presentational snapshots; the contact form posts nowhere by design.

pub async fn about() -> Html<&'static str> {
    Html(include_str!("../../../assets/about.html"))
}

pub async fn contact() -> Html<&'static str> {
    Html(include_str!("../../../assets/contact.html"))
}
