use axum::Json;

use summit::data::Message;

/// Handle the `/` route
pub async fn index() -> Json<Message> {
    Json(Message::new("Health & Safety Summit API is running"))
}

/// Handle the `/api/hello` route
pub async fn hello() -> Json<Message> {
    Json(Message::new("Welcome to the Health & Safety Summit"))
}
