pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Canonical watch URL for a video, with extra query parameters appended in order.
pub fn watch_url(video_id: &str, queries: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}", WATCH_URL_BASE, video_id);
    for (key, value) in queries {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

/// Escapes a serialized JSON payload so it can sit inside a `<script>` element.
pub fn escape_script_payload(json: &str) -> String {
    json.replace("</", "<\\/")
}
