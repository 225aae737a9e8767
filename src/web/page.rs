//! HTML rendering for the form page

use crate::video::VideoId;

const TITLE: &str = "YouTube Transcript to Detailed Notes Converter";

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:760px;margin:2rem auto;padding:0 1rem;color:#222}\
input[type=text]{width:100%;padding:.5rem;font-size:1rem;box-sizing:border-box}\
button{margin:.75rem .5rem .75rem 0;padding:.5rem 1rem;font-size:1rem}\
img{width:100%;border-radius:6px}\
.notes{white-space:pre-wrap;line-height:1.5}\
.error{color:#b00020;font-weight:600}";

/// What the page shows for one request.
pub struct PageView<'a> {
    pub url: &'a str,
    pub video_id: Option<&'a VideoId>,
    pub notes: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Escape text for safe inclusion in HTML content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(view: &PageView<'_>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n<style>{}</style>\n", TITLE, STYLE));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", TITLE));

    html.push_str("<form method=\"post\" action=\"/notes\">\n");
    html.push_str("<label for=\"url\">Enter YouTube Video Link:</label>\n");
    html.push_str(&format!(
        "<input type=\"text\" id=\"url\" name=\"url\" value=\"{}\" autofocus>\n",
        escape_html(view.url)
    ));
    html.push_str("<button type=\"submit\" formmethod=\"get\" formaction=\"/\">Preview</button>");
    html.push_str("<button type=\"submit\">Get Detailed Notes</button>\n</form>\n");

    if let Some(video_id) = view.video_id {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"Thumbnail for video {}\">\n",
            escape_html(&video_id.thumbnail_url()),
            escape_html(video_id.as_str())
        ));
    }

    if let Some(error) = view.error {
        html.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape_html(error)
        ));
    }

    if let Some(notes) = view.notes {
        html.push_str("<h2>Detailed Notes:</h2>\n");
        html.push_str(&format!("<div class=\"notes\">{}</div>\n", escape_html(notes)));
    }

    html.push_str("</body>\n</html>\n");
    html
}
