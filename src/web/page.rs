use base64::{engine::general_purpose::STANDARD, Engine as _};
use html_escape::{encode_double_quoted_attribute, encode_text};
use kraken::ocr::OcrOutput;
use kraken::upload::{validate_upload, UploadedImage};

const TITLE: &str = "OCR with Kraken";

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; display: flex; margin: 0; color: #1f2937; }}
aside {{ width: 18rem; padding: 1.5rem; background: #f3f4f6; min-height: 100vh; }}
main {{ flex: 1; padding: 1.5rem 2rem; max-width: 900px; }}
label {{ display: block; margin: 0.75rem 0 0.25rem; }}
textarea {{ width: 100%; height: 300px; font-family: monospace; }}
pre.json {{ background: #111827; color: #e5e7eb; padding: 1rem; white-space: pre-wrap; }}
.error {{ background: #fee2e2; color: #991b1b; padding: 0.75rem 1rem; border-radius: 6px; white-space: pre-wrap; }}
img.preview {{ max-width: 100%; }}
</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = TITLE,
        body = body,
    )
}

fn form() -> String {
    r#"<form action="/ocr" method="post" enctype="multipart/form-data" style="display: contents">
<aside>
<h2>OCR Settings</h2>
<label for="custom_model_path">Path to Custom Kraken Model (optional)</label>
<input type="text" id="custom_model_path" name="custom_model_path" value="">
<label><input type="checkbox" name="layout_analysis" value="on"> Enable Layout Analysis</label>
<input type="hidden" name="binarization" value="off">
<label><input type="checkbox" name="binarization" value="on" checked> Enable Binarization</label>
<label for="output_format">Output Format</label>
<select id="output_format" name="output_format">
<option value="plain" selected>Plain Text</option>
<option value="json">JSON</option>
</select>
</aside>
<main>
<h1>OCR with Kraken</h1>
<p>Upload an image, and we'll extract the text using Kraken OCR.</p>
<label for="image">Upload Image</label>
<input type="file" id="image" name="image" accept=".jpg,.jpeg,.png,.tiff" required>
<p><button type="submit">Run OCR</button></p>
</main>
</form>"#
        .to_string()
}

pub fn render_index() -> String {
    layout(&form())
}

/// Data URL used to show the uploaded image back to the user.
pub fn image_data_url(upload: &UploadedImage) -> Option<String> {
    let upload_type = validate_upload(upload).ok()?;
    Some(format!(
        "data:{};base64,{}",
        upload_type.mime_type(),
        STANDARD.encode(&upload.bytes)
    ))
}

fn preview_html(preview: Option<&str>) -> String {
    match preview {
        Some(url) => format!(
            r#"<figure><img class="preview" src="{}" alt="Uploaded Image"><figcaption>Uploaded Image</figcaption></figure>"#,
            encode_double_quoted_attribute(url)
        ),
        None => String::new(),
    }
}

/// Plain text goes into a text area. JSON is shown exactly as kraken wrote it.
pub fn render_result(output: &OcrOutput, preview: Option<&str>) -> String {
    let rendered = if output.is_json() {
        format!(r#"<pre class="json">{}</pre>"#, encode_text(&output.content))
    } else {
        format!(
            r#"<label for="extracted">Extracted Text</label>
<textarea id="extracted" readonly>{}</textarea>"#,
            encode_text(&output.content)
        )
    };

    layout(&format!(
        r#"<main>
<h1>{title}</h1>
{preview}
<h2>OCR Output</h2>
{rendered}
<p><a href="/">Run another image</a></p>
</main>"#,
        title = TITLE,
        preview = preview_html(preview),
        rendered = rendered,
    ))
}

pub fn render_error(message: &str, preview: Option<&str>) -> String {
    layout(&format!(
        r#"<main>
<h1>{title}</h1>
{preview}
<div class="error">{message}</div>
<p><a href="/">Back</a></p>
</main>"#,
        title = TITLE,
        preview = preview_html(preview),
        message = encode_text(message),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kraken::ocr::OutputFormat;

    #[test]
    fn test_index_defaults() {
        let page = render_index();
        assert!(page.contains(r#"name="binarization" value="on" checked"#));
        assert!(page.contains(r#"<option value="plain" selected>"#));
        assert!(page.contains(r#"enctype="multipart/form-data""#));
    }

    #[test]
    fn test_plain_text_goes_into_textarea() {
        let output = OcrOutput::new(OutputFormat::PlainText, "a < b".to_string());
        let page = render_result(&output, None);
        assert!(page.contains("<textarea id=\"extracted\" readonly>a &lt; b</textarea>"));
        assert!(!page.contains("class=\"json\""));
    }

    #[test]
    fn test_json_is_not_reformatted() {
        let raw = r#"{"text":"x",   "lines":[]}"#;
        let output = OcrOutput::new(OutputFormat::Json, raw.to_string());
        let page = render_result(&output, None);
        assert!(page.contains(&format!(r#"<pre class="json">{}</pre>"#, encode_text(raw))));
    }

    #[test]
    fn test_error_is_escaped() {
        let page = render_error("Error running Kraken OCR: <bad>", None);
        assert!(page.contains("Error running Kraken OCR: &lt;bad&gt;"));
    }

    #[test]
    fn test_preview_requires_image_bytes() {
        let upload = UploadedImage::new(Some("page.png".to_string()), b"text".to_vec());
        assert!(image_data_url(&upload).is_none());
    }
}
