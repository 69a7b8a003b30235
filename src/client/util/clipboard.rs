use dioxus::prelude::*;

/// Writes through the async clipboard API, falling back to a hidden text area and
/// `execCommand("copy")` where the API is missing or refused.
const COPY_SCRIPT: &str = r#"
const text = await dioxus.recv();
try {
    if (navigator.clipboard && window.isSecureContext) {
        await navigator.clipboard.writeText(text);
        return true;
    }
} catch (_) {}
const area = document.createElement("textarea");
area.value = text;
area.setAttribute("readonly", "");
area.style.position = "fixed";
area.style.opacity = "0";
document.body.appendChild(area);
area.select();
let copied = false;
try {
    copied = document.execCommand("copy");
} catch (_) {
    copied = false;
}
document.body.removeChild(area);
return copied;
"#;

/// Copies `text` to the clipboard, returning an error message when neither path worked.
pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let mut eval = document::eval(COPY_SCRIPT);
    eval.send(text)
        .map_err(|e| format!("Failed to reach the clipboard: {}", e))?;

    match eval.join::<bool>().await {
        Ok(true) => Ok(()),
        Ok(false) => Err("Copying is not permitted by the browser".to_string()),
        Err(e) => Err(format!("Failed to copy: {}", e)),
    }
}
